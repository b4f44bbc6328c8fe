//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::sort::{SortState, sort_snapshot};
use crate::token::TokenRecord;
use crate::ui::dashboard::utils::{format_magnitude, format_price};
use crate::workers::core::SnapshotUpdate;
use std::error::Error;

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console event logging
/// 2. Plain-text table output on every snapshot
/// 3. Ctrl+C shutdown handling
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    // Print session start message
    print_session_starting("headless", &session.source_name);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();
    let sort = session.initial_sort;
    let mut last_applied_seq = 0u64;

    // Event loop: log events and snapshots to console until shutdown
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                println!("{}", event);
            }
            Some(update) = session.snapshot_receiver.recv() => {
                // Same stale-update rule as the TUI table.
                if update.seq > last_applied_seq {
                    last_applied_seq = update.seq;
                    print_snapshot(update, sort);
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    // Wait for workers to finish
    print_session_shutdown();
    for handle in session.join_handles {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(())
}

fn print_snapshot(mut update: SnapshotUpdate, sort: SortState) {
    sort_snapshot(&mut update.tokens, Some(sort.column), sort.direction);
    println!(
        "{:<5} {:<24} {:>14} {:>10} {:>10} {:>10}",
        "#", "NAME", "PRICE", "MKT CAP", "FDV", "VOL 24H"
    );
    for token in &update.tokens {
        println!("{}", format_row(token));
    }
}

fn format_row(token: &TokenRecord) -> String {
    let rank = token
        .rank
        .map(|r| r.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:<5} {:<24} {:>14} {:>10} {:>10} {:>10}",
        rank,
        format!("{} ({})", token.name, token.symbol.to_uppercase()),
        format_price(token.price),
        format_magnitude(token.market_cap),
        format_magnitude(token.fdv),
        format_magnitude(token.volume_24h),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row_missing_rank() {
        let token = TokenRecord {
            id: "btc".to_string(),
            name: "Bitcoin".to_string(),
            symbol: "btc".to_string(),
            price: 43000.5,
            market_cap: 3_100_000_000.0,
            fdv: 0.0,
            volume_24h: 2_500_000.0,
            dex_volume: None,
            cex_volume: None,
            price_history: vec![],
            rank: None,
            image: None,
            decimals: None,
            total_supply: None,
            last_updated: None,
        };
        let row = format_row(&token);
        assert!(row.starts_with("-"));
        assert!(row.contains("Bitcoin (BTC)"));
        assert!(row.contains("$43000.50"));
        assert!(row.contains("3.10B"));
        assert!(row.contains("2.50M"));
    }
}
