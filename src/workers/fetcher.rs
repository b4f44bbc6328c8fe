//! Snapshot fetching on the refresh cadence
//!
//! One worker owns the data source and runs the fetch half of the
//! fetch -> sort -> render pipeline. Two triggers: the 60-second interval
//! (first tick immediate, covering page initialization) and manual refresh
//! requests from header activation. Manual refreshes do not reset the
//! interval. Failures are logged and degrade to an empty snapshot; the next
//! cycle is the recovery mechanism.

use super::core::{EventSender, SnapshotUpdate};
use crate::consts::cli_consts::refresh;
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::events::EventType;
use crate::market::MarketDataSource;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::time::MissedTickBehavior;

pub struct SnapshotFetcher {
    source: Arc<dyn MarketDataSource>,
    event_sender: EventSender,
    snapshot_sender: mpsc::Sender<SnapshotUpdate>,
    classifier: ErrorClassifier,
    seq: u64,
}

impl SnapshotFetcher {
    pub fn new(
        source: Arc<dyn MarketDataSource>,
        event_sender: EventSender,
        snapshot_sender: mpsc::Sender<SnapshotUpdate>,
    ) -> Self {
        Self {
            source,
            event_sender,
            snapshot_sender,
            classifier: ErrorClassifier::new(),
            seq: 0,
        }
    }

    /// Runs one fetch cycle and always delivers a snapshot update, empty on
    /// failure. The renderer relies on the update arriving to clear its
    /// loading indicator, success or not. `scheduled` records which trigger
    /// fired, since manual refreshes do not move the interval.
    pub async fn fetch_cycle(&mut self, scheduled: bool) -> SnapshotUpdate {
        self.seq += 1;
        self.event_sender
            .send_fetch_event(
                "Refreshing market snapshot...".to_string(),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        let tokens = match self.source.fetch_snapshot().await {
            Ok(tokens) => {
                self.event_sender
                    .send_fetch_event(
                        format!("Fetched {} tokens", tokens.len()),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                tokens
            }
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                self.event_sender
                    .send_fetch_event(
                        format!("Failed to fetch snapshot: {}", e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
                Vec::new()
            }
        };

        let update = SnapshotUpdate {
            seq: self.seq,
            scheduled,
            tokens,
        };
        let _ = self.snapshot_sender.send(update.clone()).await;
        update
    }

    /// Refresh loop: one immediate cycle, then the interval, interleaved with
    /// out-of-band refresh requests, until shutdown.
    pub async fn run(
        mut self,
        mut refresh_rx: mpsc::Receiver<()>,
        mut shutdown: broadcast::Receiver<()>,
    ) {
        let mut interval = tokio::time::interval(refresh::refresh_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.fetch_cycle(true).await;
                }
                Some(()) = refresh_rx.recv() => {
                    self.fetch_cycle(false).await;
                }
                _ = shutdown.recv() => {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::market::MockMarketDataSource;
    use crate::market::error::MarketError;
    use crate::token::TokenRecord;

    fn token(id: &str) -> TokenRecord {
        TokenRecord {
            id: id.to_string(),
            name: id.to_string(),
            symbol: id.to_string(),
            price: 1.0,
            market_cap: 1.0,
            fdv: 0.0,
            volume_24h: 0.0,
            dex_volume: None,
            cex_volume: None,
            price_history: vec![],
            rank: None,
            image: None,
            decimals: None,
            total_supply: None,
            last_updated: None,
        }
    }

    fn fetcher_with(
        source: MockMarketDataSource,
    ) -> (
        SnapshotFetcher,
        mpsc::Receiver<crate::events::Event>,
        mpsc::Receiver<SnapshotUpdate>,
    ) {
        let (event_tx, event_rx) = mpsc::channel(16);
        let (snapshot_tx, snapshot_rx) = mpsc::channel(16);
        let fetcher = SnapshotFetcher::new(
            Arc::new(source),
            EventSender::new(event_tx),
            snapshot_tx,
        );
        (fetcher, event_rx, snapshot_rx)
    }

    #[tokio::test]
    /// A successful fetch delivers the tokens with the next sequence number.
    async fn test_fetch_cycle_delivers_tokens() {
        let mut source = MockMarketDataSource::new();
        source
            .expect_fetch_snapshot()
            .returning(|| Ok(vec![token("alpha"), token("bravo")]));
        let (mut fetcher, _events, mut snapshots) = fetcher_with(source);

        let update = fetcher.fetch_cycle(true).await;
        assert_eq!(update.seq, 1);
        assert!(update.scheduled);
        assert_eq!(update.tokens.len(), 2);
        assert_eq!(snapshots.recv().await.unwrap(), update);
    }

    #[tokio::test]
    /// A failed fetch is logged and degrades to an empty snapshot update, so
    /// the renderer draws zero rows and clears its loading indicator.
    async fn test_fetch_failure_yields_empty_snapshot() {
        let mut source = MockMarketDataSource::new();
        source.expect_fetch_snapshot().returning(|| {
            Err(MarketError::Http {
                status: 503,
                message: "unavailable".to_string(),
            })
        });
        let (mut fetcher, mut events, mut snapshots) = fetcher_with(source);

        let update = fetcher.fetch_cycle(true).await;
        assert!(update.tokens.is_empty());
        // A snapshot update is still delivered after the failure.
        assert_eq!(snapshots.recv().await.unwrap().seq, 1);

        // Refresh event first, then the classified error event.
        let first = events.recv().await.unwrap();
        assert_eq!(first.event_type, EventType::Refresh);
        let second = events.recv().await.unwrap();
        assert_eq!(second.event_type, EventType::Error);
        assert_eq!(second.log_level, LogLevel::Warn);
    }

    #[tokio::test]
    /// Sequence numbers increase monotonically across cycles.
    async fn test_sequence_is_monotonic() {
        let mut source = MockMarketDataSource::new();
        source
            .expect_fetch_snapshot()
            .returning(|| Ok(vec![token("alpha")]));
        let (mut fetcher, _events, _snapshots) = fetcher_with(source);

        assert_eq!(fetcher.fetch_cycle(true).await.seq, 1);
        assert_eq!(fetcher.fetch_cycle(false).await.seq, 2);
        assert_eq!(fetcher.fetch_cycle(true).await.seq, 3);
    }

    #[tokio::test]
    /// A manually triggered cycle is marked as such, so the UI can keep its
    /// countdown anchored to the interval.
    async fn test_manual_cycle_is_not_scheduled() {
        let mut source = MockMarketDataSource::new();
        source
            .expect_fetch_snapshot()
            .returning(|| Ok(vec![token("alpha")]));
        let (mut fetcher, _events, _snapshots) = fetcher_with(source);

        assert!(!fetcher.fetch_cycle(false).await.scheduled);
        assert!(fetcher.fetch_cycle(true).await.scheduled);
    }

    #[tokio::test]
    /// Unused trait operations stay callable through the mock.
    async fn test_mock_get_token() {
        let mut source = MockMarketDataSource::new();
        source
            .expect_get_token()
            .returning(|_| Ok(Some(token("alpha"))));
        source
            .expect_environment()
            .return_const(Environment::Production);

        let found = source.get_token("alpha").await.unwrap();
        assert_eq!(found.unwrap().id, "alpha");
    }
}
