//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events

use super::state::{DashboardState, FetchingState};

use crate::consts::cli_consts::refresh;
use crate::events::{Event as WorkerEvent, EventType, Worker};

use std::time::Instant;

impl DashboardState {
    /// Update the dashboard state with new tick, events and snapshots.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            // Add to activity logs for display
            self.add_to_activity_log(event.clone());

            // Process the event for state updates
            self.process_event(&event);
        }

        // Apply queued snapshot updates; the stale-sequence guard lives in
        // apply_snapshot itself.
        while let Some(update) = self.pending_snapshots.pop_front() {
            self.apply_snapshot(update);
        }

        // Handle timeout logic (doesn't need events)
        self.check_fetching_timeout();
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &WorkerEvent) {
        if matches!(event.worker, Worker::SnapshotFetcher)
            && event.event_type == EventType::Refresh
            && !matches!(self.fetching_state(), FetchingState::Active { .. })
        {
            self.set_fetching_state(FetchingState::Active {
                started_at: Instant::now(),
            });
        }
    }

    /// Seconds elapsed since the last interval-triggered snapshot, together
    /// with the refresh interval. Drives the countdown gauge in the header.
    /// Anchored on scheduled updates only, since a manual refresh does not
    /// reset the interval.
    pub fn refresh_progress(&self) -> (u64, u64) {
        let interval_secs = refresh::REFRESH_INTERVAL_MS / 1000;
        let elapsed_secs = match self.last_scheduled_refresh() {
            Some(at) => at.elapsed().as_secs().min(interval_secs),
            None => 0,
        };
        (elapsed_secs, interval_secs)
    }

    /// Check for fetching timeout (doesn't need events)
    fn check_fetching_timeout(&mut self) {
        if let FetchingState::Active { started_at } = self.fetching_state() {
            if started_at.elapsed().as_secs() > refresh::FETCH_TIMEOUT_SECS {
                self.set_fetching_state(FetchingState::Timeout);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::error_classifier::LogLevel;
    use crate::sort::{SortColumn, SortDirection, SortState};
    use crate::token::TokenRecord;
    use crate::ui::app::UIConfig;
    use crate::workers::core::SnapshotUpdate;

    fn token(id: &str, market_cap: f64) -> TokenRecord {
        TokenRecord {
            id: id.to_string(),
            name: id.to_string(),
            symbol: id.to_string(),
            price: 1.0,
            market_cap,
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

    fn state() -> DashboardState {
        let ui_config = UIConfig {
            with_background_color: true,
            source_name: "CoinGecko".to_string(),
            vs_currency: "usd".to_string(),
            initial_sort: SortState::default(),
        };
        DashboardState::new(Environment::Production, Instant::now(), ui_config)
    }

    #[test]
    // A fresh snapshot replaces the table sorted under the active sort state
    // and clears the loading indicator.
    fn test_apply_snapshot_sorts_and_clears_fetching() {
        let mut s = state();
        s.add_snapshot(SnapshotUpdate {
            seq: 1,
            scheduled: true,
            tokens: vec![token("small", 10.0), token("big", 100.0)],
        });
        s.update();

        assert_eq!(s.tokens[0].id, "big");
        assert_eq!(s.last_applied_seq(), 1);
        assert!(matches!(s.fetching_state(), FetchingState::Idle));
        assert!(s.last_refresh().is_some());
    }

    #[test]
    // An update carrying an older sequence than the last applied one must
    // not overwrite the table.
    fn test_stale_snapshot_is_ignored() {
        let mut s = state();
        s.apply_snapshot(SnapshotUpdate {
            seq: 2,
            scheduled: true,
            tokens: vec![token("fresh", 100.0)],
        });
        s.apply_snapshot(SnapshotUpdate {
            seq: 1,
            scheduled: true,
            tokens: vec![token("stale", 100.0)],
        });

        assert_eq!(s.tokens.len(), 1);
        assert_eq!(s.tokens[0].id, "fresh");
        assert_eq!(s.last_applied_seq(), 2);
    }

    #[test]
    // An empty snapshot, the degraded result of a failed fetch, still clears
    // the loading indicator and empties the table.
    fn test_empty_snapshot_clears_fetching() {
        let mut s = state();
        s.apply_snapshot(SnapshotUpdate {
            seq: 1,
            scheduled: true,
            tokens: vec![token("old", 100.0)],
        });
        s.apply_snapshot(SnapshotUpdate {
            seq: 2,
            scheduled: true,
            tokens: vec![],
        });

        assert!(s.tokens.is_empty());
        assert!(matches!(s.fetching_state(), FetchingState::Idle));
    }

    #[test]
    // A refresh event from the fetcher turns the loading indicator on.
    fn test_refresh_event_sets_active() {
        let mut s = state();
        s.set_fetching_state(FetchingState::Idle);
        s.add_event(WorkerEvent::fetcher_with_level(
            "Refreshing market snapshot...".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        ));
        s.update();

        assert!(matches!(s.fetching_state(), FetchingState::Active { .. }));
        assert_eq!(s.activity_logs.len(), 1);
    }

    #[test]
    // Selecting the active column toggles direction; another column resets
    // to descending. The table re-sorts in place both times.
    fn test_select_column_resorts_in_place() {
        let mut s = state();
        s.apply_snapshot(SnapshotUpdate {
            seq: 1,
            scheduled: true,
            tokens: vec![token("small", 10.0), token("big", 100.0)],
        });
        assert_eq!(s.tokens[0].id, "big");

        s.select_column(SortColumn::MarketCap);
        assert_eq!(s.sort.direction, SortDirection::Asc);
        assert_eq!(s.tokens[0].id, "small");

        s.select_column(SortColumn::Name);
        assert_eq!(s.sort.column, SortColumn::Name);
        assert_eq!(s.sort.direction, SortDirection::Desc);
        assert_eq!(s.tokens[0].id, "small");
    }

    #[test]
    // A manual refresh updates the table but must not move the countdown
    // anchor, since the fetch interval keeps its original schedule.
    fn test_manual_refresh_keeps_countdown_anchor() {
        let mut s = state();
        s.apply_snapshot(SnapshotUpdate {
            seq: 1,
            scheduled: true,
            tokens: vec![token("alpha", 100.0)],
        });
        let anchor = s.last_scheduled_refresh();
        assert!(anchor.is_some());

        s.apply_snapshot(SnapshotUpdate {
            seq: 2,
            scheduled: false,
            tokens: vec![token("bravo", 200.0)],
        });

        assert_eq!(s.last_applied_seq(), 2);
        assert_eq!(s.last_scheduled_refresh(), anchor);
        assert_eq!(s.tokens[0].id, "bravo");
    }

    #[test]
    // The activity log is bounded.
    fn test_activity_log_is_bounded() {
        let mut s = state();
        for i in 0..(crate::consts::cli_consts::MAX_ACTIVITY_LOGS + 5) {
            s.add_to_activity_log(WorkerEvent::fetcher_with_level(
                format!("event {}", i),
                EventType::Success,
                LogLevel::Info,
            ));
        }
        assert_eq!(
            s.activity_logs.len(),
            crate::consts::cli_consts::MAX_ACTIVITY_LOGS
        );
    }
}
