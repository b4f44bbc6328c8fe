//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::sort::{SortState, sort_snapshot};
use crate::token::TokenRecord;
use crate::ui::app::UIConfig;
use crate::workers::core::SnapshotUpdate;

use std::collections::VecDeque;
use std::time::Instant;

/// State for tracking fetching operations
#[derive(Debug, Clone)]
pub enum FetchingState {
    Idle,
    Active { started_at: Instant },
    Timeout,
}

/// Dashboard state: the sorted token table plus refresh bookkeeping.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// Display name of the market data source.
    pub source_name: String,
    /// Reference currency for prices and valuations.
    pub vs_currency: String,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// The current token snapshot, kept sorted under `sort`.
    pub tokens: Vec<TokenRecord>,
    /// Active sort column and direction.
    pub sort: SortState,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Queue of snapshot updates waiting to be applied
    pub pending_snapshots: VecDeque<SnapshotUpdate>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    /// Sequence of the newest snapshot applied so far. Updates at or below
    /// this sequence are stale and must not overwrite the table.
    last_applied_seq: u64,
    /// Current fetching state (active, timeout, idle)
    fetching_state: FetchingState,
    /// When the last snapshot update was applied, if any.
    last_refresh: Option<Instant>,
    /// When the last interval-triggered update was applied. Manual refreshes
    /// do not reset the interval, so the next-refresh countdown anchors here.
    last_scheduled_refresh: Option<Instant>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            environment,
            source_name: ui_config.source_name,
            vs_currency: ui_config.vs_currency,
            start_time,
            tokens: Vec::new(),
            sort: ui_config.initial_sort,
            pending_events: VecDeque::new(),
            pending_snapshots: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
            last_applied_seq: 0,
            // The first snapshot is in flight from startup, so the dashboard
            // opens with its loading indicator on.
            fetching_state: FetchingState::Active {
                started_at: Instant::now(),
            },
            last_refresh: None,
            last_scheduled_refresh: None,
        }
    }

    // Getter methods for private fields
    pub fn fetching_state(&self) -> &FetchingState {
        &self.fetching_state
    }

    pub fn last_applied_seq(&self) -> u64 {
        self.last_applied_seq
    }

    pub fn last_refresh(&self) -> Option<Instant> {
        self.last_refresh
    }

    pub fn last_scheduled_refresh(&self) -> Option<Instant> {
        self.last_scheduled_refresh
    }

    // Setter methods for private fields (for updaters)
    pub fn set_fetching_state(&mut self, state: FetchingState) {
        self.fetching_state = state;
    }

    /// Applies a snapshot update to the table.
    ///
    /// Stale updates, those whose sequence is not newer than the last applied
    /// one, are dropped without touching the table. A fresh update always
    /// clears the fetching indicator, even when its token list is empty.
    pub fn apply_snapshot(&mut self, update: SnapshotUpdate) {
        if update.seq <= self.last_applied_seq {
            return;
        }
        self.last_applied_seq = update.seq;
        self.tokens = update.tokens;
        sort_snapshot(&mut self.tokens, Some(self.sort.column), self.sort.direction);
        self.fetching_state = FetchingState::Idle;
        self.last_refresh = Some(Instant::now());
        if update.scheduled {
            self.last_scheduled_refresh = self.last_refresh;
        }
    }

    /// Activates a sort column and re-sorts the current table in place.
    ///
    /// Selecting the active column toggles its direction; selecting another
    /// column switches to it, descending first.
    pub fn select_column(&mut self, column: crate::sort::SortColumn) {
        self.sort.select(column);
        sort_snapshot(&mut self.tokens, Some(self.sort.column), self.sort.direction);
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }

    /// Add a snapshot update to the processing queue
    pub fn add_snapshot(&mut self, update: SnapshotUpdate) {
        self.pending_snapshots.push_back(update);
    }
}
