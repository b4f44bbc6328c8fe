//! Session setup and initialization

use crate::environment::Environment;
use crate::events::Event;
use crate::market::MarketDataSource;
use crate::sort::SortState;
use crate::workers::core::SnapshotUpdate;
use crate::workers::start_dashboard_workers;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Snapshot receiver for fetched token tables
    pub snapshot_receiver: mpsc::Receiver<SnapshotUpdate>,
    /// Requests an out-of-band refresh cycle
    pub refresh_sender: mpsc::Sender<()>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// Environment the session runs against
    pub environment: Environment,
    /// Display name of the market data source
    pub source_name: String,
    /// Reference currency for prices and valuations
    pub vs_currency: String,
    /// Sort state the table opens with
    pub initial_sort: SortState,
}

/// Sets up a dashboard session.
///
/// This function handles the common setup required for both TUI and headless
/// modes: it creates the shutdown channel, starts the workers against the
/// given data source, and returns the channels for mode-specific handling.
pub async fn setup_session(
    source: Arc<dyn MarketDataSource>,
    source_name: String,
    vs_currency: String,
    initial_sort: SortState,
) -> SessionData {
    let environment = source.environment().clone();

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let (event_receiver, snapshot_receiver, refresh_sender, join_handles) =
        start_dashboard_workers(source, shutdown_sender.subscribe()).await;

    SessionData {
        event_receiver,
        snapshot_receiver,
        refresh_sender,
        join_handles,
        shutdown_sender,
        environment,
        source_name,
        vs_currency,
        initial_sort,
    }
}
