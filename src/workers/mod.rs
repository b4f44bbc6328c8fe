//! Worker tasks behind the dashboard
//!
//! The snapshot fetcher drives the refresh cadence; a one-shot heartbeat
//! probe checks source liveness at startup without blocking anything.

pub mod core;
pub mod fetcher;

use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, SNAPSHOT_QUEUE_SIZE};
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::events::{Event, EventType};
use crate::market::MarketDataSource;
use core::{EventSender, SnapshotUpdate};
use fetcher::SnapshotFetcher;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Starts the dashboard workers against one data source.
///
/// Returns the channels the UI consumes: worker events, snapshot updates,
/// and the sender used to request an out-of-band refresh.
pub async fn start_dashboard_workers(
    source: Arc<dyn MarketDataSource>,
    shutdown: broadcast::Receiver<()>,
) -> (
    mpsc::Receiver<Event>,
    mpsc::Receiver<SnapshotUpdate>,
    mpsc::Sender<()>,
    Vec<JoinHandle<()>>,
) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (snapshot_sender, snapshot_receiver) =
        mpsc::channel::<SnapshotUpdate>(SNAPSHOT_QUEUE_SIZE);
    let (refresh_sender, refresh_receiver) = mpsc::channel::<()>(1);

    let events = EventSender::new(event_sender);
    let mut join_handles = Vec::new();

    // Startup liveness probe. Logged, never awaited by the pipeline.
    let heartbeat_source = source.clone();
    let heartbeat_events = events.clone();
    join_handles.push(tokio::spawn(async move {
        match heartbeat_source.heartbeat().await {
            Ok(says) => {
                heartbeat_events
                    .send_heartbeat_event(
                        format!("Source is live: {}", says),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
            }
            Err(e) => {
                let log_level = ErrorClassifier::new().classify_heartbeat_error(&e);
                heartbeat_events
                    .send_heartbeat_event(
                        format!("Heartbeat failed: {}", e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
            }
        }
    }));

    let fetcher = SnapshotFetcher::new(source, events, snapshot_sender);
    join_handles.push(tokio::spawn(fetcher.run(refresh_receiver, shutdown)));

    (
        event_receiver,
        snapshot_receiver,
        refresh_sender,
        join_handles,
    )
}
