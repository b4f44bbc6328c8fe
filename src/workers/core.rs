//! Core worker utilities

use crate::error_classifier::LogLevel;
use crate::events::{Event, EventType};
use crate::token::TokenRecord;
use tokio::sync::mpsc;

/// One fetched snapshot on its way to the renderer.
///
/// `seq` is a monotonically increasing request token: the renderer applies an
/// update only when its sequence is newer than the last one applied, so a
/// stale result can never overwrite a fresher table.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotUpdate {
    pub seq: u64,
    /// True when the interval triggered this cycle, false for manual
    /// refreshes. Manual refreshes do not reset the interval, so only
    /// scheduled updates move the next-refresh countdown.
    pub scheduled: bool,
    pub tokens: Vec<TokenRecord>,
}

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    pub async fn send_fetch_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::fetcher_with_level(message, event_type, log_level))
            .await;
    }

    pub async fn send_heartbeat_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::heartbeat_with_level(message, event_type, log_level))
            .await;
    }
}
