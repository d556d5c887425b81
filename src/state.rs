//! Core application state, separated from UI logic.
//!
//! `ChatState` holds the in-memory message log and connection status. UI
//! components receive it as a parameter rather than reaching for globals.

use std::time::{Duration, Instant};

use chrono::Local;

use crate::record::MessageRecord;

/// How long a live-arrived message keeps its highlight.
pub const HIGHLIGHT_WINDOW: Duration = Duration::from_millis(1500);

/// Maximum system-log lines kept before trimming the oldest.
const MAX_SYSTEM_LOG: usize = 500;

/// One entry of the visible message log.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub record: MessageRecord,
    /// Set for live-arrived messages; `None` for startup replay.
    arrived_at: Option<Instant>,
}

impl ChatMessage {
    pub fn replayed(record: MessageRecord) -> Self {
        Self {
            record,
            arrived_at: None,
        }
    }

    pub fn live(record: MessageRecord) -> Self {
        Self {
            record,
            arrived_at: Some(Instant::now()),
        }
    }

    /// Whether the highlight transition still applies to this entry.
    pub fn animate(&self) -> bool {
        self.arrived_at
            .map(|t| t.elapsed() < HIGHLIGHT_WINDOW)
            .unwrap_or(false)
    }
}

/// All session data: the message log, connection status, and diagnostics.
#[derive(Default)]
pub struct ChatState {
    /// Whether the live transport is currently open.
    pub is_connected: bool,

    /// The visible message log, in arrival order. Replayed entries first.
    pub messages: Vec<ChatMessage>,

    /// Timestamped activity lines (connects, drops, errors).
    pub system_log: Vec<String>,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            is_connected: false,
            messages: Vec::new(),
            system_log: vec!["Welcome to Papo!".into()],
        }
    }

    /// Seed the log with the persisted sequence, in stored order.
    /// Called once at startup, before any live message is processed.
    pub fn replay(&mut self, records: Vec<MessageRecord>) {
        self.messages
            .extend(records.into_iter().map(ChatMessage::replayed));
    }

    /// Append a live-arrived message to the end of the log.
    pub fn push_live(&mut self, record: MessageRecord) {
        self.messages.push(ChatMessage::live(record));
    }

    /// Add a timestamped line to the activity log.
    pub fn log_system(&mut self, line: impl AsRef<str>) {
        let ts = Local::now().format("%H:%M:%S").to_string();
        self.system_log.push(format!("[{}] {}", ts, line.as_ref()));
        if self.system_log.len() > MAX_SYSTEM_LOG {
            self.system_log.remove(0);
        }
    }
}
