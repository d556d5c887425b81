//! The message record: the single entity exchanged with the transport and
//! persisted in the local history.
//!
//! Wire field names (`tipo`, `usuario`, `texto`, `timestamp`) match the chat
//! server's JSON exactly and must not change independently of it.

use serde::{Deserialize, Serialize};

/// Category tag of a message, used as its styling class.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum MessageKind {
    /// Sent by this client (echoed back through the transport).
    Own,
    /// Sent by another participant.
    Other,
    /// Server/system notice. Unknown tags degrade to this.
    System,
}

impl From<String> for MessageKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "own" => MessageKind::Own,
            "other" => MessageKind::Other,
            _ => MessageKind::System,
        }
    }
}

impl MessageKind {
    /// Style-class token for this kind.
    pub fn class(self) -> &'static str {
        match self {
            MessageKind::Own => "own",
            MessageKind::Other => "other",
            MessageKind::System => "system",
        }
    }
}

/// A single chat message as delivered by the live transport.
///
/// Records are append-only: once created they are never mutated, and the
/// persisted sequence keeps them in arrival order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MessageRecord {
    #[serde(rename = "tipo")]
    pub kind: MessageKind,

    /// Display name of the sender. Absent or blank means anonymous/system.
    #[serde(rename = "usuario", default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,

    /// Plain-text body. Always rendered as literal text.
    #[serde(rename = "texto")]
    pub text: String,

    /// Pre-formatted display timestamp, e.g. "10:00". Formatted by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl MessageRecord {
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            sender: None,
            text: text.into(),
            timestamp: None,
        }
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// The sender name to display, if any. Blank names count as absent.
    pub fn display_sender(&self) -> Option<&str> {
        match self.sender.as_deref() {
            Some(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }
}
