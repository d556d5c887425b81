//! Error types for storage, history, and transport failures.

use thiserror::Error;

/// Failures of the key-value storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The platform data directory could not be determined.
    #[error("storage directory unavailable")]
    DirUnavailable,

    #[error("storage i/o: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the persisted message history.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The persisted sequence is not valid JSON. Fatal at startup.
    #[error("persisted message history is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Failures of the outbound submission or the live transport.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("websocket: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),
}
