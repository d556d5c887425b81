//! Live transport: the server push channel delivering message events.
//!
//! Frames are JSON envelopes `{"event": <name>, "data": <payload>}`. Only the
//! `"mensagem"` event carries a [`MessageRecord`]; everything else is the
//! collaborator's business and is skipped. Delivery, ordering, and
//! reconnection guarantees belong to the server side; this end only reads.

use futures::StreamExt;
use serde::Deserialize;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::error::TransportError;
use crate::record::MessageRecord;

/// Event name of a pushed chat message.
pub const MESSAGE_EVENT: &str = "mensagem";

#[derive(Deserialize)]
struct Envelope {
    event: String,
    data: serde_json::Value,
}

pub struct LiveSocket {
    ws: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

/// Open the push channel.
pub async fn connect(transport_url: &str) -> Result<LiveSocket, TransportError> {
    let (ws, _response) = connect_async(transport_url).await?;
    Ok(LiveSocket { ws })
}

impl LiveSocket {
    /// Next text frame from the channel; `Ok(None)` once the peer has closed.
    pub async fn next_frame(&mut self) -> Result<Option<String>, TransportError> {
        loop {
            match self.ws.next().await {
                None => return Ok(None),
                Some(Err(e)) => return Err(e.into()),
                Some(Ok(Message::Text(text))) => return Ok(Some(text.to_string())),
                Some(Ok(Message::Close(_))) => return Ok(None),
                // Ping/pong and binary frames are not part of the event stream.
                Some(Ok(_)) => continue,
            }
        }
    }

    pub async fn close(&mut self) {
        let _ = self.ws.close(None).await;
    }
}

/// Decode one frame into a message record.
///
/// Non-message events yield `None` silently; malformed frames are logged and
/// skipped. Transport noise is not a storage parse error and is never fatal.
pub fn parse_live_frame(frame: &str) -> Option<MessageRecord> {
    let envelope: Envelope = match serde_json::from_str(frame) {
        Ok(e) => e,
        Err(e) => {
            log::warn!("unparseable transport frame: {}", e);
            return None;
        }
    };
    if envelope.event != MESSAGE_EVENT {
        return None;
    }
    match serde_json::from_value(envelope.data) {
        Ok(record) => Some(record),
        Err(e) => {
            log::warn!("malformed {} payload: {}", MESSAGE_EVENT, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MessageKind;

    #[test]
    fn test_parse_message_event() {
        let frame = r#"{"event":"mensagem","data":{"tipo":"other","usuario":"Alice","texto":"hi","timestamp":"10:00"}}"#;
        let record = parse_live_frame(frame).expect("a message record");
        assert_eq!(record.kind, MessageKind::Other);
        assert_eq!(record.sender.as_deref(), Some("Alice"));
        assert_eq!(record.text, "hi");
        assert_eq!(record.timestamp.as_deref(), Some("10:00"));
    }

    #[test]
    fn test_other_events_are_skipped() {
        let frame = r#"{"event":"typing","data":{"usuario":"Bob"}}"#;
        assert!(parse_live_frame(frame).is_none());
    }

    #[test]
    fn test_malformed_frames_are_skipped() {
        assert!(parse_live_frame("not json").is_none());
        assert!(parse_live_frame(r#"{"event":"mensagem","data":{"texto":42}}"#).is_none());
    }
}
