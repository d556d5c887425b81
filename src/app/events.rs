//! Backend event processing (live messages, connection status).

use crossbeam_channel::Receiver;

use crate::history::HistoryStore;
use crate::protocol::GuiEvent;
use crate::state::ChatState;

/// Drain all pending events from the backend, one at a time in delivery
/// order. Each live message is rendered (pushed to the visible log) and
/// appended to the persisted history.
pub fn process_events(event_rx: &Receiver<GuiEvent>, state: &mut ChatState, history: &HistoryStore) {
    while let Ok(event) = event_rx.try_recv() {
        match event {
            GuiEvent::Connected => {
                state.is_connected = true;
                state.log_system("✓ Connected to live transport");
            }

            GuiEvent::Disconnected(reason) => {
                state.is_connected = false;
                state.log_system(format!("✗ Disconnected: {}", reason));
            }

            GuiEvent::Error(msg) => {
                state.log_system(format!("⚠ Error: {}", msg));
            }

            GuiEvent::MessageReceived(record) => {
                // A failed append leaves the visible log intact; the record is
                // simply missing from the next replay.
                if let Err(e) = history.append(&record) {
                    log::warn!("history append failed: {}", e);
                    state.log_system(format!("⚠ History not saved: {}", e));
                }
                state.push_live(record);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{MessageKind, MessageRecord};
    use crate::storage::MemoryStorage;
    use crossbeam_channel::unbounded;

    fn history() -> HistoryStore {
        HistoryStore::new(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_live_message_is_rendered_and_persisted() {
        let (event_tx, event_rx) = unbounded();
        let mut state = ChatState::new();
        let history = history();

        let record = MessageRecord::new(MessageKind::Other, "hi")
            .with_sender("Alice")
            .with_timestamp("10:00");
        event_tx
            .send(GuiEvent::MessageReceived(record.clone()))
            .unwrap();

        process_events(&event_rx, &mut state, &history);

        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].record, record);
        assert!(state.messages[0].animate());
        assert_eq!(history.load().unwrap(), vec![record]);
    }

    #[test]
    fn test_messages_keep_delivery_order() {
        let (event_tx, event_rx) = unbounded();
        let mut state = ChatState::new();
        let history = history();

        for text in ["one", "two", "three"] {
            event_tx
                .send(GuiEvent::MessageReceived(MessageRecord::new(
                    MessageKind::Other,
                    text,
                )))
                .unwrap();
        }

        process_events(&event_rx, &mut state, &history);

        let rendered: Vec<&str> = state
            .messages
            .iter()
            .map(|m| m.record.text.as_str())
            .collect();
        assert_eq!(rendered, vec!["one", "two", "three"]);

        let persisted: Vec<String> = history
            .load()
            .unwrap()
            .into_iter()
            .map(|r| r.text)
            .collect();
        assert_eq!(persisted, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_connection_events_update_status() {
        let (event_tx, event_rx) = unbounded();
        let mut state = ChatState::new();
        let history = history();

        event_tx.send(GuiEvent::Connected).unwrap();
        process_events(&event_rx, &mut state, &history);
        assert!(state.is_connected);

        event_tx
            .send(GuiEvent::Disconnected("closed".into()))
            .unwrap();
        process_events(&event_rx, &mut state, &history);
        assert!(!state.is_connected);
        assert!(state.system_log.iter().any(|l| l.contains("Disconnected")));
    }
}
