use crate::record::MessageRecord;

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Open the live transport and remember the submission endpoint
    Connect {
        server_url: String,
        transport_url: String,
    },
    /// Close the live transport
    Disconnect,
    /// Submit composed text to the remote endpoint (fire-and-forget)
    SendMessage { text: String },
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// Live transport is open
    Connected,
    /// Live transport closed or dropped
    Disconnected(String),
    /// Transport-level error
    Error(String),
    /// A message arrived on the live channel
    MessageReceived(MessageRecord),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{MessageKind, MessageRecord};
    use crossbeam_channel::unbounded;

    #[test]
    fn test_action_channel_communication() {
        let (action_tx, action_rx) = unbounded::<BackendAction>();

        action_tx
            .send(BackendAction::Connect {
                server_url: "http://127.0.0.1:5000".into(),
                transport_url: "ws://127.0.0.1:5000/socket".into(),
            })
            .unwrap();
        action_tx
            .send(BackendAction::SendMessage { text: "hello".into() })
            .unwrap();
        action_tx.send(BackendAction::Disconnect).unwrap();

        assert!(matches!(action_rx.recv().unwrap(), BackendAction::Connect { .. }));
        assert!(matches!(
            action_rx.recv().unwrap(),
            BackendAction::SendMessage { text } if text == "hello"
        ));
        assert!(matches!(action_rx.recv().unwrap(), BackendAction::Disconnect));
    }

    #[test]
    fn test_gui_event_types() {
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        event_tx.send(GuiEvent::Connected).unwrap();
        event_tx
            .send(GuiEvent::MessageReceived(
                MessageRecord::new(MessageKind::Other, "hi").with_sender("Alice"),
            ))
            .unwrap();
        event_tx.send(GuiEvent::Disconnected("closed".into())).unwrap();

        assert!(matches!(event_rx.recv().unwrap(), GuiEvent::Connected));
        assert!(matches!(
            event_rx.recv().unwrap(),
            GuiEvent::MessageReceived(record) if record.text == "hi"
        ));
        assert!(matches!(event_rx.recv().unwrap(), GuiEvent::Disconnected(_)));
    }
}
