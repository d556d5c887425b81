//! Core ChatApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;
use std::thread;

use crate::backend::run_backend;
use crate::config::{save_settings, Settings};
use crate::error::HistoryError;
use crate::history::HistoryStore;
use crate::input_state::InputState;
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::ChatState;
use crate::ui::ChatTheme;

pub struct ChatApp {
    // Core state (message log, connection status, activity log)
    pub state: ChatState,

    // Endpoints and preferences
    pub settings: Settings,

    // Persisted message history
    pub history: HistoryStore,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,

    // Input state (message composition, history recall)
    pub input: InputState,
}

impl ChatApp {
    /// Build the app: replay the persisted history, spawn the backend thread,
    /// and open the live transport.
    ///
    /// A corrupt history is a fatal startup error and propagates to the
    /// eframe app creator.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        history: HistoryStore,
    ) -> Result<Self, HistoryError> {
        match settings.theme.as_str() {
            "light" => cc.egui_ctx.set_visuals(egui::Visuals::light()),
            _ => cc.egui_ctx.set_visuals(egui::Visuals::dark()),
        }

        // Record replay happens before the backend can deliver anything live.
        let records = history.load()?;
        let mut state = ChatState::new();
        let replayed = records.len();
        state.replay(records);
        if replayed > 0 {
            state.log_system(format!("Replayed {} stored message(s)", replayed));
        }

        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        // Spawn the backend thread
        thread::spawn(move || {
            run_backend(action_rx, event_tx);
        });

        let mut input = InputState::new();
        input.history = settings.history.clone();

        let app = Self {
            state,
            settings,
            history,
            action_tx,
            event_rx,
            input,
        };
        app.do_connect();
        Ok(app)
    }

    pub(super) fn get_theme(&self) -> ChatTheme {
        match self.settings.theme.as_str() {
            "light" => ChatTheme::light(),
            _ => ChatTheme::dark(),
        }
    }

    /// Open (or reopen) the live transport with the configured endpoints.
    pub(super) fn do_connect(&self) {
        let _ = self.action_tx.send(BackendAction::Connect {
            server_url: self.settings.server_url.clone(),
            transport_url: self.settings.transport_url.clone(),
        });
    }
}

impl Drop for ChatApp {
    fn drop(&mut self) {
        // Persist settings on exit
        let mut settings = self.settings.clone();
        settings.history = self.input.history.clone();
        if let Err(e) = save_settings(&settings) {
            log::warn!("failed to save settings: {}", e);
        }
    }
}
