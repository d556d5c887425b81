//! Main update loop

use eframe::egui;
use std::time::Duration;

use crate::ui;
use crate::ui::toolbar::ToolbarAction;

use super::events;
use super::ChatApp;

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process network events
        events::process_events(&self.event_rx, &mut self.state, &self.history);

        // Request repaint to keep checking for events
        ctx.request_repaint_after(Duration::from_millis(100));

        let theme = self.get_theme();

        if let Some(ToolbarAction::Reconnect) = ui::toolbar::render_toolbar(
            ctx,
            &theme,
            &self.settings.server_url,
            self.state.is_connected,
        ) {
            self.state.log_system("Reconnecting...");
            self.do_connect();
        }

        ui::input::render_input_panel(ctx, &theme, &mut self.input, &self.action_tx);

        ui::messages::render_central_panel(ctx, &theme, &self.state);
    }
}
