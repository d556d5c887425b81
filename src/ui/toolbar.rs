//! Top toolbar with the server name and connection status.

use eframe::egui::{self, RichText};

use super::theme::ChatTheme;

/// Actions that the toolbar can request
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarAction {
    /// User asked to reopen the live transport
    Reconnect,
}

/// Render the top toolbar. Returns Some(action) if an action was requested.
pub fn render_toolbar(
    ctx: &egui::Context,
    theme: &ChatTheme,
    server_url: &str,
    is_connected: bool,
) -> Option<ToolbarAction> {
    let mut toolbar_action = None;

    egui::TopBottomPanel::top("toolbar")
        .frame(
            egui::Frame::new()
                .fill(theme.surface)
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Papo").size(16.0).strong().color(theme.text_primary));
                ui.add_space(8.0);
                ui.label(RichText::new(server_url).size(12.0).color(theme.text_muted));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if is_connected {
                        ui.label(RichText::new("● Connected").size(12.0).color(theme.success));
                    } else {
                        if ui.button("Reconnect").clicked() {
                            toolbar_action = Some(ToolbarAction::Reconnect);
                        }
                        ui.label(RichText::new("○ Offline").size(12.0).color(theme.warning));
                    }
                });
            });
        });

    toolbar_action
}
