//! Message input panel.
//!
//! Submission is fire-and-forget: the action goes to the backend and the
//! field is cleared and refocused in the same frame, never waiting on the
//! network. The sent text is not rendered locally; it appears when the
//! transport echoes it back.

use crossbeam_channel::Sender;
use eframe::egui::{self, Color32};

use crate::input_state::InputState;
use crate::protocol::BackendAction;

use super::theme::ChatTheme;

/// Take the composed text and, if non-blank, emit exactly one send action.
/// Returns whether a message was submitted.
pub fn submit(input: &mut InputState, action_tx: &Sender<BackendAction>) -> bool {
    match input.take_submission() {
        Some(text) => {
            let _ = action_tx.send(BackendAction::SendMessage { text });
            true
        }
        None => false,
    }
}

/// Render the bottom input panel. Enter submits; ArrowUp/ArrowDown recall
/// previously sent lines.
pub fn render_input_panel(
    ctx: &egui::Context,
    theme: &ChatTheme,
    input: &mut InputState,
    action_tx: &Sender<BackendAction>,
) {
    egui::TopBottomPanel::bottom("input_panel")
        .frame(
            egui::Frame::new()
                .fill(theme.surface)
                .inner_margin(egui::Margin::symmetric(12, 10))
                .stroke(egui::Stroke::new(1.0, theme.border)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let dark_mode = ctx.style().visuals.dark_mode;
                let input_frame = egui::Frame::new()
                    .fill(if dark_mode {
                        Color32::from_rgb(45, 45, 52)
                    } else {
                        Color32::WHITE
                    })
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(10, 8));

                input_frame.show(ui, |ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut input.message_input)
                            .desired_width(ui.available_width() - 4.0)
                            .frame(false)
                            .hint_text("Type a message... (Enter to send)"),
                    );

                    if response.has_focus() {
                        let outer = response.rect.expand(2.0);
                        ui.painter()
                            .rect_filled(outer, 8.0, theme.accent.linear_multiply(0.3));
                    }

                    // History navigation
                    if response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
                        input.navigate_up();
                    }
                    if response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
                        input.navigate_down();
                    }

                    // Esc clears the field
                    if response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                        input.message_input.clear();
                        input.reset_navigation();
                    }

                    // A single-line edit surrenders focus on Enter, so the
                    // submit check pairs lost_focus with the key press.
                    let enter_detected = response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    if enter_detected {
                        submit(input, action_tx);
                        // Keep the field focused whether or not anything was sent.
                        response.request_focus();
                    }
                });
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_submit_emits_exactly_one_action() {
        let (action_tx, action_rx) = unbounded();
        let mut input = InputState::new();
        input.message_input = "  hello ".into();

        assert!(submit(&mut input, &action_tx));

        // Cleared synchronously, before any network round trip could finish.
        assert!(input.message_input.is_empty());
        assert!(matches!(
            action_rx.try_recv().unwrap(),
            BackendAction::SendMessage { text } if text == "hello"
        ));
        assert!(action_rx.try_recv().is_err());
    }

    #[test]
    fn test_whitespace_only_submits_nothing() {
        let (action_tx, action_rx) = unbounded();
        let mut input = InputState::new();
        input.message_input = "   ".into();

        assert!(!submit(&mut input, &action_tx));
        assert!(action_rx.try_recv().is_err());
        assert_eq!(input.message_input, "   ");
    }
}
