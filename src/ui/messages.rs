//! Message log rendering: walks the toolkit-independent element trees
//! produced by `render::render_record` and draws them with egui.

use eframe::egui::{self, Color32, RichText};

use crate::record::MessageKind;
use crate::render::{
    self, Element, ANIMATION_CLASS, BODY_CLASS, SENDER_CLASS, TEXT_CLASS, TIMESTAMP_CLASS,
};
use crate::state::ChatState;

use super::theme::{sender_color, ChatTheme};

/// Render the central message panel.
///
/// The scroll area sticks to the bottom, so after every render pass (startup
/// replay or a single live message) the newest content is visible.
pub fn render_central_panel(ctx: &egui::Context, theme: &ChatTheme, state: &ChatState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        render_activity_log(ui, &state.system_log, theme);
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.add_space(8.0);
                for msg in &state.messages {
                    let element = render::render_record(&msg.record, msg.animate());
                    draw_message(ui, &element, theme);
                }
                ui.add_space(8.0);
            });
    });
}

/// Collapsed by default; holds connection/activity diagnostics.
fn render_activity_log(ui: &mut egui::Ui, system_log: &[String], theme: &ChatTheme) {
    egui::CollapsingHeader::new(RichText::new("Activity").size(12.0).color(theme.text_muted))
        .default_open(false)
        .show(ui, |ui| {
            egui::ScrollArea::vertical()
                .max_height(120.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for line in system_log {
                        ui.label(RichText::new(line).size(12.0).color(theme.text_muted));
                    }
                });
        });
}

/// Draw one message element tree.
fn draw_message(ui: &mut egui::Ui, element: &Element, theme: &ChatTheme) {
    let animate = element.has_class(ANIMATION_CLASS);

    let fill = if animate {
        Some(theme.highlight_fill)
    } else {
        bubble_fill(element, theme)
    };

    ui.add_space(4.0);
    let frame = egui::Frame::new()
        .fill(fill.unwrap_or(Color32::TRANSPARENT))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(10, 6));

    frame.show(ui, |ui| {
        if let Some(sender) = element.find(SENDER_CLASS).and_then(|e| e.text.as_deref()) {
            ui.label(
                RichText::new(sender)
                    .size(13.0)
                    .strong()
                    .color(sender_color(sender)),
            );
        }

        if let Some(body) = element.find(BODY_CLASS) {
            let muted = element.has_class("system");
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;

                if let Some(text) = body.find(TEXT_CLASS).and_then(|e| e.text.as_deref()) {
                    if muted {
                        ui.label(
                            RichText::new(text)
                                .size(13.0)
                                .italics()
                                .color(theme.text_muted),
                        );
                    } else {
                        draw_text_with_links(ui, text, theme);
                    }
                }

                if let Some(ts) = body.find(TIMESTAMP_CLASS).and_then(|e| e.text.as_deref()) {
                    ui.add_space(8.0);
                    ui.label(RichText::new(ts).size(10.0).color(theme.text_muted));
                }
            });
        }
    });
}

fn bubble_fill(element: &Element, theme: &ChatTheme) -> Option<Color32> {
    let kind = if element.has_class("own") {
        MessageKind::Own
    } else if element.has_class("other") {
        MessageKind::Other
    } else {
        MessageKind::System
    };
    theme.kind_fill(kind)
}

/// Body text with URL detection: `http(s)://` words become hyperlinks, the
/// displayed string stays the literal text.
fn draw_text_with_links(ui: &mut egui::Ui, text: &str, theme: &ChatTheme) {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static URL_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^https?://\S+$").expect("URL regex pattern is valid"));

    for word in text.split_inclusive(char::is_whitespace) {
        let trimmed = word.trim();
        if URL_RE.is_match(trimmed) {
            ui.hyperlink_to(
                RichText::new(trimmed).size(14.0).color(theme.accent),
                trimmed,
            );
            if word.ends_with(char::is_whitespace) {
                ui.label(" ");
            }
        } else {
            ui.label(RichText::new(word).size(14.0).color(theme.text_primary));
        }
    }
}
