//! Color themes and styling utilities.

use eframe::egui::Color32;

use crate::record::MessageKind;

pub struct ChatTheme {
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub success: Color32,
    pub warning: Color32,
    /// Panel background for the input bar and toolbar.
    pub surface: Color32,
    pub border: Color32,
    /// Background fill for own-message bubbles.
    pub own_fill: Color32,
    /// Background fill for other-participant bubbles.
    pub other_fill: Color32,
    /// Transient background of a just-arrived message.
    pub highlight_fill: Color32,
}

impl ChatTheme {
    pub fn dark() -> Self {
        Self {
            text_primary: Color32::from_rgb(220, 221, 222),
            text_secondary: Color32::from_rgb(181, 186, 193),
            text_muted: Color32::from_rgb(148, 155, 164),
            accent: Color32::from_rgb(88, 101, 242),
            success: Color32::from_rgb(35, 165, 90),
            warning: Color32::from_rgb(250, 166, 26),
            surface: Color32::from_rgb(43, 45, 49),
            border: Color32::from_rgb(63, 66, 72),
            own_fill: Color32::from_rgb(56, 59, 82),
            other_fill: Color32::from_rgb(50, 52, 56),
            highlight_fill: Color32::from_rgba_unmultiplied(88, 101, 242, 40),
        }
    }

    pub fn light() -> Self {
        Self {
            text_primary: Color32::from_rgb(35, 36, 40),
            text_secondary: Color32::from_rgb(75, 78, 84),
            text_muted: Color32::from_rgb(116, 120, 126),
            accent: Color32::from_rgb(71, 82, 196),
            success: Color32::from_rgb(36, 128, 70),
            warning: Color32::from_rgb(176, 114, 14),
            surface: Color32::from_rgb(242, 243, 245),
            border: Color32::from_rgb(210, 212, 216),
            own_fill: Color32::from_rgb(222, 226, 248),
            other_fill: Color32::from_rgb(233, 234, 237),
            highlight_fill: Color32::from_rgba_unmultiplied(71, 82, 196, 32),
        }
    }

    /// Bubble fill for a message kind. System notices get no bubble.
    pub fn kind_fill(&self, kind: MessageKind) -> Option<Color32> {
        match kind {
            MessageKind::Own => Some(self.own_fill),
            MessageKind::Other => Some(self.other_fill),
            MessageKind::System => None,
        }
    }
}

/// Sender name palette, chosen by a stable hash so a name keeps its color
/// across sessions.
const SENDER_COLORS: [Color32; 8] = [
    Color32::from_rgb(235, 111, 146),
    Color32::from_rgb(246, 193, 119),
    Color32::from_rgb(156, 207, 216),
    Color32::from_rgb(196, 167, 231),
    Color32::from_rgb(136, 192, 208),
    Color32::from_rgb(163, 190, 140),
    Color32::from_rgb(208, 135, 112),
    Color32::from_rgb(129, 161, 193),
];

pub fn sender_color(name: &str) -> Color32 {
    let mut hash: u32 = 2166136261;
    for byte in name.bytes() {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(16777619);
    }
    SENDER_COLORS[(hash % SENDER_COLORS.len() as u32) as usize]
}
