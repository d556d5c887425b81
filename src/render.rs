//! Toolkit-independent message rendering.
//!
//! A [`MessageRecord`] turns into a small [`Element`] tree with style-class
//! tokens; any UI layer can walk the tree and draw it. The egui walker lives
//! in `ui::messages`.

use crate::record::MessageRecord;

/// Class token carried by every message container.
pub const CONTAINER_CLASS: &str = "mensagem";
/// Extra token marking a live-arrived message for a highlight transition.
pub const ANIMATION_CLASS: &str = "new-message-animation";

pub const SENDER_CLASS: &str = "sender";
pub const BODY_CLASS: &str = "message-body";
pub const TEXT_CLASS: &str = "text";
pub const TIMESTAMP_CLASS: &str = "timestamp";

/// A renderable node: space-separated class tokens, optional literal text,
/// and child nodes in display order.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub class: String,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(class: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    /// Whether the class list contains the given token.
    pub fn has_class(&self, token: &str) -> bool {
        self.class.split_whitespace().any(|c| c == token)
    }

    /// First descendant (depth-first) carrying the given class token.
    pub fn find(&self, token: &str) -> Option<&Element> {
        for child in &self.children {
            if child.has_class(token) {
                return Some(child);
            }
            if let Some(found) = child.find(token) {
                return Some(found);
            }
        }
        None
    }
}

/// Build the element tree for one message.
///
/// The container is classed `mensagem <kind>`; a `sender` node comes first
/// when the record names a non-blank sender; the body always holds the
/// literal text and, when present, the timestamp. `animate` additionally tags
/// the container so live-arrived messages get a highlight style.
pub fn render_record(record: &MessageRecord, animate: bool) -> Element {
    let mut class = format!("{} {}", CONTAINER_CLASS, record.kind.class());
    if animate {
        class.push(' ');
        class.push_str(ANIMATION_CLASS);
    }
    let mut container = Element::new(class);

    if let Some(sender) = record.display_sender() {
        container.children.push(Element::with_text(SENDER_CLASS, sender));
    }

    let mut body = Element::new(BODY_CLASS);
    body.children.push(Element::with_text(TEXT_CLASS, &record.text));
    if let Some(ts) = &record.timestamp {
        body.children.push(Element::with_text(TIMESTAMP_CLASS, ts));
    }
    container.children.push(body);

    container
}
