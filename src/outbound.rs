//! Notifications sent to the server.
//!
//! Hooks never talk to the socket. They emit [`Outbound`] values inside
//! [`crate::action::Action::Push`]; the host hands `(event, payload)` to the
//! page's existing push function. Delivery is fire-and-forget.

#[cfg(test)]
#[path = "outbound_test.rs"]
mod outbound_test;

use serde::Serialize;
use serde_json::Value;

/// A single notification. Serializes to its payload object.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outbound {
    /// The canvas viewport settled.
    SaveViewport { x: f64, y: f64, zoom: f64 },
    /// A card was dropped at a new position.
    MoveCard { id: String, x: f64, y: f64 },
    /// The tag list was reordered.
    ReorderTags { tag_ids: Vec<String> },
    /// A free-text subtask was entered.
    AddSubtask { title: String },
    /// Escape was pressed; abort connection drawing.
    CancelConnection {},
}

impl Outbound {
    /// Server-side event name.
    #[must_use]
    pub fn event(&self) -> &'static str {
        match self {
            Self::SaveViewport { .. } => "save-viewport",
            Self::MoveCard { .. } => "move-card",
            Self::ReorderTags { .. } => "reorder-tags",
            Self::AddSubtask { .. } => "add-courses-subtask",
            Self::CancelConnection {} => "cancel-connection",
        }
    }

    /// JSON payload for this notification (the variant's fields as an object).
    ///
    /// # Errors
    ///
    /// Returns the serializer's error unchanged.
    pub fn payload(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
