//! Actions returned from hook input handlers for the host to apply.

use crate::camera::Transform;
use crate::outbound::Outbound;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Write the viewport transform, grid styles, and canvas `data-zoom`.
    ApplyTransform(Transform),
    /// Set the hook element's `cursor` style.
    SetCursor(&'static str),
    /// Write the card's inline `left` / `top` in pixels.
    SetPosition { left: f64, top: f64 },
    /// Set (`Some`) or clear (`None`) the card's inline `z-index`.
    SetZIndex(Option<String>),
    /// Call `preventDefault()` on the triggering event.
    PreventDefault,
    /// Call `stopPropagation()` on the triggering event.
    StopPropagation,
    /// Poll the hook again after this many milliseconds, replacing any earlier wake-up.
    ScheduleTimer { delay_ms: f64 },
    /// Send a notification to the server.
    Push(Outbound),
}

/// Whether any action matches `pred`.
pub fn has_action<F>(actions: &[Action], pred: F) -> bool
where
    F: Fn(&Action) -> bool,
{
    actions.iter().any(pred)
}

/// Notifications contained in `actions`, in order.
pub fn pushes(actions: &[Action]) -> Vec<&Outbound> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::Push(out) => Some(out),
            _ => None,
        })
        .collect()
}
