//! Input model: modifier keys, wheel deltas, and event-target filtering.
//!
//! Hooks never walk the DOM themselves. Whoever delivers an event also hands
//! over a [`TargetQuery`] for the event target, and the predicates below
//! decide from it whether a press may start a pan or a drag.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::{CARD_SELECTOR, CONNECTION_SOURCE_SELECTOR, CONNECTION_TARGET_SELECTOR};

/// Modifier keys that change what a wheel event does.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Whether a wheel event should zoom instead of pan.
    #[must_use]
    pub fn zooms(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Wheel / trackpad scroll delta in pixels.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    pub dx: f64,
    /// Positive = scroll down.
    pub dy: f64,
}

/// A keyboard key name as reported by the browser (e.g. `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}

/// Ancestor kinds that block a gesture from starting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Any card wrapper.
    Card,
    /// Any `<button>`.
    Button,
    /// A connection drag source.
    ConnectionSource,
    /// A connection drop target.
    ConnectionTarget,
}

impl Selector {
    /// CSS selector matching this kind.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Card => CARD_SELECTOR,
            Self::Button => "button",
            Self::ConnectionSource => CONNECTION_SOURCE_SELECTOR,
            Self::ConnectionTarget => CONNECTION_TARGET_SELECTOR,
        }
    }
}

/// Ancestor lookup for an event target.
pub trait TargetQuery {
    /// Whether the target or one of its ancestors matches `selector`.
    fn closest(&self, selector: Selector) -> bool;
}

/// A target with no matching ancestors (bare canvas).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTarget;

impl TargetQuery for NoTarget {
    fn closest(&self, _selector: Selector) -> bool {
        false
    }
}

impl TargetQuery for [Selector] {
    fn closest(&self, selector: Selector) -> bool {
        self.contains(&selector)
    }
}

impl<const N: usize> TargetQuery for [Selector; N] {
    fn closest(&self, selector: Selector) -> bool {
        self.contains(&selector)
    }
}

/// Whether the target sits on a connection endpoint.
pub fn on_connection_endpoint<T: TargetQuery + ?Sized>(target: &T) -> bool {
    target.closest(Selector::ConnectionSource) || target.closest(Selector::ConnectionTarget)
}

/// A press here may start panning the canvas.
pub fn starts_pan<T: TargetQuery + ?Sized>(target: &T) -> bool {
    !(target.closest(Selector::Card) || target.closest(Selector::Button) || on_connection_endpoint(target))
}

/// A press on a card handle here may start dragging the card.
pub fn starts_card_drag<T: TargetQuery + ?Sized>(target: &T) -> bool {
    !(target.closest(Selector::Button) || on_connection_endpoint(target))
}
