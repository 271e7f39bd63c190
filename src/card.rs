//! Draggable card controller.
//!
//! A card is absolutely positioned inside the canvas controller, so its
//! `left` / `top` live in content space. Pointer deltas are divided by the
//! canvas zoom read at move time, which keeps the card under the pointer at
//! any zoom level. The final position is reported once, on release.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use crate::action::Action;
use crate::attrs::{DataAttrs, float_or, nonzero_float_or};
use crate::camera::Point;
use crate::config::HookConfig;
use crate::outbound::Outbound;
use crate::input::{TargetQuery, starts_card_drag};

/// One press-to-release drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position at press, in client pixels.
    pub pointer_origin: Point,
    /// Card `left` / `top` at press.
    pub element_origin: Point,
}

#[derive(Debug, Clone)]
pub struct CardDragger {
    pub card_id: String,
    /// Last position written to the card.
    pub position: Point,
    pub session: Option<DragSession>,
    has_handle: bool,
    dragging_z_index: String,
}

impl CardDragger {
    /// Bind to a card. `has_handle` is whether a drag handle exists inside it;
    /// a card without one never starts a drag.
    #[must_use]
    pub fn attach<A: DataAttrs + ?Sized>(attrs: &A, has_handle: bool, config: &HookConfig) -> Self {
        let card_id = attrs.data("card-id").unwrap_or_default();
        if !has_handle {
            log::warn!("card {card_id} has no drag handle; dragging disabled");
        }
        Self {
            card_id,
            position: Point::new(0.0, 0.0),
            session: None,
            has_handle,
            dragging_z_index: config.dragging_z_index.clone(),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Press on the handle. `left` / `top` are the card's inline style values.
    pub fn on_press<T: TargetQuery + ?Sized>(
        &mut self,
        client: Point,
        target: &T,
        left: Option<&str>,
        top: Option<&str>,
    ) -> Vec<Action> {
        if !self.has_handle || self.session.is_some() || !starts_card_drag(target) {
            return Vec::new();
        }
        let element_origin = Point::new(float_or(left, 0.0), float_or(top, 0.0));
        self.position = element_origin;
        self.session = Some(DragSession { pointer_origin: client, element_origin });
        vec![Action::StopPropagation, Action::SetZIndex(Some(self.dragging_z_index.clone()))]
    }

    /// Pointer moved. `canvas_zoom` is the canvas `data-zoom` value, read now.
    pub fn on_move(&mut self, client: Point, canvas_zoom: Option<&str>) -> Vec<Action> {
        let Some(session) = self.session else {
            return Vec::new();
        };
        let zoom = nonzero_float_or(canvas_zoom, 1.0);
        let delta = client.delta_from(session.pointer_origin);
        let left = session.element_origin.x + delta.x / zoom;
        let top = session.element_origin.y + delta.y / zoom;
        self.position = Point::new(left, top);
        vec![Action::SetPosition { left, top }]
    }

    /// Release anywhere. Reports the card position once per gesture.
    pub fn on_release(&mut self) -> Vec<Action> {
        if self.session.take().is_none() {
            return Vec::new();
        }
        let Point { x, y } = self.position;
        log::debug!("card {} dropped at ({x}, {y})", self.card_id);
        vec![Action::SetZIndex(None), Action::Push(Outbound::MoveCard { id: self.card_id.clone(), x, y })]
    }

    // --- Touch ---

    pub fn on_touch_start<T: TargetQuery + ?Sized>(
        &mut self,
        touches: &[Point],
        target: &T,
        left: Option<&str>,
        top: Option<&str>,
    ) -> Vec<Action> {
        let [only] = touches else {
            return Vec::new();
        };
        let actions = self.on_press(*only, target, left, top);
        if actions.is_empty() {
            return actions;
        }
        let mut out = vec![Action::PreventDefault];
        out.extend(actions);
        out
    }

    pub fn on_touch_move(&mut self, touches: &[Point], canvas_zoom: Option<&str>) -> Vec<Action> {
        match touches {
            [only] if self.session.is_some() => {
                let mut actions = vec![Action::PreventDefault];
                actions.extend(self.on_move(*only, canvas_zoom));
                actions
            }
            _ => Vec::new(),
        }
    }

    pub fn on_touch_end(&mut self) -> Vec<Action> {
        self.on_release()
    }

    /// End any gesture without reporting.
    pub fn detach(&mut self) {
        self.session = None;
    }
}
