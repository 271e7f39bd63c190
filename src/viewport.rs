//! Canvas pan/zoom controller.
//!
//! Owns the viewport of one plan canvas from attach to detach. Presses on
//! empty canvas start a pan, wheel events pan or zoom toward the pointer,
//! and every committed change re-arms a debounced `save-viewport` report.
//! Escape anywhere on the page emits `cancel-connection`.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::action::Action;
use crate::attrs::{DataAttrs, float_or, nonzero_float_or};
use crate::camera::{Point, Viewport, ZoomBounds};
use crate::config::HookConfig;
use crate::outbound::Outbound;
use crate::input::{Key, Modifiers, TargetQuery, WheelDelta, starts_pan};
use crate::timer::Debounce;

const CURSOR_GRABBING: &str = "grabbing";
const CURSOR_GRAB: &str = "grab";

/// One press-to-release pan gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSession {
    /// Pointer position at press, in client pixels.
    pub origin_pointer: Point,
    /// Viewport offset at press.
    pub origin_offset: Point,
}

#[derive(Debug, Clone)]
pub struct ViewportController {
    pub viewport: Viewport,
    pub pan: Option<PanSession>,
    save: Debounce,
    bounds: ZoomBounds,
    zoom_step: f64,
    grid_size_px: f64,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(&HookConfig::default())
    }
}

impl ViewportController {
    #[must_use]
    pub fn new(config: &HookConfig) -> Self {
        Self {
            viewport: Viewport::default(),
            pan: None,
            save: Debounce::new(config.viewport_debounce_ms),
            bounds: config.zoom_bounds(),
            zoom_step: config.zoom_step,
            grid_size_px: config.grid_size_px,
        }
    }

    /// Load the initial viewport from `data-viewport-x`, `data-viewport-y` and `data-zoom`.
    pub fn attach<A: DataAttrs + ?Sized>(&mut self, attrs: &A) -> Vec<Action> {
        let x = float_or(attrs.data("viewport-x").as_deref(), 0.0);
        let y = float_or(attrs.data("viewport-y").as_deref(), 0.0);
        let zoom = nonzero_float_or(attrs.data("zoom").as_deref(), 1.0);
        self.viewport = Viewport { x, y, zoom: 1.0 };
        self.viewport.set_zoom_clamped(zoom, self.bounds);
        self.pan = None;
        self.save.cancel();
        log::debug!("viewport attached at ({x}, {y}) zoom {}", self.viewport.zoom);
        vec![self.apply()]
    }

    /// End any gesture and drop the pending report.
    pub fn detach(&mut self) {
        self.pan = None;
        self.save.cancel();
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    #[must_use]
    pub fn report_pending(&self) -> bool {
        self.save.is_pending()
    }

    // --- Pointer ---

    pub fn on_pointer_down<T: TargetQuery + ?Sized>(&mut self, client: Point, target: &T) -> Vec<Action> {
        if self.pan.is_some() || !starts_pan(target) {
            return Vec::new();
        }
        self.pan = Some(PanSession {
            origin_pointer: client,
            origin_offset: Point::new(self.viewport.x, self.viewport.y),
        });
        vec![Action::SetCursor(CURSOR_GRABBING)]
    }

    pub fn on_pointer_move(&mut self, client: Point) -> Vec<Action> {
        let Some(pan) = self.pan else {
            return Vec::new();
        };
        let delta = client.delta_from(pan.origin_pointer);
        self.viewport.x = pan.origin_offset.x + delta.x;
        self.viewport.y = pan.origin_offset.y + delta.y;
        vec![self.apply()]
    }

    pub fn on_pointer_up(&mut self, now_ms: f64) -> Vec<Action> {
        if self.pan.take().is_none() {
            return Vec::new();
        }
        vec![Action::SetCursor(CURSOR_GRAB), self.schedule_report(now_ms)]
    }

    // --- Wheel ---

    /// `local` is the pointer position relative to the canvas element.
    pub fn on_wheel(&mut self, local: Point, delta: WheelDelta, modifiers: Modifiers, now_ms: f64) -> Vec<Action> {
        if modifiers.zooms() {
            let step = if delta.dy < 0.0 { self.zoom_step } else { -self.zoom_step };
            self.viewport.zoom_at(local, step, self.bounds);
        } else {
            self.viewport.pan_by(-delta.dx, -delta.dy);
        }
        vec![Action::PreventDefault, self.apply(), self.schedule_report(now_ms)]
    }

    // --- Touch ---

    /// `touches` holds every active contact, in client pixels.
    pub fn on_touch_start<T: TargetQuery + ?Sized>(&mut self, touches: &[Point], target: &T) -> Vec<Action> {
        match touches {
            [only] => self.on_pointer_down(*only, target),
            _ => Vec::new(),
        }
    }

    pub fn on_touch_move(&mut self, touches: &[Point]) -> Vec<Action> {
        match touches {
            [only] if self.pan.is_some() => {
                let mut actions = vec![Action::PreventDefault];
                actions.extend(self.on_pointer_move(*only));
                actions
            }
            _ => Vec::new(),
        }
    }

    pub fn on_touch_end(&mut self, now_ms: f64) -> Vec<Action> {
        if self.pan.take().is_none() {
            return Vec::new();
        }
        vec![self.schedule_report(now_ms)]
    }

    // --- Keyboard ---

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.is_escape() {
            vec![Action::Push(Outbound::CancelConnection {})]
        } else {
            Vec::new()
        }
    }

    // --- Timer ---

    /// Emit the viewport report once its quiet period has elapsed.
    pub fn poll(&mut self, now_ms: f64) -> Vec<Action> {
        if self.save.take_due(now_ms) {
            let Viewport { x, y, zoom } = self.viewport;
            log::debug!("reporting viewport ({x}, {y}) zoom {zoom}");
            return vec![Action::Push(Outbound::SaveViewport { x, y, zoom })];
        }
        match self.save.remaining_ms(now_ms) {
            Some(delay_ms) => vec![Action::ScheduleTimer { delay_ms }],
            None => Vec::new(),
        }
    }

    // --- Helpers ---

    fn apply(&self) -> Action {
        Action::ApplyTransform(self.viewport.transform(self.grid_size_px))
    }

    fn schedule_report(&mut self, now_ms: f64) -> Action {
        Action::ScheduleTimer { delay_ms: self.save.arm(now_ms) }
    }
}
