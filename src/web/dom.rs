//! DOM adapters: event targets, data attributes, touches, and action application.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, TouchList};

use crate::action::Action;
use crate::attrs::DataAttrs;
use crate::camera::{Point, Transform};
use crate::input::{Selector, TargetQuery};
use crate::web::pusher::JsPusher;

impl DataAttrs for Element {
    fn data(&self, key: &str) -> Option<String> {
        self.get_attribute(&format!("data-{key}"))
    }
}

/// The element an event was dispatched to, if it is an element.
pub struct ElementTarget(Option<Element>);

impl ElementTarget {
    pub fn of_event(event: &Event) -> Self {
        Self(event.target().and_then(|t| t.dyn_ref::<Element>().cloned()))
    }

    pub fn of_touch(touches: &TouchList) -> Self {
        Self(touches.get(0).and_then(|t| t.target()).and_then(|t| t.dyn_ref::<Element>().cloned()))
    }
}

impl TargetQuery for ElementTarget {
    fn closest(&self, selector: Selector) -> bool {
        self.0
            .as_ref()
            .is_some_and(|el| matches!(el.closest(selector.css()), Ok(Some(_))))
    }
}

/// Client positions of every contact in `touches`.
pub fn touch_points(touches: &TouchList) -> Vec<Point> {
    (0..touches.length())
        .filter_map(|i| touches.get(i))
        .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
        .collect()
}

pub fn query(root: &Element, selector: &str) -> Option<HtmlElement> {
    match root.query_selector(selector) {
        Ok(found) => found.and_then(|el| el.dyn_ref::<HtmlElement>().cloned()),
        Err(err) => {
            log::warn!("invalid selector {selector}: {err:?}");
            None
        }
    }
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::warn!("failed to set {property}: {err:?}");
    }
}

pub fn inline_style(el: &HtmlElement, property: &str) -> Option<String> {
    match el.style().get_property_value(property) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// The elements a hook writes to.
#[derive(Clone)]
pub struct Elements {
    /// The hook's own element (cursor, position, z-index, `data-zoom`).
    pub root: HtmlElement,
    /// Transformed child of a canvas.
    pub controller: Option<HtmlElement>,
    /// Background grid of a canvas.
    pub grid: Option<HtmlElement>,
    /// Absent for hooks that never report.
    pub pusher: Option<JsPusher>,
}

impl Elements {
    /// Apply `actions` to the DOM. Returns the last requested timer delay.
    pub fn apply(&self, actions: Vec<Action>, event: Option<&Event>) -> Option<f64> {
        let mut timer = None;
        for action in actions {
            match action {
                Action::ApplyTransform(transform) => self.apply_transform(&transform),
                Action::SetCursor(cursor) => set_style(&self.root, "cursor", cursor),
                Action::SetPosition { left, top } => {
                    set_style(&self.root, "left", &format!("{left}px"));
                    set_style(&self.root, "top", &format!("{top}px"));
                }
                Action::SetZIndex(Some(z)) => set_style(&self.root, "z-index", &z),
                Action::SetZIndex(None) => {
                    if let Err(err) = self.root.style().remove_property("z-index") {
                        log::warn!("failed to clear z-index: {err:?}");
                    }
                }
                Action::PreventDefault => {
                    if let Some(event) = event {
                        event.prevent_default();
                    }
                }
                Action::StopPropagation => {
                    if let Some(event) = event {
                        event.stop_propagation();
                    }
                }
                Action::ScheduleTimer { delay_ms } => timer = Some(delay_ms),
                Action::Push(outbound) => match &self.pusher {
                    Some(pusher) => pusher.push(outbound),
                    None => log::warn!("no push target for {}", outbound.event()),
                },
            }
        }
        timer
    }

    fn apply_transform(&self, transform: &Transform) {
        if let Some(controller) = &self.controller {
            set_style(controller, "transform", &transform.controller);
        }
        if let Some(grid) = &self.grid {
            set_style(grid, "background-size", &transform.grid_size);
            set_style(grid, "background-position", &transform.grid_position);
        }
        if let Err(err) = self.root.set_attribute("data-zoom", &transform.zoom.to_string()) {
            log::warn!("failed to publish zoom: {err:?}");
        }
    }
}
