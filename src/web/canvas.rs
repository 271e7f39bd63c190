use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent, WheelEvent};

use crate::camera::Point;
use crate::consts::{CANVAS_CONTROLLER_SELECTOR, CANVAS_GRID_SELECTOR};
use crate::input::{Key, Modifiers, WheelDelta};
use crate::viewport::ViewportController;
use crate::web::dom::{ElementTarget, Elements, query, touch_points};
use crate::web::hook::{Shared, dispatch, share, teardown};
use crate::web::listener::Listener;
use crate::web::pusher::JsPusher;
use crate::web::{now_ms, parse_config};

/// Pan/zoom for the plan canvas element.
#[wasm_bindgen]
pub struct PlanCanvasHook {
    state: Shared<ViewportController>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl PlanCanvasHook {
    /// Mount on `el`. `push` receives `(event, payload)` for every report.
    ///
    /// # Errors
    ///
    /// Fails on an invalid config or when the browser refuses a listener.
    #[wasm_bindgen(constructor)]
    pub fn new(el: HtmlElement, push: js_sys::Function, config: Option<String>) -> Result<PlanCanvasHook, JsValue> {
        let config = parse_config(config)?;
        let controller = query(&el, CANVAS_CONTROLLER_SELECTOR);
        let grid = query(&el, CANVAS_GRID_SELECTOR);
        if controller.is_none() {
            log::warn!("canvas has no {CANVAS_CONTROLLER_SELECTOR} child; transform will not be shown");
        }
        let elements = Elements { root: el.clone(), controller, grid, pusher: Some(JsPusher::new(push)) };

        let mut core = ViewportController::new(&config);
        let initial = core.attach(&*el);
        let state = share(core, elements.clone());
        elements.apply(initial, None);

        let window: web_sys::EventTarget = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?.into();
        let mut listeners = Vec::with_capacity(8);

        let s = state.clone();
        listeners.push(Listener::new(&el, "mousedown", true, move |event: Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let client = Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            let target = ElementTarget::of_event(&event);
            dispatch(&s, Some(&event), |core| core.on_pointer_down(client, &target));
        })?);

        let s = state.clone();
        listeners.push(Listener::new(&window, "mousemove", true, move |event: Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let client = Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            dispatch(&s, Some(&event), |core| core.on_pointer_move(client));
        })?);

        let s = state.clone();
        listeners.push(Listener::new(&window, "mouseup", true, move |event: Event| {
            dispatch(&s, Some(&event), |core| core.on_pointer_up(now_ms()));
        })?);

        let s = state.clone();
        let root = el.clone();
        listeners.push(Listener::new(&el, "wheel", false, move |event: Event| {
            let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            let rect = root.get_bounding_client_rect();
            let local = Point::new(f64::from(wheel.client_x()) - rect.left(), f64::from(wheel.client_y()) - rect.top());
            let delta = WheelDelta { dx: wheel.delta_x(), dy: wheel.delta_y() };
            let modifiers = Modifiers { ctrl: wheel.ctrl_key(), meta: wheel.meta_key() };
            dispatch(&s, Some(&event), |core| core.on_wheel(local, delta, modifiers, now_ms()));
        })?);

        let s = state.clone();
        listeners.push(Listener::new(&el, "touchstart", false, move |event: Event| {
            let Some(touch) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let touches = touch.touches();
            let points = touch_points(&touches);
            let target = ElementTarget::of_touch(&touches);
            dispatch(&s, Some(&event), |core| core.on_touch_start(&points, &target));
        })?);

        let s = state.clone();
        listeners.push(Listener::new(&el, "touchmove", false, move |event: Event| {
            let Some(touch) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let points = touch_points(&touch.touches());
            dispatch(&s, Some(&event), |core| core.on_touch_move(&points));
        })?);

        let s = state.clone();
        listeners.push(Listener::new(&el, "touchend", true, move |event: Event| {
            dispatch(&s, Some(&event), |core| core.on_touch_end(now_ms()));
        })?);

        let s = state.clone();
        listeners.push(Listener::new(&window, "keydown", true, move |event: Event| {
            let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = Key(keyboard.key());
            dispatch(&s, Some(&event), |core| core.on_key_down(&key));
        })?);

        Ok(Self { state, listeners })
    }

    /// Remove every listener and drop the pending viewport report.
    pub fn destroy(&mut self) {
        self.listeners.clear();
        teardown(&self.state);
    }
}

impl Drop for PlanCanvasHook {
    fn drop(&mut self) {
        self.destroy();
    }
}
