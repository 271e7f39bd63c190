use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, MouseEvent, TouchEvent};

use crate::camera::Point;
use crate::card::CardDragger;
use crate::consts::{CANVAS_ELEMENT_ID, CARD_HANDLE_SELECTOR};
use crate::web::dom::{ElementTarget, Elements, inline_style, query, touch_points};
use crate::web::hook::{Shared, dispatch, share, teardown};
use crate::web::listener::Listener;
use crate::web::pusher::JsPusher;
use crate::web::parse_config;

/// Current `data-zoom` of the plan canvas, if it is on the page.
fn canvas_zoom() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CANVAS_ELEMENT_ID))
        .and_then(|canvas| canvas.get_attribute("data-zoom"))
}

/// Dragging for one card on the plan canvas.
#[wasm_bindgen]
pub struct PlanCardHook {
    state: Shared<CardDragger>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl PlanCardHook {
    /// Mount on a card element carrying `data-card-id`.
    ///
    /// # Errors
    ///
    /// Fails on an invalid config or when the browser refuses a listener.
    #[wasm_bindgen(constructor)]
    pub fn new(el: HtmlElement, push: js_sys::Function, config: Option<String>) -> Result<PlanCardHook, JsValue> {
        let config = parse_config(config)?;
        let handle = query(&el, CARD_HANDLE_SELECTOR);
        let core = CardDragger::attach(&*el, handle.is_some(), &config);
        let elements = Elements { root: el.clone(), controller: None, grid: None, pusher: Some(JsPusher::new(push)) };
        let state = share(core, elements);

        let Some(handle) = handle else {
            log::warn!("card has no {CARD_HANDLE_SELECTOR} handle; it will not drag");
            return Ok(Self { state, listeners: Vec::new() });
        };

        let window: web_sys::EventTarget = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?.into();
        let mut listeners = Vec::with_capacity(6);

        let s = state.clone();
        let card = el.clone();
        listeners.push(Listener::new(&handle, "mousedown", true, move |event: Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let client = Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            let target = ElementTarget::of_event(&event);
            let left = inline_style(&card, "left");
            let top = inline_style(&card, "top");
            dispatch(&s, Some(&event), |core| core.on_press(client, &target, left.as_deref(), top.as_deref()));
        })?);

        let s = state.clone();
        listeners.push(Listener::new(&window, "mousemove", true, move |event: Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let client = Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            let zoom = canvas_zoom();
            dispatch(&s, Some(&event), |core| core.on_move(client, zoom.as_deref()));
        })?);

        let s = state.clone();
        listeners.push(Listener::new(&window, "mouseup", true, move |event: Event| {
            dispatch(&s, Some(&event), CardDragger::on_release);
        })?);

        let s = state.clone();
        let card = el.clone();
        listeners.push(Listener::new(&handle, "touchstart", false, move |event: Event| {
            let Some(touch) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let touches = touch.touches();
            let points = touch_points(&touches);
            let target = ElementTarget::of_touch(&touches);
            let left = inline_style(&card, "left");
            let top = inline_style(&card, "top");
            dispatch(&s, Some(&event), |core| {
                core.on_touch_start(&points, &target, left.as_deref(), top.as_deref())
            });
        })?);

        let s = state.clone();
        listeners.push(Listener::new(&window, "touchmove", false, move |event: Event| {
            let Some(touch) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let points = touch_points(&touch.touches());
            let zoom = canvas_zoom();
            dispatch(&s, Some(&event), |core| core.on_touch_move(&points, zoom.as_deref()));
        })?);

        let s = state.clone();
        listeners.push(Listener::new(&window, "touchend", true, move |event: Event| {
            dispatch(&s, Some(&event), CardDragger::on_touch_end);
        })?);

        Ok(Self { state, listeners })
    }

    /// Remove every listener. A drag in progress is abandoned without a report.
    pub fn destroy(&mut self) {
        self.listeners.clear();
        teardown(&self.state);
    }
}

impl Drop for PlanCardHook {
    fn drop(&mut self) {
        self.destroy();
    }
}
