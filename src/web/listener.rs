use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::HookError;

/// A registered DOM event listener, removed again when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Register `handler` for `event` on `target`.
    ///
    /// `passive: false` lets the handler call `preventDefault()` on wheel
    /// and touch events.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Js`] when the browser refuses the registration.
    pub fn new<F>(target: &EventTarget, event: &'static str, passive: bool, handler: F) -> Result<Self, HookError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {err:?}", self.event);
        }
    }
}
