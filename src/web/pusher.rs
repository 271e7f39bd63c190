use wasm_bindgen::JsValue;

use crate::outbound::Outbound;

/// Forwards notifications to the page's `(event, payload) => void` push function.
#[derive(Clone)]
pub struct JsPusher {
    callback: js_sys::Function,
}

impl JsPusher {
    pub fn new(callback: js_sys::Function) -> Self {
        Self { callback }
    }

    /// Hand `outbound` to the page. Failures are logged and the notification dropped.
    pub fn push(&self, outbound: Outbound) {
        let event = outbound.event();
        let json = match outbound.payload().and_then(|value| serde_json::to_string(&value)) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("dropping {event}: {err}");
                return;
            }
        };
        let payload = match js_sys::JSON::parse(&json) {
            Ok(payload) => payload,
            Err(err) => {
                log::warn!("dropping {event}: {err:?}");
                return;
            }
        };
        log::debug!("push {event}");
        if let Err(err) = self.callback.call2(&JsValue::NULL, &JsValue::from_str(event), &payload) {
            log::warn!("push {event} failed: {err:?}");
        }
    }
}
