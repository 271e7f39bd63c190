//! DOM bindings for the hook cores.
//!
//! Each exported hook type mounts one core onto an element and owns every
//! listener and timer it registered. Dropping the hook (or calling
//! `destroy()` from JavaScript) removes the listeners and cancels pending
//! timers; nothing outlives the element's lifecycle.
//!
//! The page wires hooks up like this:
//!
//! ```js
//! import init, { init_hooks, PlanCanvasHook } from "./plan_hooks.js";
//! await init();
//! init_hooks(JSON.stringify({ log_level: "debug" }));
//! const hook = new PlanCanvasHook(el, (event, payload) => live.pushEvent(event, payload));
//! // ... on unmount
//! hook.destroy();
//! ```

mod canvas;
mod card;
mod dom;
mod hook;
mod listener;
mod pusher;
mod timer;
mod widgets;

pub use canvas::PlanCanvasHook;
pub use card::PlanCardHook;
pub use dom::{ElementTarget, Elements};
pub use listener::Listener;
pub use pusher::JsPusher;
pub use timer::TimerSlot;
pub use widgets::{CoursesPromptHook, FullscreenHook, SaveIndicatorHook, SortableTagsHook};

use wasm_bindgen::prelude::*;

use crate::config::HookConfig;

/// Install the panic hook and console logger.
///
/// # Errors
///
/// Returns an error when `config` is not a valid [`HookConfig`] object.
#[wasm_bindgen]
pub fn init_hooks(config: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = parse_config(config)?;
    let level = config.parsed_log_level().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
    log::info!("plan hooks ready");
    Ok(())
}

/// Current wall-clock time in milliseconds.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub(crate) fn parse_config(raw: Option<String>) -> Result<HookConfig, crate::error::HookError> {
    HookConfig::from_json(raw.as_deref().unwrap_or(""))
}
