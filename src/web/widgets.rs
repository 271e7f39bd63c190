//! Hooks that wrap a single browser facility: the sortable list, the modal
//! prompt, fullscreen, and the save-status text.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Element, Event, HtmlElement};

use crate::consts::{COURSES_PROMPT_MESSAGE, SAVE_STATUS_SELECTOR};
use crate::error::HookError;
use crate::fullscreen::{self, FullscreenRequest};
use crate::prompt;
use crate::reorder::{self, SortableOptions};
use crate::status::{SaveIndicator, SaveNotification};
use crate::web::dom::{Elements, query};
use crate::web::hook::{Shared, dispatch, share, teardown};
use crate::web::listener::Listener;
use crate::web::pusher::JsPusher;
use crate::web::{now_ms, parse_config};

#[wasm_bindgen]
extern "C" {
    /// The page-provided sortable list library.
    type Sortable;

    #[wasm_bindgen(constructor, catch)]
    fn new(el: &HtmlElement, options: &JsValue) -> Result<Sortable, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &Sortable);

    /// An `Element`, viewed through the promise-returning fullscreen binding.
    #[wasm_bindgen(extends = Element)]
    type FullscreenTarget;

    /// `Element.requestFullscreen()`, keeping the promise it returns.
    #[wasm_bindgen(method, catch, js_name = requestFullscreen)]
    fn request_fullscreen_promise(this: &FullscreenTarget) -> Result<JsValue, JsValue>;
}

fn window() -> Result<web_sys::Window, HookError> {
    web_sys::window().ok_or_else(|| HookError::MissingElement("window".into()))
}

fn document() -> Result<Document, HookError> {
    window()?.document().ok_or_else(|| HookError::MissingElement("document".into()))
}

fn pushing(el: &HtmlElement, push: js_sys::Function) -> Elements {
    Elements { root: el.clone(), controller: None, grid: None, pusher: Some(JsPusher::new(push)) }
}

// --- Sortable tags ---

/// Drag-to-reorder for a tag list. Every direct child carries `data-tag-id`.
#[wasm_bindgen]
pub struct SortableTagsHook {
    sortable: Option<Sortable>,
    _on_end: Closure<dyn FnMut(JsValue)>,
}

#[wasm_bindgen]
impl SortableTagsHook {
    /// # Errors
    ///
    /// Fails when the sortable library is missing or rejects its options.
    #[wasm_bindgen(constructor)]
    pub fn new(el: HtmlElement, push: js_sys::Function) -> Result<SortableTagsHook, JsValue> {
        let elements = pushing(&el, push);
        let list = el.clone();
        let on_end = Closure::wrap(Box::new(move |_event: JsValue| {
            let children = list.children();
            let ids = (0..children.length())
                .filter_map(|i| children.item(i))
                .map(|child| child.get_attribute("data-tag-id"));
            elements.apply(reorder::on_end(ids), None);
        }) as Box<dyn FnMut(JsValue)>);

        let json = serde_json::to_string(&SortableOptions::default()).map_err(HookError::from)?;
        let options = js_sys::JSON::parse(&json)?;
        js_sys::Reflect::set(&options, &JsValue::from_str("onEnd"), on_end.as_ref().unchecked_ref())?;

        let sortable = Sortable::new(&el, &options)?;
        Ok(Self { sortable: Some(sortable), _on_end: on_end })
    }

    pub fn destroy(&mut self) {
        if let Some(sortable) = self.sortable.take() {
            sortable.destroy();
        }
    }
}

impl Drop for SortableTagsHook {
    fn drop(&mut self) {
        self.destroy();
    }
}

// --- Courses prompt ---

/// Click opens a prompt; a non-blank answer becomes a new subtask.
#[wasm_bindgen]
pub struct CoursesPromptHook {
    listener: Option<Listener>,
}

#[wasm_bindgen]
impl CoursesPromptHook {
    /// # Errors
    ///
    /// Fails when the click listener cannot be registered.
    #[wasm_bindgen(constructor)]
    pub fn new(el: HtmlElement, push: js_sys::Function) -> Result<CoursesPromptHook, JsValue> {
        let elements = pushing(&el, push);
        let listener = Listener::new(&el, "click", true, move |_event: Event| {
            let answer = match window().map(|w| w.prompt_with_message(COURSES_PROMPT_MESSAGE)) {
                Ok(Ok(answer)) => answer,
                Ok(Err(err)) => {
                    log::warn!("prompt failed: {err:?}");
                    return;
                }
                Err(err) => {
                    log::warn!("{err}");
                    return;
                }
            };
            elements.apply(prompt::submit(answer.as_deref()), None);
        })?;
        Ok(Self { listener: Some(listener) })
    }

    pub fn destroy(&mut self) {
        self.listener = None;
    }
}

// --- Fullscreen ---

/// Toggle button whose label follows the document's fullscreen state.
#[wasm_bindgen]
pub struct FullscreenHook {
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl FullscreenHook {
    /// # Errors
    ///
    /// Fails without a document or when a listener cannot be registered.
    #[wasm_bindgen(constructor)]
    pub fn new(el: HtmlElement) -> Result<FullscreenHook, JsValue> {
        let document = document()?;
        el.set_text_content(Some(fullscreen::label(document.fullscreen_element().is_some())));

        let doc = document.clone();
        let click = Listener::new(&el, "click", true, move |_event: Event| {
            match fullscreen::on_click(doc.fullscreen_element().is_some()) {
                FullscreenRequest::Enter => enter_fullscreen(&doc),
                FullscreenRequest::Exit => doc.exit_fullscreen(),
            }
        })?;

        let doc = document.clone();
        let button = el.clone();
        let change = Listener::new(&document, "fullscreenchange", true, move |_event: Event| {
            button.set_text_content(Some(fullscreen::label(doc.fullscreen_element().is_some())));
        })?;

        Ok(Self { listeners: vec![click, change] })
    }

    pub fn destroy(&mut self) {
        self.listeners.clear();
    }
}

fn enter_fullscreen(doc: &Document) {
    let Some(root) = doc.document_element() else {
        log::warn!("{}", fullscreen::rejection("no document element"));
        return;
    };
    match root.unchecked_ref::<FullscreenTarget>().request_fullscreen_promise() {
        Ok(result) => {
            let Ok(promise) = result.dyn_into::<js_sys::Promise>() else {
                return;
            };
            spawn_local(async move {
                if let Err(reason) = JsFuture::from(promise).await {
                    log::warn!("{}", fullscreen::rejection(&describe(&reason)));
                }
            });
        }
        Err(reason) => log::warn!("{}", fullscreen::rejection(&describe(&reason))),
    }
}

fn describe(reason: &JsValue) -> String {
    match reason.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => reason.as_string().unwrap_or_else(|| format!("{reason:?}")),
    }
}

// --- Save status ---

/// Shows `#save-status` text for the server's save notifications.
#[wasm_bindgen]
pub struct SaveIndicatorHook {
    state: Shared<SaveIndicator>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl SaveIndicatorHook {
    /// Mount on the element containing `#save-status`.
    ///
    /// # Errors
    ///
    /// Fails when `#save-status` is missing, the config is invalid, or a
    /// listener cannot be registered.
    #[wasm_bindgen(constructor)]
    pub fn new(el: HtmlElement, config: Option<String>) -> Result<SaveIndicatorHook, JsValue> {
        let config = parse_config(config)?;
        let status = query(&el, SAVE_STATUS_SELECTOR)
            .ok_or_else(|| HookError::MissingElement(SAVE_STATUS_SELECTOR.into()))?;
        let elements = Elements { root: status, controller: None, grid: None, pusher: None };
        let state = share(SaveIndicator::new(&config), elements);

        let window: web_sys::EventTarget = window()?.into();
        let listeners = SaveNotification::ALL
            .into_iter()
            .map(|notification| {
                let s = state.clone();
                Listener::new(&window, notification.event_name(), true, move |_event: Event| {
                    dispatch(&s, None, |core| core.notify(notification, now_ms()));
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { state, listeners })
    }

    pub fn destroy(&mut self) {
        self.listeners.clear();
        teardown(&self.state);
    }
}

impl Drop for SaveIndicatorHook {
    fn drop(&mut self) {
        self.destroy();
    }
}
