//! Shared plumbing between a mounted core and the DOM.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use web_sys::Event;

use crate::action::Action;
use crate::card::CardDragger;
use crate::status::SaveIndicator;
use crate::viewport::ViewportController;
use crate::web::dom::Elements;
use crate::web::now_ms;
use crate::web::timer::TimerSlot;

/// A core the web layer can drive.
pub trait Core {
    /// Timer wake-up.
    fn poll(&mut self, _now_ms: f64) -> Vec<Action> {
        Vec::new()
    }

    /// Write state that is not expressed as actions.
    fn render(&self, _elements: &Elements) {}

    fn detach(&mut self);
}

impl Core for ViewportController {
    fn poll(&mut self, now_ms: f64) -> Vec<Action> {
        ViewportController::poll(self, now_ms)
    }

    fn detach(&mut self) {
        ViewportController::detach(self);
    }
}

impl Core for CardDragger {
    fn detach(&mut self) {
        CardDragger::detach(self);
    }
}

impl Core for SaveIndicator {
    fn poll(&mut self, now_ms: f64) -> Vec<Action> {
        SaveIndicator::poll(self, now_ms)
    }

    fn render(&self, elements: &Elements) {
        elements.root.set_text_content(Some(self.status.text()));
        elements.root.set_class_name(self.status.class());
    }

    fn detach(&mut self) {
        SaveIndicator::detach(self);
    }
}

pub struct HookState<C> {
    pub core: C,
    pub elements: Elements,
    pub timer: TimerSlot,
}

pub type Shared<C> = Rc<RefCell<HookState<C>>>;

pub fn share<C>(core: C, elements: Elements) -> Shared<C> {
    Rc::new(RefCell::new(HookState { core, elements, timer: TimerSlot::default() }))
}

/// Run `f` against the core, then apply what it returned.
pub fn dispatch<C, F>(state: &Shared<C>, event: Option<&Event>, f: F)
where
    C: Core + 'static,
    F: FnOnce(&mut C) -> Vec<Action>,
{
    let (actions, elements) = {
        let Ok(mut guard) = state.try_borrow_mut() else {
            log::warn!("hook event re-entered while busy; skipped");
            return;
        };
        let actions = f(&mut guard.core);
        guard.core.render(&guard.elements);
        (actions, guard.elements.clone())
    };
    if let Some(delay_ms) = elements.apply(actions, event) {
        schedule(state, delay_ms);
    }
}

fn schedule<C: Core + 'static>(state: &Shared<C>, delay_ms: f64) {
    let weak: Weak<RefCell<HookState<C>>> = Rc::downgrade(state);
    let Ok(mut guard) = state.try_borrow_mut() else {
        log::warn!("timer not scheduled: hook busy");
        return;
    };
    guard.timer.schedule(delay_ms, move || {
        if let Some(state) = weak.upgrade() {
            dispatch(&state, None, |core| core.poll(now_ms()));
        }
    });
}

/// Cancel timers and end gestures.
pub fn teardown<C: Core>(state: &Shared<C>) {
    match state.try_borrow_mut() {
        Ok(mut guard) => {
            guard.timer.cancel();
            guard.core.detach();
        }
        Err(_) => log::warn!("teardown while hook busy"),
    }
}
