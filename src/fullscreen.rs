//! Fullscreen toggle button.
//!
//! The label always mirrors the document's real fullscreen state. It is
//! refreshed from `fullscreenchange`, never optimistically on click, so a
//! rejected request leaves it correct.

#[cfg(test)]
#[path = "fullscreen_test.rs"]
mod fullscreen_test;

use crate::consts::{FULLSCREEN_ENTER_LABEL, FULLSCREEN_EXIT_LABEL};
use crate::error::HookError;

/// What a click should ask the browser for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenRequest {
    Enter,
    Exit,
}

#[must_use]
pub fn on_click(is_fullscreen: bool) -> FullscreenRequest {
    if is_fullscreen { FullscreenRequest::Exit } else { FullscreenRequest::Enter }
}

/// Button label for the given state.
#[must_use]
pub fn label(is_fullscreen: bool) -> &'static str {
    if is_fullscreen { FULLSCREEN_EXIT_LABEL } else { FULLSCREEN_ENTER_LABEL }
}

/// Error logged when an enter request is refused, synchronously or by a
/// rejected promise. The label is left alone.
#[must_use]
pub fn rejection(reason: &str) -> HookError {
    HookError::Fullscreen(reason.to_owned())
}
