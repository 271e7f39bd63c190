//! "Add to courses" prompt adapter.

#[cfg(test)]
#[path = "prompt_test.rs"]
mod prompt_test;

use crate::action::Action;
use crate::outbound::Outbound;

/// Turn the prompt's answer into a subtask notification.
///
/// `None` means the user cancelled. Blank answers are dropped.
pub fn submit(answer: Option<&str>) -> Vec<Action> {
    match answer.map(str::trim) {
        Some(title) if !title.is_empty() => vec![Action::Push(Outbound::AddSubtask { title: title.to_owned() })],
        _ => Vec::new(),
    }
}
