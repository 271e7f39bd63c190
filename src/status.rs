//! Save-status indicator.
//!
//! Three server notifications drive a small display state machine:
//!
//! ```text
//!            saving            saved             (quiet period)
//!   Idle ───────────▶ Saving ─────────▶ Saved ─────────────────▶ Idle
//!                        │
//!                        │ save-error
//!                        ▼
//!                      Failed   (sticky until the next notification)
//! ```
//!
//! Each notification sets its state from any current state and cancels a
//! pending auto-clear.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::action::Action;
use crate::config::HookConfig;
use crate::timer::Debounce;

/// Server notifications the indicator listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveNotification {
    Saving,
    Saved,
    SaveFailed,
}

impl SaveNotification {
    pub const ALL: [Self; 3] = [Self::Saving, Self::Saved, Self::SaveFailed];

    /// Window event name the page dispatches for this notification.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Saving => "phx:saving",
            Self::Saved => "phx:saved",
            Self::SaveFailed => "phx:save-error",
        }
    }

    #[must_use]
    pub fn from_event_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.event_name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed,
}

impl SaveStatus {
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Saving => "[SAVING...]",
            Self::Saved => "[SAVED]",
            Self::Failed => "[SAVE FAILED]",
        }
    }

    /// CSS class list for the status element.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Saving => "animate-pulse text-warning",
            Self::Saved => "text-success",
            Self::Failed => "text-error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveIndicator {
    pub status: SaveStatus,
    clear: Debounce,
}

impl Default for SaveIndicator {
    fn default() -> Self {
        Self::new(&HookConfig::default())
    }
}

impl SaveIndicator {
    #[must_use]
    pub fn new(config: &HookConfig) -> Self {
        Self { status: SaveStatus::Idle, clear: Debounce::new(config.saved_clear_ms) }
    }

    /// Apply a notification. Returns a timer request when an auto-clear was armed.
    pub fn notify(&mut self, notification: SaveNotification, now_ms: f64) -> Vec<Action> {
        self.clear.cancel();
        match notification {
            SaveNotification::Saving => {
                self.status = SaveStatus::Saving;
                Vec::new()
            }
            SaveNotification::Saved => {
                self.status = SaveStatus::Saved;
                vec![Action::ScheduleTimer { delay_ms: self.clear.arm(now_ms) }]
            }
            SaveNotification::SaveFailed => {
                log::warn!("server reported a failed save");
                self.status = SaveStatus::Failed;
                Vec::new()
            }
        }
    }

    /// Clear `[SAVED]` once its display period has elapsed.
    pub fn poll(&mut self, now_ms: f64) -> Vec<Action> {
        if self.clear.take_due(now_ms) {
            self.status = SaveStatus::Idle;
            return Vec::new();
        }
        match self.clear.remaining_ms(now_ms) {
            Some(delay_ms) => vec![Action::ScheduleTimer { delay_ms }],
            None => Vec::new(),
        }
    }

    #[must_use]
    pub fn clear_pending(&self) -> bool {
        self.clear.is_pending()
    }

    pub fn detach(&mut self) {
        self.clear.cancel();
    }
}
