//! Single-slot debounce deadline.
//!
//! Hooks never own a real timer. [`Debounce::arm`] records a deadline and the
//! host schedules one wake-up for the returned delay; on wake-up it calls the
//! hook's `poll(now)`, which asks [`Debounce::take_due`]. Re-arming moves the
//! deadline, so a wake-up left over from an earlier arm finds nothing due.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debounce {
    delay_ms: f64,
    deadline_ms: Option<f64>,
}

impl Debounce {
    #[must_use]
    pub fn new(delay_ms: f64) -> Self {
        Self { delay_ms, deadline_ms: None }
    }

    #[must_use]
    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    /// Cancel any pending deadline and start a new quiet period at `now_ms`.
    ///
    /// Returns the delay after which the host should poll.
    pub fn arm(&mut self, now_ms: f64) -> f64 {
        self.deadline_ms = Some(now_ms + self.delay_ms);
        self.delay_ms
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Time left until the pending deadline, zero once it has passed.
    #[must_use]
    pub fn remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.deadline_ms.map(|deadline| (deadline - now_ms).max(0.0))
    }

    /// Consume the deadline if it has passed.
    pub fn take_due(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
