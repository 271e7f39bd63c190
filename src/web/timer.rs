use gloo_timers::callback::Timeout;

/// Holds at most one pending timeout. Scheduling replaces (and thereby
/// cancels) the previous one.
#[derive(Default)]
pub struct TimerSlot {
    pending: Option<Timeout>,
}

impl TimerSlot {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn schedule<F>(&mut self, delay_ms: f64, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let millis = delay_ms.max(0.0).ceil().min(f64::from(u32::MAX)) as u32;
        self.pending = Some(Timeout::new(millis, callback));
    }

    /// Dropping a `Timeout` clears it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
