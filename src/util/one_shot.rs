//! Cancellable one-shot timer driven by simulation time.
//!
//! The rig's deferred input-bind retry is the only consumer: the timer is
//! owned by its controller, advanced from the per-step update, and simply
//! dropped with the controller, so a pending callback can never observe a
//! destroyed owner.

/// A one-shot countdown measured in simulation seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneShot {
    remaining: Option<f32>,
}

impl OneShot {
    /// An idle timer with nothing scheduled.
    #[must_use]
    pub const fn idle() -> Self {
        Self { remaining: None }
    }

    /// Arm the timer to fire `delay` seconds from now.
    ///
    /// Re-arming a pending timer replaces the old deadline.
    pub fn schedule(&mut self, delay: f32) {
        self.remaining = Some(delay.max(0.0));
    }

    /// Discard any pending deadline.
    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    /// Whether a deadline is currently armed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance the timer by `dt` seconds.
    ///
    /// Returns `true` exactly once, on the step where the deadline elapses;
    /// the timer returns to idle afterwards.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        let remaining = remaining - dt;
        if remaining <= 0.0 {
            self.remaining = None;
            true
        } else {
            self.remaining = Some(remaining);
            false
        }
    }
}
