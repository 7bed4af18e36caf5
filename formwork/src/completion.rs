use std::time::{Duration, Instant};

/// Deferred firing of the post-submission completion handler.
///
/// The interpreter shows a confirmation for a fixed delay before handing
/// control back to its caller. The timer carries explicit fired/cancelled
/// latches: once cancelled (form torn down) it can never fire, and it fires
/// at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionTimer {
    deadline: Instant,
    fired: bool,
    cancelled: bool,
}

impl CompletionTimer {
    /// Arm a timer that becomes due `delay` after `now`.
    pub fn new(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
            fired: false,
            cancelled: false,
        }
    }

    /// The instant the timer becomes due.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// How long until the timer is due; zero once due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    /// Disarm the timer permanently.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Check if the timer was disarmed.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Check if the timer has already fired.
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Returns `true` exactly once: when the deadline has passed and the
    /// timer was neither cancelled nor fired before.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.cancelled || self.fired || now < self.deadline {
            return false;
        }
        self.fired = true;
        true
    }
}
