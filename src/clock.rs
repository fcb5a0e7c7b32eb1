use std::time::{Duration, Instant};

/// Restartable periodic tick scheduler.
///
/// The clock is cooperative: the owner polls it with the current instant and
/// runs its tick work whenever [`Clock::poll`] reports a due tick. The armed
/// deadline is the only scheduling handle, so there is never more than one
/// pending tick.
#[derive(Debug, Clone)]
pub struct Clock {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Clock {
    /// Creates a disarmed clock.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Arms the next tick one interval after `now`. No-op while armed.
    pub fn start(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.interval);
        }
    }

    /// Disarms the pending tick, if any.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    /// Disarms, switches to `interval`, then arms again from `now`.
    pub fn reset(&mut self, interval: Duration, now: Instant) {
        self.stop();
        self.interval = interval;
        self.start(now);
    }

    /// Returns true when the pending tick is due at `now`.
    ///
    /// A due tick is consumed and the next one is armed a full interval
    /// after `now`, so a late poll yields one tick rather than a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left before the pending tick; `None` when disarmed.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
