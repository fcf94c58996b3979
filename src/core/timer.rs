//! # Timers
//!
//! Deadline values for the slider. A timer is armed by storing it and
//! cancelled by dropping it (`Option::take`); nothing runs in the
//! background. The owner polls `is_due(now)` from its `tick`.
//!
//! Time is always passed in so tests can step a fake clock.

use std::time::{Duration, Instant};

/// One-shot deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout {
    deadline: Instant,
}

impl Timeout {
    pub fn after(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Repeating deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    started: Instant,
    next: Instant,
}

impl Interval {
    pub fn starting(now: Instant, period: Duration) -> Self {
        Self {
            period,
            started: now,
            next: now + period,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.next
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Consumes one due firing, returning true if the interval fired.
    ///
    /// If the owner fell behind by several periods the missed firings are
    /// coalesced into one; the next deadline is re-anchored after `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next || self.period.is_zero() {
            return false;
        }
        while self.next <= now {
            self.next += self.period;
        }
        self.started = self.next - self.period;
        true
    }

    /// Fraction of the current period elapsed, in `[0.0, 1.0]`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.period.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.period.as_secs_f32()).clamp(0.0, 1.0)
    }
}
