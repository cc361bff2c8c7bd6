//! One-shot deadline slot used to build self-rescheduling periodic callbacks.
//!
//! A [`Repeater`] holds at most one pending deadline. The owner polls it with
//! the current instant; once due, the deadline is consumed and the callback
//! decides whether to [`reschedule`](Repeater::reschedule). Clearing a flag
//! elsewhere never cancels a deadline that is already pending.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Repeater {
    period: Duration,
    next_due: Option<Instant>,
}

impl Repeater {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Make the callback due immediately unless one is already pending.
    pub fn fire_now(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now);
        }
    }

    /// Queue the next invocation one period after `now`.
    pub fn reschedule(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    pub fn is_pending(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Consume the pending deadline if it has passed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if due <= now => {
                self.next_due = None;
                true
            }
            _ => false,
        }
    }
}
