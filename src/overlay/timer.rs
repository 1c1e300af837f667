// SPDX-License-Identifier: MPL-2.0
//! Cancellable one-shot deadline.
//!
//! A [`ScopedTimer`] is armed when a component enters a state that needs a
//! delayed transition and is cancelled on every exit path. The owning
//! component polls it with [`ScopedTimer::fire`] from its `tick`.

use std::time::{Duration, Instant};

/// One-shot deadline with at most one outstanding instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopedTimer {
    deadline: Option<Instant>,
}

impl ScopedTimer {
    /// Arms the timer to fire `after` from `now`, replacing any prior deadline.
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    /// Cancels the timer. Returns whether a deadline was pending.
    ///
    /// Cancelling an unarmed timer is a no-op.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Disarms and returns true if the deadline has been reached.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Earliest of a set of optional deadlines.
pub(crate) fn earliest(deadlines: impl IntoIterator<Item = Option<Instant>>) -> Option<Instant> {
    deadlines.into_iter().flatten().min()
}
