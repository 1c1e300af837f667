// SPDX-License-Identifier: MPL-2.0
//! Seek feedback sub-component.
//!
//! Shows which way a double-tap skip went. At most one indicator exists; a
//! new trigger replaces the current one and restarts its decay.

use super::timer::ScopedTimer;
use crate::domain::{FeedbackDuration, SeekDirection};
use std::time::{Duration, Instant};

/// The indicator currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekFeedback {
    pub direction: SeekDirection,
    pub started_at: Instant,
    pub expires_at: Instant,
}

impl SeekFeedback {
    /// Opacity at `now`, decaying linearly from 1 to 0 over the lifetime.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let lifetime = self.expires_at.saturating_duration_since(self.started_at);
        if lifetime.is_zero() || now >= self.expires_at {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        1.0 - elapsed.as_secs_f32() / lifetime.as_secs_f32()
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    current: Option<SeekFeedback>,
    expiry: ScopedTimer,
    lifetime: FeedbackDuration,
}

/// Effects produced by the seek feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A fresh indicator starts at full opacity.
    Started(SeekDirection),
    /// The indicator has faded out and was discarded.
    Expired,
}

impl State {
    #[must_use]
    pub fn new(lifetime: FeedbackDuration) -> Self {
        Self {
            lifetime,
            ..Self::default()
        }
    }

    /// Shows the indicator for `direction`, restarting any running decay.
    pub fn trigger(&mut self, direction: SeekDirection, now: Instant) -> Effect {
        let lifetime = self.lifetime.as_duration();
        self.current = Some(SeekFeedback {
            direction,
            started_at: now,
            expires_at: now + lifetime,
        });
        self.expiry.arm(now, lifetime);
        Effect::Started(direction)
    }

    /// Discards the indicator once its lifetime is over.
    pub fn tick(&mut self, now: Instant) -> Effect {
        if self.expiry.fire(now) {
            self.current = None;
            Effect::Expired
        } else {
            Effect::None
        }
    }

    /// Drops the indicator immediately. Used at teardown.
    pub fn clear(&mut self) {
        self.expiry.cancel();
        self.current = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<SeekFeedback> {
        self.current
    }

    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.lifetime.as_duration()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.expiry.deadline()
    }
}
