// SPDX-License-Identifier: MPL-2.0
//! Control visibility sub-component.
//!
//! Owns the visible/hidden flag, the set of suspend reasons and the single
//! auto-hide timer. The timer is armed only while the controls are visible
//! and no suspend reason is held.

use super::timer::ScopedTimer;
use crate::domain::HideDelay;
use std::collections::HashSet;
use std::time::Instant;

/// A condition that keeps the controls from auto-hiding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuspendReason {
    /// The user is dragging the scrubber.
    Seeking,
    /// The track selection panel is open.
    MenuOpen,
}

/// Control visibility state.
#[derive(Debug, Clone)]
pub struct State {
    visible: bool,
    reasons: HashSet<SuspendReason>,
    timer: ScopedTimer,
    delay: HideDelay,
}

/// Messages for the visibility sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Show,
    Hide,
    Toggle,
    Suspend(SuspendReason),
    Resume(SuspendReason),
}

/// Effects produced by visibility changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Hidden → Visible.
    Shown,
    /// Visible → Hidden. The orchestrator closes the track panel.
    Hidden,
}

impl State {
    /// Creates a visible controller with no timer armed.
    #[must_use]
    pub fn new(delay: HideDelay) -> Self {
        Self {
            visible: true,
            reasons: HashSet::new(),
            timer: ScopedTimer::default(),
            delay,
        }
    }

    /// Handle a visibility message.
    pub fn handle(&mut self, msg: Message, now: Instant) -> Effect {
        match msg {
            Message::Show => self.show(now),
            Message::Hide => self.hide(),
            Message::Toggle => {
                if self.visible {
                    self.hide()
                } else {
                    self.show(now)
                }
            }
            Message::Suspend(reason) => {
                self.reasons.insert(reason);
                if self.timer.cancel() {
                    log::trace!("Auto-hide suspended by {reason:?}");
                }
                Effect::None
            }
            Message::Resume(reason) => {
                if self.reasons.remove(&reason) {
                    self.rearm_if_eligible(now);
                }
                Effect::None
            }
        }
    }

    /// Fires the auto-hide timer if it is due.
    pub fn tick(&mut self, now: Instant) -> Effect {
        if self.timer.fire(now) && self.is_eligible() {
            log::debug!("Controls auto-hidden after inactivity");
            return self.hide();
        }
        Effect::None
    }

    fn show(&mut self, now: Instant) -> Effect {
        let was_visible = self.visible;
        self.visible = true;
        self.rearm_if_eligible(now);
        if was_visible {
            Effect::None
        } else {
            Effect::Shown
        }
    }

    fn hide(&mut self) -> Effect {
        self.timer.cancel();
        if self.visible {
            self.visible = false;
            Effect::Hidden
        } else {
            Effect::None
        }
    }

    fn rearm_if_eligible(&mut self, now: Instant) {
        if self.is_eligible() {
            self.timer.arm(now, self.delay.as_duration());
        } else {
            self.timer.cancel();
        }
    }

    fn is_eligible(&self) -> bool {
        self.visible && self.reasons.is_empty()
    }

    /// Cancels the auto-hide timer. Used at teardown.
    pub fn cancel_timer(&mut self) {
        self.timer.cancel();
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_suspended_by(&self, reason: SuspendReason) -> bool {
        self.reasons.contains(&reason)
    }

    #[must_use]
    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(HideDelay::default())
    }
}
