// SPDX-License-Identifier: MPL-2.0
//! Play/pause pulse shown in the middle of the surface after a toggle.

use super::timer::ScopedTimer;
use crate::config::{CENTER_ICON_FADE_DELAY_MS, CENTER_ICON_FADE_MS};
use std::time::{Duration, Instant};

/// Total time the pulse stays on screen.
const PULSE_LIFETIME: Duration = Duration::from_millis(CENTER_ICON_FADE_DELAY_MS + CENTER_ICON_FADE_MS);

/// Glyph of the pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterIcon {
    Play,
    Pause,
}

impl CenterIcon {
    /// Icon confirming a request to reach `playing`.
    #[must_use]
    pub fn for_request(playing: bool) -> Self {
        if playing {
            Self::Play
        } else {
            Self::Pause
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    icon: Option<CenterIcon>,
    timer: ScopedTimer,
}

impl State {
    /// Starts a pulse, replacing any running one.
    pub fn pulse(&mut self, icon: CenterIcon, now: Instant) {
        self.icon = Some(icon);
        self.timer.arm(now, PULSE_LIFETIME);
    }

    /// Returns true when the pulse has just finished.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.timer.fire(now) {
            self.icon = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.timer.cancel();
        self.icon = None;
    }

    #[must_use]
    pub fn icon(&self) -> Option<CenterIcon> {
        self.icon
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_lasts_delay_plus_fade() {
        let start = Instant::now();
        let mut state = State::default();
        state.pulse(CenterIcon::Pause, start);

        assert!(!state.tick(start + Duration::from_millis(749)));
        assert_eq!(state.icon(), Some(CenterIcon::Pause));
        assert!(state.tick(start + Duration::from_millis(750)));
        assert_eq!(state.icon(), None);
    }

    #[test]
    fn icon_matches_requested_state() {
        assert_eq!(CenterIcon::for_request(true), CenterIcon::Play);
        assert_eq!(CenterIcon::for_request(false), CenterIcon::Pause);
    }
}
