// SPDX-License-Identifier: MPL-2.0
//! Playback status as reported by the decoder.
//!
//! The decoder is the only source of truth for time, duration and buffered
//! position. Values coming from it are sanitized rather than rejected: a
//! non-finite or negative number becomes zero and the current time is
//! clamped into `[0, duration]` once the duration is known.

/// Snapshot of the decoder's playback position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackStatus {
    /// Current position in seconds.
    pub current_time: f64,
    /// Total duration in seconds. `0.0` means unknown.
    pub duration: f64,
    /// Buffered position in seconds.
    pub buffered: f64,
    /// Whether the decoder is actually playing.
    pub playing: bool,
}

impl PlaybackStatus {
    /// Builds a sanitized status from raw decoder values.
    #[must_use]
    pub fn new(current_time: f64, duration: f64, buffered: f64, playing: bool) -> Self {
        let duration = non_negative(duration);
        let mut status = Self {
            current_time: non_negative(current_time),
            duration,
            buffered: non_negative(buffered),
            playing,
        };
        status.current_time = status.clamp_time(status.current_time);
        status
    }

    /// Returns true once the decoder has resolved the duration.
    #[must_use]
    pub fn has_duration(&self) -> bool {
        self.duration > 0.0
    }

    /// Clamps a target position into the playable range.
    ///
    /// The lower bound is always zero. The upper bound is the duration once
    /// it is known; before that, only the lower bound applies.
    #[must_use]
    pub fn clamp_time(&self, target: f64) -> f64 {
        let target = non_negative(target);
        if self.has_duration() {
            target.min(self.duration)
        } else {
            target
        }
    }

    /// Seconds left until the end, floored at zero.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        (self.duration - self.current_time).max(0.0)
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
