// SPDX-License-Identifier: MPL-2.0
//! Overlay tunable newtypes.
//!
//! This module provides type-safe wrappers for timing and threshold values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_AUTO_HIDE_DELAY_MS, DEFAULT_DOUBLE_TAP_WINDOW_MS, DEFAULT_PINCH_CONTAIN_THRESHOLD,
    DEFAULT_PINCH_COVER_THRESHOLD, DEFAULT_SEEK_FEEDBACK_MS, DEFAULT_SEEK_STEP_SECS,
    MAX_AUTO_HIDE_DELAY_MS, MAX_DOUBLE_TAP_WINDOW_MS, MAX_SEEK_FEEDBACK_MS, MAX_SEEK_STEP_SECS,
    MIN_AUTO_HIDE_DELAY_MS, MIN_DOUBLE_TAP_WINDOW_MS, MIN_SEEK_FEEDBACK_MS, MIN_SEEK_STEP_SECS,
};
use std::time::Duration;

// =============================================================================
// HideDelay
// =============================================================================

/// Inactivity delay before the controls auto-hide (1–30 s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideDelay(u64);

impl HideDelay {
    /// Creates a new delay, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_AUTO_HIDE_DELAY_MS, MAX_AUTO_HIDE_DELAY_MS))
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for HideDelay {
    fn default() -> Self {
        Self(DEFAULT_AUTO_HIDE_DELAY_MS)
    }
}

// =============================================================================
// DoubleTapWindow
// =============================================================================

/// Window after a first tap during which a second tap makes a double tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleTapWindow(u64);

impl DoubleTapWindow {
    /// Creates a new window, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_DOUBLE_TAP_WINDOW_MS, MAX_DOUBLE_TAP_WINDOW_MS))
    }

    /// Returns the window as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DoubleTapWindow {
    fn default() -> Self {
        Self(DEFAULT_DOUBLE_TAP_WINDOW_MS)
    }
}

// =============================================================================
// SeekStep
// =============================================================================

/// Skip distance in seconds for double taps and skip buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekStep(f64);

impl SeekStep {
    /// Creates a new step, clamping to valid range. Non-finite input
    /// falls back to the default.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        if secs.is_finite() {
            Self(secs.clamp(MIN_SEEK_STEP_SECS, MAX_SEEK_STEP_SECS))
        } else {
            Self::default()
        }
    }

    /// Returns the step value in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SeekStep {
    fn default() -> Self {
        Self(DEFAULT_SEEK_STEP_SECS)
    }
}

// =============================================================================
// FeedbackDuration
// =============================================================================

/// Lifetime of the seek feedback overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackDuration(u64);

impl FeedbackDuration {
    /// Creates a new duration, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_SEEK_FEEDBACK_MS, MAX_SEEK_FEEDBACK_MS))
    }

    /// Returns the duration as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for FeedbackDuration {
    fn default() -> Self {
        Self(DEFAULT_SEEK_FEEDBACK_MS)
    }
}

// =============================================================================
// PinchThresholds
// =============================================================================

/// Pinch-end scale thresholds that switch the content fit.
///
/// `cover` is always above 1.0 and `contain` always below; invalid values
/// fall back to the defaults individually. Scales in `[contain, cover]`
/// leave the fit unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchThresholds {
    cover: f32,
    contain: f32,
}

impl PinchThresholds {
    #[must_use]
    pub fn new(cover: f32, contain: f32) -> Self {
        let cover = if cover.is_finite() && cover > 1.0 {
            cover
        } else {
            DEFAULT_PINCH_COVER_THRESHOLD
        };
        let contain = if contain.is_finite() && contain > 0.0 && contain < 1.0 {
            contain
        } else {
            DEFAULT_PINCH_CONTAIN_THRESHOLD
        };
        Self { cover, contain }
    }

    #[must_use]
    pub fn cover(self) -> f32 {
        self.cover
    }

    #[must_use]
    pub fn contain(self) -> f32 {
        self.contain
    }
}

impl Default for PinchThresholds {
    fn default() -> Self {
        Self {
            cover: DEFAULT_PINCH_COVER_THRESHOLD,
            contain: DEFAULT_PINCH_CONTAIN_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn hide_delay_clamps_to_valid_range() {
        assert_eq!(
            HideDelay::from_millis(0).as_duration(),
            Duration::from_millis(MIN_AUTO_HIDE_DELAY_MS)
        );
        assert_eq!(
            HideDelay::from_millis(u64::MAX).as_duration(),
            Duration::from_millis(MAX_AUTO_HIDE_DELAY_MS)
        );
        assert_eq!(HideDelay::default().as_duration(), Duration::from_secs(4));
    }

    #[test]
    fn double_tap_window_defaults_to_300ms() {
        assert_eq!(
            DoubleTapWindow::default().as_duration(),
            Duration::from_millis(300)
        );
        assert_eq!(
            DoubleTapWindow::from_millis(1).as_duration(),
            Duration::from_millis(MIN_DOUBLE_TAP_WINDOW_MS)
        );
    }

    #[test]
    fn seek_step_clamps_and_rejects_nan() {
        assert_abs_diff_eq!(SeekStep::new(0.0).value(), MIN_SEEK_STEP_SECS);
        assert_abs_diff_eq!(SeekStep::new(1000.0).value(), MAX_SEEK_STEP_SECS);
        assert_abs_diff_eq!(SeekStep::new(f64::NAN).value(), DEFAULT_SEEK_STEP_SECS);
        assert_abs_diff_eq!(SeekStep::new(5.0).value(), 5.0);
    }

    #[test]
    fn feedback_duration_defaults_to_500ms() {
        assert_eq!(
            FeedbackDuration::default().as_duration(),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn pinch_thresholds_reject_values_on_wrong_side_of_one() {
        let thresholds = PinchThresholds::new(0.9, 1.1);
        assert_abs_diff_eq!(thresholds.cover(), DEFAULT_PINCH_COVER_THRESHOLD);
        assert_abs_diff_eq!(thresholds.contain(), DEFAULT_PINCH_CONTAIN_THRESHOLD);

        let custom = PinchThresholds::new(1.5, 0.6);
        assert_abs_diff_eq!(custom.cover(), 1.5);
        assert_abs_diff_eq!(custom.contain(), 0.6);
    }
}
