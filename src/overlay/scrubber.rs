// SPDX-License-Identifier: MPL-2.0
//! Scrubber projection.
//!
//! Pure derivation of the seek bar from a [`PlaybackStatus`]. Nothing here
//! holds state; the orchestrator re-projects whenever the status changes.

use crate::domain::PlaybackStatus;

/// What the seek bar displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrubberView {
    /// Elapsed share of the duration, `0.0..=100.0`.
    pub progress_percent: f64,
    /// Buffered share of the duration, `0.0..=100.0`.
    pub buffered_percent: f64,
    /// Elapsed time as `M:SS`.
    pub elapsed_label: String,
    /// Remaining time as `-M:SS`.
    pub remaining_label: String,
}

impl ScrubberView {
    /// Projects the status onto the seek bar.
    #[must_use]
    pub fn project(status: &PlaybackStatus) -> Self {
        Self::at(status, status.current_time)
    }

    /// Projects the bar as if the playhead were at `ratio` of the duration.
    ///
    /// Used while the user drags the scrubber: the labels follow the thumb
    /// before the seek is committed.
    #[must_use]
    pub fn preview(status: &PlaybackStatus, ratio: f64) -> Self {
        let ratio = if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self::at(status, ratio * status.duration)
    }

    fn at(status: &PlaybackStatus, position: f64) -> Self {
        let position = status.clamp_time(position);
        Self {
            progress_percent: percent(position, status.duration),
            buffered_percent: percent(status.buffered, status.duration),
            elapsed_label: format_time(position),
            remaining_label: format!("-{}", format_time((status.duration - position).max(0.0))),
        }
    }
}

/// Share of `duration` covered by `value`, in percent.
///
/// Zero duration yields zero. Never returns NaN.
#[must_use]
pub fn percent(value: f64, duration: f64) -> f64 {
    if duration > 0.0 && duration.is_finite() && value.is_finite() {
        (value / duration * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Formats seconds as `M:SS`. Minutes are unbounded.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() {
        seconds.max(0.0) as u64
    } else {
        0
    };
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn format_time_handles_zero() {
        assert_eq!(format_time(0.0), "0:00");
    }

    #[test]
    fn format_time_pads_seconds() {
        assert_eq!(format_time(65.9), "1:05");
    }

    #[test]
    fn format_time_does_not_roll_minutes_into_hours() {
        assert_eq!(format_time(3665.0), "61:05");
    }

    #[test]
    fn format_time_handles_negative_and_nan() {
        assert_eq!(format_time(-10.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
    }

    #[test]
    fn progress_is_zero_without_duration() {
        let status = PlaybackStatus {
            current_time: 42.0,
            duration: 0.0,
            buffered: 50.0,
            playing: true,
        };
        let view = ScrubberView::project(&status);
        assert_abs_diff_eq!(view.progress_percent, 0.0);
        assert_abs_diff_eq!(view.buffered_percent, 0.0);
        assert!(!view.progress_percent.is_nan());
    }

    #[test]
    fn progress_and_buffer_are_percentages() {
        let status = PlaybackStatus::new(30.0, 120.0, 60.0, true);
        let view = ScrubberView::project(&status);
        assert_abs_diff_eq!(view.progress_percent, 25.0);
        assert_abs_diff_eq!(view.buffered_percent, 50.0);
        assert_eq!(view.elapsed_label, "0:30");
        assert_eq!(view.remaining_label, "-1:30");
    }

    #[test]
    fn buffered_past_duration_is_capped() {
        let status = PlaybackStatus::new(10.0, 20.0, 500.0, false);
        assert_abs_diff_eq!(ScrubberView::project(&status).buffered_percent, 100.0);
    }

    #[test]
    fn remaining_is_floored_at_zero() {
        let status = PlaybackStatus {
            current_time: 90.0,
            duration: 60.0,
            buffered: 0.0,
            playing: false,
        };
        let view = ScrubberView::project(&status);
        assert_eq!(view.remaining_label, "-0:00");
        assert_abs_diff_eq!(view.progress_percent, 100.0);
    }

    #[test]
    fn preview_follows_ratio() {
        let status = PlaybackStatus::new(0.0, 200.0, 0.0, true);
        let view = ScrubberView::preview(&status, 0.5);
        assert_eq!(view.elapsed_label, "1:40");
        assert_abs_diff_eq!(view.progress_percent, 50.0);

        let clamped = ScrubberView::preview(&status, 3.0);
        assert_abs_diff_eq!(clamped.progress_percent, 100.0);
    }
}
