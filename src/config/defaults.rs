// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the overlay. Constants are organized by category.
//!
//! # Categories
//!
//! - **Visibility**: Auto-hide delay and controls fade
//! - **Gestures**: Double-tap window and pinch thresholds
//! - **Seeking**: Skip step and seek feedback duration
//! - **Track Panel**: Offsets and spring parameters
//! - **Center Icon**: Play/pause pulse animation

// ==========================================================================
// Visibility Defaults
// ==========================================================================

/// Default inactivity delay before the controls hide (in milliseconds).
pub const DEFAULT_AUTO_HIDE_DELAY_MS: u64 = 4000;

/// Minimum auto-hide delay (in milliseconds).
pub const MIN_AUTO_HIDE_DELAY_MS: u64 = 1000;

/// Maximum auto-hide delay (in milliseconds).
pub const MAX_AUTO_HIDE_DELAY_MS: u64 = 30_000;

/// Duration of the controls opacity fade when showing or hiding.
pub const CONTROLS_FADE_MS: u64 = 250;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default double-tap window, measured from the first tap (in milliseconds).
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Minimum double-tap window (in milliseconds).
pub const MIN_DOUBLE_TAP_WINDOW_MS: u64 = 150;

/// Maximum double-tap window (in milliseconds).
pub const MAX_DOUBLE_TAP_WINDOW_MS: u64 = 600;

/// Pinch-end scale above which the content switches to "cover".
pub const DEFAULT_PINCH_COVER_THRESHOLD: f32 = 1.2;

/// Pinch-end scale below which the content switches to "contain".
pub const DEFAULT_PINCH_CONTAIN_THRESHOLD: f32 = 0.8;

// ==========================================================================
// Seeking Defaults
// ==========================================================================

/// Default skip step for double-tap and skip buttons (in seconds).
pub const DEFAULT_SEEK_STEP_SECS: f64 = 10.0;

/// Minimum skip step (in seconds).
pub const MIN_SEEK_STEP_SECS: f64 = 1.0;

/// Maximum skip step (in seconds).
pub const MAX_SEEK_STEP_SECS: f64 = 60.0;

/// Default lifetime of the seek feedback overlay (in milliseconds).
pub const DEFAULT_SEEK_FEEDBACK_MS: u64 = 500;

/// Minimum seek feedback lifetime (in milliseconds).
pub const MIN_SEEK_FEEDBACK_MS: u64 = 100;

/// Maximum seek feedback lifetime (in milliseconds).
pub const MAX_SEEK_FEEDBACK_MS: u64 = 2000;

// ==========================================================================
// Track Panel Defaults
// ==========================================================================

/// Panel offset when fully open.
pub const PANEL_OPEN_OFFSET: f32 = 0.0;

/// Default panel offset when closed (slid below the surface).
pub const DEFAULT_PANEL_CLOSED_OFFSET: f32 = 600.0;

/// Spring tension used for the panel slide.
pub const PANEL_SPRING_TENSION: f32 = 65.0;

/// Spring friction used for the panel slide.
pub const PANEL_SPRING_FRICTION: f32 = 10.0;

// ==========================================================================
// Center Icon Defaults
// ==========================================================================

/// Fade-out duration of the play/pause pulse (in milliseconds).
pub const CENTER_ICON_FADE_MS: u64 = 600;

/// Delay before the play/pause pulse starts fading (in milliseconds).
pub const CENTER_ICON_FADE_DELAY_MS: u64 = 150;

/// Scale the play/pause pulse starts from.
pub const CENTER_ICON_SCALE_FROM: f32 = 0.8;

/// Scale the play/pause pulse springs towards.
pub const CENTER_ICON_SCALE_TO: f32 = 1.2;

/// Spring tension of the play/pause pulse.
pub const CENTER_ICON_SPRING_TENSION: f32 = 50.0;

/// Spring friction of the play/pause pulse.
pub const CENTER_ICON_SPRING_FRICTION: f32 = 7.0;

// ==========================================================================
// Mount Defaults
// ==========================================================================

/// Title shown when the host does not supply one.
pub const DEFAULT_TITLE: &str = "Streaming Now";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Visibility validation
    assert!(MIN_AUTO_HIDE_DELAY_MS > 0);
    assert!(MAX_AUTO_HIDE_DELAY_MS >= MIN_AUTO_HIDE_DELAY_MS);
    assert!(DEFAULT_AUTO_HIDE_DELAY_MS >= MIN_AUTO_HIDE_DELAY_MS);
    assert!(DEFAULT_AUTO_HIDE_DELAY_MS <= MAX_AUTO_HIDE_DELAY_MS);

    // Gesture validation
    assert!(MIN_DOUBLE_TAP_WINDOW_MS > 0);
    assert!(MAX_DOUBLE_TAP_WINDOW_MS >= MIN_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS >= MIN_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS <= MAX_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_PINCH_COVER_THRESHOLD > 1.0);
    assert!(DEFAULT_PINCH_CONTAIN_THRESHOLD < 1.0);
    assert!(DEFAULT_PINCH_CONTAIN_THRESHOLD > 0.0);

    // Seeking validation
    assert!(MIN_SEEK_STEP_SECS > 0.0);
    assert!(MAX_SEEK_STEP_SECS >= MIN_SEEK_STEP_SECS);
    assert!(DEFAULT_SEEK_STEP_SECS >= MIN_SEEK_STEP_SECS);
    assert!(DEFAULT_SEEK_STEP_SECS <= MAX_SEEK_STEP_SECS);
    assert!(MIN_SEEK_FEEDBACK_MS > 0);
    assert!(MAX_SEEK_FEEDBACK_MS >= MIN_SEEK_FEEDBACK_MS);
    assert!(DEFAULT_SEEK_FEEDBACK_MS >= MIN_SEEK_FEEDBACK_MS);
    assert!(DEFAULT_SEEK_FEEDBACK_MS <= MAX_SEEK_FEEDBACK_MS);

    // Panel validation
    assert!(DEFAULT_PANEL_CLOSED_OFFSET > PANEL_OPEN_OFFSET);
    assert!(PANEL_SPRING_TENSION > 0.0);
    assert!(PANEL_SPRING_FRICTION > 0.0);
};
