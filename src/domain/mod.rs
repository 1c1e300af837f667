// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core overlay types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gesture`]: Classified gesture intents ([`GestureIntent`](gesture::GestureIntent),
//!   [`SeekDirection`](gesture::SeekDirection), [`ContentFit`](gesture::ContentFit))
//! - [`newtypes`]: Range-clamped tunables ([`HideDelay`](newtypes::HideDelay),
//!   [`SeekStep`](newtypes::SeekStep), [`PinchThresholds`](newtypes::PinchThresholds))
//! - [`playback`]: Decoder-reported playback status ([`PlaybackStatus`](playback::PlaybackStatus))
//! - [`track`]: Selectable subtitle and audio tracks ([`Track`](track::Track))

pub mod gesture;
pub mod newtypes;
pub mod playback;
pub mod track;

// Re-export commonly used types
pub use gesture::{ContentFit, GestureIntent, SeekDirection, SurfaceHalf};
pub use newtypes::{DoubleTapWindow, FeedbackDuration, HideDelay, PinchThresholds, SeekStep};
pub use playback::PlaybackStatus;
pub use track::{Track, TrackId, TrackKind};
