// SPDX-License-Identifier: MPL-2.0
//! Decoder port definition.
//!
//! This module defines the [`Decoder`] trait the overlay consumes. The
//! decoder itself (decoding, rendering, network transport) lives in the host.
//!
//! # Design Notes
//!
//! - The decoder is the sole source of truth for time, duration, buffered
//!   position and the playing flag
//! - Position updates are pushed through [`Decoder::subscribe`]
//! - The overlay clamps every seek target before calling
//!   [`Decoder::set_current_time`]

use crate::domain::{PlaybackStatus, Track, TrackId, TrackKind};
use url::Url;

/// Callback receiving pushed position updates.
pub type OnTick = Box<dyn FnMut(PlaybackStatus) + Send>;

// =============================================================================
// Subscription
// =============================================================================

/// Handle returned by [`Decoder::subscribe`].
///
/// [`Subscription::unsubscribe`] consumes the handle, so it can run at most
/// once. Dropping the handle without calling it leaves the decoder
/// subscribed.
pub struct Subscription {
    unsubscribe: Box<dyn FnOnce() + Send>,
}

impl Subscription {
    /// Wraps the decoder-specific unsubscribe action.
    pub fn new(unsubscribe: impl FnOnce() + Send + 'static) -> Self {
        Self {
            unsubscribe: Box::new(unsubscribe),
        }
    }

    /// Stops the decoder from pushing further ticks.
    pub fn unsubscribe(self) {
        (self.unsubscribe)();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

// =============================================================================
// Decoder Trait
// =============================================================================

/// Port for the external media decoder.
///
/// # Lifecycle
///
/// 1. The overlay calls `load()` with the mounted source, then `play()`
/// 2. It subscribes once and receives ticks until teardown
/// 3. At teardown it calls [`Subscription::unsubscribe`] exactly once
///
/// All control methods are asynchronous intents: the effect shows up in a
/// later tick, not in the return value.
pub trait Decoder: Send {
    /// Starts loading a media source.
    fn load(&mut self, source: &Url);

    /// Requests playback.
    fn play(&mut self);

    /// Requests pause.
    fn pause(&mut self);

    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Seeks to a position in seconds. The overlay always clamps first.
    fn set_current_time(&mut self, seconds: f64);

    /// Duration in seconds, `0.0` until resolved.
    fn duration(&self) -> f64;

    /// Buffered position in seconds.
    fn buffered_position(&self) -> f64;

    /// Whether the decoder is actually playing.
    fn is_playing(&self) -> bool;

    /// Registers the tick callback.
    fn subscribe(&mut self, on_tick: OnTick) -> Subscription;

    /// Subtitle and audio tracks available for the current source.
    fn tracks(&self) -> Vec<Track> {
        Vec::new()
    }

    /// Switches the active track of one kind.
    fn select_track(&mut self, _kind: TrackKind, _id: TrackId) {}
}
