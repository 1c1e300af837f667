// SPDX-License-Identifier: MPL-2.0
//! Simulated decoder for demos and tests.
//!
//! Plays back a source of fixed length against the tokio clock. The
//! duration only resolves after a short startup delay and the buffer fills
//! ahead of the playhead at a bounded rate, so the overlay sees the same
//! "unknown duration" and "buffering" phases a network decoder produces.

use crate::application::port::{Decoder, OnTick, Subscription};
use crate::domain::{PlaybackStatus, Track, TrackId, TrackKind};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use url::Url;

/// Interval between pushed ticks.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Ticks before the duration is reported.
const STARTUP_TICKS: u32 = 2;

/// How far ahead of the playhead the buffer may grow, in seconds.
const BUFFER_AHEAD_SECS: f64 = 30.0;

/// Buffered seconds gained per wall-clock second.
const BUFFER_RATE: f64 = 8.0;

#[derive(Default)]
struct Inner {
    source: Option<Url>,
    media_duration: f64,
    position: f64,
    buffered: f64,
    wants_playing: bool,
    ticks_elapsed: u32,
    on_tick: Option<OnTick>,
    selected: Vec<(TrackKind, TrackId)>,
}

impl Inner {
    fn duration(&self) -> f64 {
        if self.source.is_some() && self.ticks_elapsed >= STARTUP_TICKS {
            self.media_duration
        } else {
            0.0
        }
    }

    /// Playing means requested and the playhead is inside the buffer.
    fn is_playing(&self) -> bool {
        self.wants_playing && self.duration() > 0.0 && self.position < self.buffered
    }

    fn advance(&mut self, step: Duration) {
        if self.source.is_none() {
            return;
        }
        self.ticks_elapsed = self.ticks_elapsed.saturating_add(1);
        let secs = step.as_secs_f64();
        let duration = self.duration();
        if duration <= 0.0 {
            return;
        }

        self.buffered = (self.buffered + secs * BUFFER_RATE)
            .min(self.position + BUFFER_AHEAD_SECS)
            .min(duration);

        if self.is_playing() {
            self.position = (self.position + secs).min(self.buffered);
            if self.position >= duration {
                self.wants_playing = false;
            }
        }
    }

    fn status(&self) -> PlaybackStatus {
        PlaybackStatus::new(self.position, self.duration(), self.buffered, self.is_playing())
    }
}

/// Fake [`Decoder`] driven by a tokio interval.
pub struct SimulatedDecoder {
    inner: Arc<Mutex<Inner>>,
    task: JoinHandle<()>,
}

impl SimulatedDecoder {
    /// Starts a simulated decoder for media of the given length.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn start(media_duration: Duration) -> Self {
        let inner = Arc::new(Mutex::new(Inner {
            media_duration: media_duration.as_secs_f64(),
            ..Inner::default()
        }));

        let shared = Arc::clone(&inner);
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            interval.tick().await;
            loop {
                interval.tick().await;
                let mut guard = lock(&shared);
                guard.advance(TICK_INTERVAL);
                let status = guard.status();
                if let Some(on_tick) = guard.on_tick.as_mut() {
                    on_tick(status);
                }
            }
        });

        Self { inner, task }
    }

    /// Tracks selected so far, oldest first.
    #[must_use]
    pub fn selections(&self) -> Vec<(TrackKind, TrackId)> {
        lock(&self.inner).selected.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        lock(&self.inner)
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    // A panicking tick callback must not take the whole decoder down with it.
    inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

impl Drop for SimulatedDecoder {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl std::fmt::Debug for SimulatedDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("SimulatedDecoder")
            .field("source", &inner.source.as_ref().map(Url::as_str))
            .field("position", &inner.position)
            .field("subscribed", &inner.on_tick.is_some())
            .finish()
    }
}

impl Decoder for SimulatedDecoder {
    fn load(&mut self, source: &Url) {
        let mut inner = self.lock();
        inner.source = Some(source.clone());
        inner.position = 0.0;
        inner.buffered = 0.0;
        inner.ticks_elapsed = 0;
    }

    fn play(&mut self) {
        self.lock().wants_playing = true;
    }

    fn pause(&mut self) {
        self.lock().wants_playing = false;
    }

    fn current_time(&self) -> f64 {
        self.lock().position
    }

    fn set_current_time(&mut self, seconds: f64) {
        let mut inner = self.lock();
        let duration = inner.duration();
        inner.position = if duration > 0.0 {
            seconds.clamp(0.0, duration)
        } else {
            seconds.max(0.0)
        };
        // Seeking past the buffered range moves the buffer edge up to the playhead.
        if inner.position > inner.buffered {
            inner.buffered = inner.position;
        }
    }

    fn duration(&self) -> f64 {
        self.lock().duration()
    }

    fn buffered_position(&self) -> f64 {
        self.lock().buffered
    }

    fn is_playing(&self) -> bool {
        self.lock().is_playing()
    }

    fn subscribe(&mut self, on_tick: OnTick) -> Subscription {
        self.lock().on_tick = Some(on_tick);
        let inner = Arc::clone(&self.inner);
        Subscription::new(move || {
            lock(&inner).on_tick = None;
        })
    }

    fn tracks(&self) -> Vec<Track> {
        vec![
            Track::new(TrackKind::Subtitle, 0, "English (SDH)"),
            Track::new(TrackKind::Subtitle, 1, "Spanish"),
            Track::new(TrackKind::Audio, 0, "English"),
        ]
    }

    fn select_track(&mut self, kind: TrackKind, id: TrackId) {
        self.lock().selected.push((kind, id));
    }
}
