// SPDX-License-Identifier: MPL-2.0
//! Playback state sub-component.
//!
//! Mirrors the decoder's position, duration, buffered range and playing
//! flag. This is the only component that talks to the [`Decoder`].
//!
//! Seeks update the local position right away; the playing flag only
//! changes when the decoder reports it. Every decoder tick overwrites the
//! status unconditionally, so the model converges to decoder truth within
//! one tick.

use crate::application::port::{Decoder, OnTick, Subscription};
use crate::domain::{PlaybackStatus, Track, TrackId, TrackKind};
use url::Url;

/// Playback sub-component state.
pub struct State {
    decoder: Box<dyn Decoder>,
    status: PlaybackStatus,
    /// Whether the user asked for playback, regardless of decoder progress.
    wants_playing: bool,
    subscription: Option<Subscription>,
}

/// Messages for the playback sub-component.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Pushed report from the decoder.
    DecoderTick(PlaybackStatus),
    Play,
    Pause,
    /// Play if the decoder reports paused, pause otherwise.
    TogglePlayback,
    /// Seek by a signed offset in seconds.
    SeekRelative(f64),
    /// Seek to an absolute position in seconds.
    SeekTo(f64),
    SelectTrack { kind: TrackKind, id: TrackId },
}

/// Effects produced by playback operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// The mirrored status changed.
    StatusChanged,
    /// Play or pause was requested. `playing` is the requested state.
    PlaybackRequested { playing: bool },
    /// A seek was forwarded to the decoder with the clamped target.
    Seeked { target: f64 },
}

impl State {
    #[must_use]
    pub fn new(decoder: Box<dyn Decoder>) -> Self {
        Self {
            decoder,
            status: PlaybackStatus::default(),
            wants_playing: false,
            subscription: None,
        }
    }

    /// Hands the source to the decoder.
    pub fn load(&mut self, source: &Url) {
        log::debug!("Loading source {source}");
        self.status = PlaybackStatus::default();
        self.decoder.load(source);
    }

    /// Registers the tick callback. A previous subscription is released first.
    pub fn subscribe(&mut self, on_tick: OnTick) {
        self.unsubscribe();
        self.subscription = Some(self.decoder.subscribe(on_tick));
        log::debug!("Subscribed to decoder ticks");
    }

    /// Releases the decoder subscription. Returns whether one was held.
    pub fn unsubscribe(&mut self) -> bool {
        match self.subscription.take() {
            Some(subscription) => {
                subscription.unsubscribe();
                log::debug!("Unsubscribed from decoder ticks");
                true
            }
            None => false,
        }
    }

    /// Handle a playback message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::DecoderTick(status) => {
                let status = PlaybackStatus::new(
                    status.current_time,
                    status.duration,
                    status.buffered,
                    status.playing,
                );
                if status == self.status {
                    Effect::None
                } else {
                    self.status = status;
                    Effect::StatusChanged
                }
            }
            Message::Play => self.play(),
            Message::Pause => self.pause(),
            Message::TogglePlayback => {
                if self.status.playing {
                    self.pause()
                } else {
                    self.play()
                }
            }
            Message::SeekRelative(delta) => {
                if !delta.is_finite() {
                    log::debug!("Dropping non-finite seek offset {delta}");
                    return Effect::None;
                }
                self.seek(self.status.current_time + delta)
            }
            Message::SeekTo(target) => {
                if !target.is_finite() {
                    log::debug!("Dropping non-finite seek target {target}");
                    return Effect::None;
                }
                self.seek(target)
            }
            Message::SelectTrack { kind, id } => {
                self.decoder.select_track(kind, id);
                Effect::None
            }
        }
    }

    fn play(&mut self) -> Effect {
        self.wants_playing = true;
        self.decoder.play();
        Effect::PlaybackRequested { playing: true }
    }

    fn pause(&mut self) -> Effect {
        self.wants_playing = false;
        self.decoder.pause();
        Effect::PlaybackRequested { playing: false }
    }

    fn seek(&mut self, target: f64) -> Effect {
        let target = self.status.clamp_time(target);
        self.decoder.set_current_time(target);
        self.status.current_time = target;
        Effect::Seeked { target }
    }

    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// True when playback was requested but the decoder is not progressing.
    #[must_use]
    pub fn is_buffering(&self) -> bool {
        self.wants_playing && !self.status.playing
    }

    #[must_use]
    pub fn wants_playing(&self) -> bool {
        self.wants_playing
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Tracks the decoder offers for the loaded source.
    #[must_use]
    pub fn tracks(&self) -> Vec<Track> {
        self.decoder.tracks()
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("status", &self.status)
            .field("wants_playing", &self.wants_playing)
            .field("subscribed", &self.subscription.is_some())
            .finish_non_exhaustive()
    }
}
