// SPDX-License-Identifier: MPL-2.0
//! Overlay component encapsulating the sub-components and the routing
//! between them.

use super::animations::Animations;
use super::center_icon::{self, CenterIcon};
use super::gesture::{fit_after_pinch, GestureDisambiguator, RawPointerEvent};
use super::playback;
use super::scrubber::ScrubberView;
use super::seek_feedback;
use super::timer::earliest;
use super::track_panel;
use super::visibility::{self, SuspendReason};
use crate::application::port::{AnimatedProperty, AnimationDriver, Curve, Decoder};
use crate::config::{
    OverlaySettings, CENTER_ICON_FADE_DELAY_MS, CENTER_ICON_FADE_MS, CENTER_ICON_SCALE_FROM,
    CENTER_ICON_SCALE_TO, CENTER_ICON_SPRING_FRICTION, CENTER_ICON_SPRING_TENSION,
    CONTROLS_FADE_MS, DEFAULT_TITLE, PANEL_SPRING_FRICTION, PANEL_SPRING_TENSION,
};
use crate::domain::{
    ContentFit, GestureIntent, PlaybackStatus, SeekDirection, SurfaceHalf, Track, TrackId,
    TrackKind,
};
use crate::error::{Error, Result};
use iced_core::Size;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use url::Url;

/// What the host passes when mounting the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountOptions {
    pub source: Url,
    pub title: String,
}

impl MountOptions {
    /// Validates the source URI and fills in the default title.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSource`] when `source` is not an absolute URI.
    pub fn parse(source: &str, title: Option<String>) -> Result<Self> {
        let source = Url::parse(source.trim()).map_err(|err| Error::InvalidSource {
            source_uri: source.to_string(),
            reason: err.to_string(),
        })?;
        let title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        Ok(Self { source, title })
    }
}

/// Messages the host feeds into the overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Raw touch input on the gesture surface.
    Pointer(RawPointerEvent),
    /// Status pushed by the decoder subscription.
    DecoderTick(PlaybackStatus),
    /// The gesture surface changed size.
    SurfaceResized(Size),
    /// Center play/pause button.
    TogglePlayback,
    Play,
    Pause,
    /// Skip buttons in the bottom bar.
    Skip(SeekDirection),
    SeekTo(f64),
    /// Any interaction that should bring the controls back.
    ShowControls,
    /// Hide the controls now. Dismisses the track panel too.
    HideControls,
    /// Audio & subtitles button. No-op while the panel is already open.
    OpenTrackPanel,
    ToggleTrackPanel,
    SelectTrack {
        kind: TrackKind,
        id: TrackId,
    },
    ToggleContentFit,
    ScrubStarted,
    /// Thumb position as a ratio of the duration.
    ScrubMoved(f64),
    /// Thumb released at this ratio of the duration.
    ScrubReleased(f64),
    /// Done button.
    Close,
}

/// Side effects the host should act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Derived state changed; re-render from [`Overlay::view`].
    Changed,
    /// The user dismissed the overlay. The host decides when to tear down.
    Closed,
}

/// Everything the host needs to render one frame of the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub title: String,
    pub controls_visible: bool,
    pub playing: bool,
    pub buffering: bool,
    pub scrubber: ScrubberView,
    pub scrubbing: bool,
    pub seek_feedback: Option<(SeekDirection, f32)>,
    pub center_icon: Option<CenterIcon>,
    pub panel_open: bool,
    pub tracks: Vec<Track>,
    pub selected_subtitle: Option<TrackId>,
    pub selected_audio: Option<TrackId>,
    pub content_fit: ContentFit,
    /// Scale of a pinch in progress, for live preview.
    pub pinch_scale: Option<f32>,
}

/// Playback overlay engine.
///
/// Constructed on mount, torn down on unmount. All timing is driven by the
/// `now` passed into [`Overlay::handle`] and [`Overlay::tick`].
#[derive(Debug)]
pub struct Overlay {
    source: Url,
    title: String,
    settings: OverlaySettings,
    playback: playback::State,
    visibility: visibility::State,
    gestures: GestureDisambiguator,
    feedback: seek_feedback::State,
    center_icon: center_icon::State,
    panel: track_panel::State,
    animations: Animations,
    surface: Size,
    content_fit: ContentFit,
    /// Thumb ratio while the scrubber is being dragged.
    scrub_preview: Option<f64>,
    torn_down: bool,
}

impl Overlay {
    /// Mounts the overlay: loads the source, subscribes to decoder ticks,
    /// shows the controls and starts playback.
    ///
    /// Decoder ticks arrive on the returned receiver and must be fed back
    /// as [`Message::DecoderTick`].
    pub fn mount(
        decoder: Box<dyn Decoder>,
        animator: Box<dyn AnimationDriver>,
        options: MountOptions,
        settings: OverlaySettings,
        now: Instant,
    ) -> (Self, mpsc::UnboundedReceiver<PlaybackStatus>) {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut overlay = Self {
            source: options.source,
            title: options.title,
            settings,
            playback: playback::State::new(decoder),
            visibility: visibility::State::new(settings.auto_hide_delay),
            gestures: GestureDisambiguator::new(settings.double_tap_window),
            feedback: seek_feedback::State::new(settings.seek_feedback),
            center_icon: center_icon::State::default(),
            panel: track_panel::State::new(settings.panel_closed_offset),
            animations: Animations::new(animator),
            surface: Size::ZERO,
            content_fit: settings.content_fit,
            scrub_preview: None,
            torn_down: false,
        };

        overlay.playback.load(&overlay.source);
        overlay.playback.subscribe(Box::new(move |status| {
            // The receiver is gone once the host loop stops.
            let _ = tx.send(status);
        }));
        let tracks = overlay.playback.tracks();
        overlay.panel.handle(track_panel::Message::SetTracks(tracks));

        overlay.animations.set(AnimatedProperty::ControlsOpacity, 1.0);
        overlay
            .animations
            .set(AnimatedProperty::PanelOffset, overlay.panel.target_offset());
        overlay.animations.set(AnimatedProperty::SeekFeedbackOpacity, 0.0);
        overlay.animations.set(AnimatedProperty::CenterIconOpacity, 0.0);

        overlay.visibility.handle(visibility::Message::Show, now);
        overlay.playback.handle(playback::Message::Play);

        log::info!("Mounted overlay \"{}\" for {}", overlay.title, overlay.source);
        (overlay, rx)
    }

    /// Handle a host message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message, now: Instant) -> Effect {
        if self.torn_down {
            log::trace!("Ignoring {msg:?} after teardown");
            return Effect::None;
        }

        match msg {
            Message::Pointer(event) => {
                let was_pinching = self.gestures.live_pinch_scale();
                match self.gestures.classify(event, self.surface, now) {
                    Some(intent) => {
                        self.apply_intent(intent, now);
                        Effect::Changed
                    }
                    None if self.gestures.live_pinch_scale() != was_pinching => Effect::Changed,
                    None => Effect::None,
                }
            }
            Message::DecoderTick(status) => {
                match self.playback.handle(playback::Message::DecoderTick(status)) {
                    playback::Effect::None => Effect::None,
                    _ => Effect::Changed,
                }
            }
            Message::SurfaceResized(size) => {
                self.surface = size;
                Effect::None
            }
            Message::TogglePlayback => {
                if let playback::Effect::PlaybackRequested { playing } =
                    self.playback.handle(playback::Message::TogglePlayback)
                {
                    self.pulse_center_icon(CenterIcon::for_request(playing), now);
                }
                self.keep_controls_alive(now);
                Effect::Changed
            }
            Message::Play => {
                self.playback.handle(playback::Message::Play);
                Effect::Changed
            }
            Message::Pause => {
                self.playback.handle(playback::Message::Pause);
                Effect::Changed
            }
            Message::Skip(direction) => {
                self.seek_relative(direction);
                self.keep_controls_alive(now);
                Effect::Changed
            }
            Message::SeekTo(target) => {
                self.playback.handle(playback::Message::SeekTo(target));
                Effect::Changed
            }
            Message::ShowControls => {
                let effect = self.visibility.handle(visibility::Message::Show, now);
                self.apply_visibility(effect, now);
                Effect::Changed
            }
            Message::HideControls => {
                let effect = self.visibility.handle(visibility::Message::Hide, now);
                self.apply_visibility(effect, now);
                // The panel may outlive hidden controls; hide always dismisses it.
                let closed = self.close_panel(now);
                if effect == visibility::Effect::None && !closed {
                    Effect::None
                } else {
                    Effect::Changed
                }
            }
            Message::OpenTrackPanel => {
                let effect = self.panel.handle(track_panel::Message::Open);
                self.apply_panel(effect, now);
                if effect == track_panel::Effect::None {
                    Effect::None
                } else {
                    Effect::Changed
                }
            }
            Message::ToggleTrackPanel => {
                let effect = self.panel.handle(track_panel::Message::Toggle);
                self.apply_panel(effect, now);
                Effect::Changed
            }
            Message::SelectTrack { kind, id } => {
                let effect = self.panel.handle(track_panel::Message::Select { kind, id });
                self.apply_panel(effect, now);
                if effect == track_panel::Effect::None {
                    Effect::None
                } else {
                    Effect::Changed
                }
            }
            Message::ToggleContentFit => {
                self.content_fit = self.content_fit.toggled();
                self.keep_controls_alive(now);
                Effect::Changed
            }
            Message::ScrubStarted => {
                let status = self.playback.status();
                let ratio = if status.has_duration() {
                    status.current_time / status.duration
                } else {
                    0.0
                };
                self.scrub_preview = Some(ratio);
                self.visibility
                    .handle(visibility::Message::Suspend(SuspendReason::Seeking), now);
                Effect::Changed
            }
            Message::ScrubMoved(ratio) => {
                if self.scrub_preview.is_none() {
                    log::debug!("Dropping scrub move without a scrub in progress");
                    return Effect::None;
                }
                if !ratio.is_finite() {
                    log::debug!("Dropping scrub move with ratio {ratio}");
                    return Effect::None;
                }
                self.scrub_preview = Some(ratio.clamp(0.0, 1.0));
                Effect::Changed
            }
            Message::ScrubReleased(ratio) => {
                if self.scrub_preview.take().is_none() {
                    log::debug!("Dropping scrub release without a scrub in progress");
                    return Effect::None;
                }
                let status = self.playback.status();
                if !ratio.is_finite() {
                    log::debug!("Scrub released with ratio {ratio}, not seeking");
                } else if !status.has_duration() {
                    log::debug!("Scrub released before the duration is known, not seeking");
                } else {
                    let target = ratio.clamp(0.0, 1.0) * status.duration;
                    self.playback.handle(playback::Message::SeekTo(target));
                }
                self.visibility
                    .handle(visibility::Message::Resume(SuspendReason::Seeking), now);
                Effect::Changed
            }
            Message::Close => {
                log::info!("Overlay dismissed by the user");
                Effect::Closed
            }
        }
    }

    /// Fires every timer that is due at `now`.
    pub fn tick(&mut self, now: Instant) -> Effect {
        if self.torn_down {
            return Effect::None;
        }
        let mut changed = false;

        if let Some(intent) = self.gestures.tick(now) {
            self.apply_intent(intent, now);
            changed = true;
        }

        let effect = self.visibility.tick(now);
        changed |= effect != visibility::Effect::None;
        self.apply_visibility(effect, now);

        changed |= self.feedback.tick(now) == seek_feedback::Effect::Expired;
        changed |= self.center_icon.tick(now);

        if changed {
            Effect::Changed
        } else {
            Effect::None
        }
    }

    /// Earliest outstanding timer deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.torn_down {
            return None;
        }
        earliest([
            self.gestures.next_deadline(),
            self.visibility.next_deadline(),
            self.feedback.next_deadline(),
            self.center_icon.next_deadline(),
        ])
    }

    fn apply_intent(&mut self, intent: GestureIntent, now: Instant) {
        log::debug!("Gesture: {intent:?}");
        match intent {
            GestureIntent::SingleTap => {
                if !self.close_panel(now) {
                    let effect = self.visibility.handle(visibility::Message::Toggle, now);
                    self.apply_visibility(effect, now);
                }
            }
            GestureIntent::DoubleTapLeft => self.double_tap(SurfaceHalf::Left, now),
            GestureIntent::DoubleTapRight => self.double_tap(SurfaceHalf::Right, now),
            GestureIntent::Pinch(scale) => {
                if self.panel.is_open() {
                    log::debug!("Ignoring pinch to {scale} while the track panel is open");
                    return;
                }
                self.content_fit = fit_after_pinch(scale, self.settings.pinch, self.content_fit);
            }
        }
    }

    fn double_tap(&mut self, half: SurfaceHalf, now: Instant) {
        let direction = SeekDirection::from(half);
        self.seek_relative(direction);
        self.feedback.trigger(direction, now);
        self.animations.set(AnimatedProperty::SeekFeedbackOpacity, 1.0);
        self.animations.animate(
            AnimatedProperty::SeekFeedbackOpacity,
            0.0,
            Curve::timing(self.feedback.lifetime()),
            now,
        );
        self.keep_controls_alive(now);
    }

    fn seek_relative(&mut self, direction: SeekDirection) {
        let delta = direction.sign() * self.settings.seek_step.value();
        self.playback.handle(playback::Message::SeekRelative(delta));
    }

    /// Restarts the inactivity countdown without revealing hidden controls.
    fn keep_controls_alive(&mut self, now: Instant) {
        if self.visibility.is_visible() {
            self.visibility.handle(visibility::Message::Show, now);
        }
    }

    fn apply_visibility(&mut self, effect: visibility::Effect, now: Instant) {
        let target = match effect {
            visibility::Effect::None => return,
            visibility::Effect::Shown => 1.0,
            visibility::Effect::Hidden => 0.0,
        };
        self.animations.animate(
            AnimatedProperty::ControlsOpacity,
            target,
            Curve::timing(Duration::from_millis(CONTROLS_FADE_MS)),
            now,
        );

        // Hiding the controls dismisses the menu.
        if effect == visibility::Effect::Hidden {
            self.close_panel(now);
        }
    }

    /// Closes the panel if it is open. Returns true when it was.
    fn close_panel(&mut self, now: Instant) -> bool {
        let effect = self.panel.handle(track_panel::Message::Close);
        self.apply_panel(effect, now);
        effect == track_panel::Effect::Closed
    }

    fn apply_panel(&mut self, effect: track_panel::Effect, now: Instant) {
        let closed = match effect {
            track_panel::Effect::None => return,
            track_panel::Effect::Opened => {
                self.visibility
                    .handle(visibility::Message::Suspend(SuspendReason::MenuOpen), now);
                false
            }
            track_panel::Effect::Closed => true,
            track_panel::Effect::Selected { kind, id, closed } => {
                self.playback
                    .handle(playback::Message::SelectTrack { kind, id });
                if !closed {
                    return;
                }
                true
            }
        };
        if closed {
            self.visibility
                .handle(visibility::Message::Resume(SuspendReason::MenuOpen), now);
        }
        self.animations.animate(
            AnimatedProperty::PanelOffset,
            self.panel.target_offset(),
            Curve::Spring {
                tension: PANEL_SPRING_TENSION,
                friction: PANEL_SPRING_FRICTION,
            },
            now,
        );
    }

    fn pulse_center_icon(&mut self, icon: CenterIcon, now: Instant) {
        self.center_icon.pulse(icon, now);
        self.animations.set(AnimatedProperty::CenterIconOpacity, 1.0);
        self.animations
            .set(AnimatedProperty::CenterIconScale, CENTER_ICON_SCALE_FROM);
        self.animations.animate(
            AnimatedProperty::CenterIconOpacity,
            0.0,
            Curve::Timing {
                duration: Duration::from_millis(CENTER_ICON_FADE_MS),
                delay: Duration::from_millis(CENTER_ICON_FADE_DELAY_MS),
            },
            now,
        );
        self.animations.animate(
            AnimatedProperty::CenterIconScale,
            CENTER_ICON_SCALE_TO,
            Curve::Spring {
                tension: CENTER_ICON_SPRING_TENSION,
                friction: CENTER_ICON_SPRING_FRICTION,
            },
            now,
        );
    }

    /// Derived state for rendering at `now`.
    #[must_use]
    pub fn view(&self, now: Instant) -> OverlayView {
        let status = self.playback.status();
        let scrubber = match self.scrub_preview {
            Some(ratio) => ScrubberView::preview(&status, ratio),
            None => ScrubberView::project(&status),
        };

        OverlayView {
            title: self.title.clone(),
            controls_visible: self.visibility.is_visible(),
            playing: status.playing,
            buffering: self.playback.is_buffering(),
            scrubber,
            scrubbing: self.scrub_preview.is_some(),
            seek_feedback: self
                .feedback
                .current()
                .map(|feedback| (feedback.direction, feedback.opacity(now))),
            center_icon: self.center_icon.icon(),
            panel_open: self.panel.is_open(),
            tracks: self.panel.tracks().to_vec(),
            selected_subtitle: self.panel.selected(TrackKind::Subtitle),
            selected_audio: self.panel.selected(TrackKind::Audio),
            content_fit: self.content_fit,
            pinch_scale: self.gestures.live_pinch_scale(),
        }
    }

    /// Releases every timer, animation and the decoder subscription.
    ///
    /// Idempotent. After teardown every message and tick is ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        self.visibility.cancel_timer();
        self.gestures.reset();
        self.feedback.clear();
        self.center_icon.clear();
        self.scrub_preview = None;
        self.animations.cancel_all();
        self.playback.unsubscribe();

        log::info!("Overlay for {} torn down", self.source);
    }

    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.playback.status()
    }

    #[must_use]
    pub fn content_fit(&self) -> ContentFit {
        self.content_fit
    }

    #[must_use]
    pub fn is_controls_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    #[must_use]
    pub fn is_auto_hide_armed(&self) -> bool {
        self.visibility.is_timer_armed()
    }

    #[must_use]
    pub fn is_suspended_by(&self, reason: SuspendReason) -> bool {
        self.visibility.is_suspended_by(reason)
    }

    #[must_use]
    pub fn is_panel_open(&self) -> bool {
        self.panel.is_open()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.playback.is_subscribed()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn source(&self) -> &Url {
        &self.source
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        self.teardown();
    }
}
