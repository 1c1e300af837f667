// SPDX-License-Identifier: MPL-2.0
//! End-to-end behavior of a mounted overlay driven through its public API.

use approx::assert_abs_diff_eq;
use iced_core::{Point, Size};
use playback_overlay::application::port::{
    AnimatedProperty, AnimationDriver, AnimationHandle, Curve, Decoder, OnTick, Subscription,
};
use playback_overlay::config::OverlaySettings;
use playback_overlay::domain::{ContentFit, PlaybackStatus, SeekDirection, Track, TrackKind};
use playback_overlay::overlay::{
    Effect, Message, MountOptions, Overlay, RawPointerEvent, SuspendReason,
};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use url::Url;

const SURFACE: Size = Size {
    width: 400.0,
    height: 800.0,
};
const HIDE_DELAY: Duration = Duration::from_millis(4000);

#[derive(Debug, Default)]
struct DecoderCalls {
    loaded: Vec<String>,
    play: usize,
    pause: usize,
    seeks: Vec<f64>,
    unsubscribed: usize,
}

struct FakeDecoder {
    calls: Arc<Mutex<DecoderCalls>>,
}

impl Decoder for FakeDecoder {
    fn load(&mut self, source: &Url) {
        self.calls.lock().unwrap().loaded.push(source.to_string());
    }
    fn play(&mut self) {
        self.calls.lock().unwrap().play += 1;
    }
    fn pause(&mut self) {
        self.calls.lock().unwrap().pause += 1;
    }
    fn current_time(&self) -> f64 {
        0.0
    }
    fn set_current_time(&mut self, seconds: f64) {
        self.calls.lock().unwrap().seeks.push(seconds);
    }
    fn duration(&self) -> f64 {
        0.0
    }
    fn buffered_position(&self) -> f64 {
        0.0
    }
    fn is_playing(&self) -> bool {
        false
    }
    fn subscribe(&mut self, _on_tick: OnTick) -> Subscription {
        let calls = Arc::clone(&self.calls);
        Subscription::new(move || calls.lock().unwrap().unsubscribed += 1)
    }
    fn tracks(&self) -> Vec<Track> {
        vec![
            Track::new(TrackKind::Subtitle, 0, "English"),
            Track::new(TrackKind::Audio, 0, "Original"),
        ]
    }
}

#[derive(Debug, Default)]
struct AnimationLog {
    targets: Vec<(AnimatedProperty, f32)>,
    live: Vec<AnimationHandle>,
}

struct RecordingAnimator {
    log: Arc<Mutex<AnimationLog>>,
    next: u64,
}

impl AnimationDriver for RecordingAnimator {
    fn set_value(&mut self, _property: AnimatedProperty, _value: f32) {}

    fn animate_to(
        &mut self,
        property: AnimatedProperty,
        target: f32,
        _curve: Curve,
        _started_at: Instant,
    ) -> AnimationHandle {
        self.next += 1;
        let handle = AnimationHandle::new(self.next);
        let mut log = self.log.lock().unwrap();
        log.targets.push((property, target));
        log.live.push(handle);
        handle
    }

    fn cancel(&mut self, handle: AnimationHandle) {
        self.log.lock().unwrap().live.retain(|h| *h != handle);
    }
}

struct Harness {
    overlay: Overlay,
    decoder: Arc<Mutex<DecoderCalls>>,
    animations: Arc<Mutex<AnimationLog>>,
    start: Instant,
}

impl Harness {
    fn mount() -> Self {
        let start = Instant::now();
        let decoder = Arc::new(Mutex::new(DecoderCalls::default()));
        let animations = Arc::new(Mutex::new(AnimationLog::default()));
        let options = MountOptions::parse("https://cdn.example/show/s01e01.m3u8", None)
            .expect("valid source");
        let (mut overlay, _ticks) = Overlay::mount(
            Box::new(FakeDecoder {
                calls: Arc::clone(&decoder),
            }),
            Box::new(RecordingAnimator {
                log: Arc::clone(&animations),
                next: 0,
            }),
            options,
            OverlaySettings::default(),
            start,
        );
        overlay.handle(Message::SurfaceResized(SURFACE), start);
        Self {
            overlay,
            decoder,
            animations,
            start,
        }
    }

    fn at(&self, millis: u64) -> Instant {
        self.start + Duration::from_millis(millis)
    }

    fn report(&mut self, current_time: f64, duration: f64, millis: u64) {
        let now = self.at(millis);
        self.overlay.handle(
            Message::DecoderTick(PlaybackStatus::new(current_time, duration, current_time, true)),
            now,
        );
    }

    fn tap(&mut self, x: f32, millis: u64) -> Effect {
        let now = self.at(millis);
        self.overlay.handle(
            Message::Pointer(RawPointerEvent::Tap {
                position: Point::new(x, 400.0),
            }),
            now,
        )
    }

    fn pinch(&mut self, scale: f32, millis: u64) {
        let now = self.at(millis);
        self.overlay
            .handle(Message::Pointer(RawPointerEvent::PinchStarted), now);
        self.overlay
            .handle(Message::Pointer(RawPointerEvent::PinchEnded { scale }), now);
    }

    fn tick(&mut self, millis: u64) -> Effect {
        let now = self.at(millis);
        self.overlay.tick(now)
    }
}

#[test]
fn mount_loads_source_and_requests_playback() {
    let harness = Harness::mount();
    let calls = harness.decoder.lock().unwrap();
    assert_eq!(calls.loaded, vec!["https://cdn.example/show/s01e01.m3u8"]);
    assert_eq!((calls.play, calls.pause), (1, 0));
    assert!(harness.overlay.is_subscribed());
    assert!(harness.overlay.view(harness.start).buffering);
}

#[test]
fn seek_within_range_lands_exactly_and_outside_is_clamped() {
    let mut harness = Harness::mount();
    harness.report(10.0, 120.0, 0);

    for target in [0.0, 37.5, 120.0] {
        harness.overlay.handle(Message::SeekTo(target), harness.start);
        assert_abs_diff_eq!(harness.overlay.status().current_time, target);
    }

    harness.overlay.handle(Message::SeekTo(-5.0), harness.start);
    assert_abs_diff_eq!(harness.overlay.status().current_time, 0.0);
    harness.overlay.handle(Message::SeekTo(500.0), harness.start);
    assert_abs_diff_eq!(harness.overlay.status().current_time, 120.0);

    assert_eq!(
        harness.decoder.lock().unwrap().seeks,
        vec![0.0, 37.5, 120.0, 0.0, 120.0]
    );
}

#[test]
fn double_taps_skip_ten_seconds_and_clamp() {
    let mut harness = Harness::mount();
    harness.report(5.0, 60.0, 0);

    harness.tap(50.0, 10);
    harness.tap(60.0, 150);
    assert_abs_diff_eq!(harness.overlay.status().current_time, 0.0);

    harness.report(30.0, 60.0, 200);
    harness.tap(350.0, 300);
    harness.tap(340.0, 400);
    assert_abs_diff_eq!(harness.overlay.status().current_time, 40.0);

    harness.report(55.0, 60.0, 500);
    harness.tap(350.0, 600);
    harness.tap(350.0, 700);
    assert_abs_diff_eq!(harness.overlay.status().current_time, 60.0);

    let view = harness.overlay.view(harness.at(700));
    assert_eq!(
        view.seek_feedback.map(|(direction, _)| direction),
        Some(SeekDirection::Forward)
    );
}

#[test]
fn seek_feedback_fades_and_expires() {
    let mut harness = Harness::mount();
    harness.report(30.0, 60.0, 0);
    harness.tap(50.0, 0);
    harness.tap(50.0, 100);

    let (_, opacity) = harness
        .overlay
        .view(harness.at(350))
        .seek_feedback
        .expect("feedback visible");
    assert_abs_diff_eq!(opacity, 0.5, epsilon = 1e-3);

    assert_eq!(harness.tick(600), Effect::Changed);
    assert!(harness.overlay.view(harness.at(600)).seek_feedback.is_none());
}

#[test]
fn controls_hide_after_inactivity() {
    let mut harness = Harness::mount();

    assert_eq!(harness.tick(3999), Effect::None);
    assert!(harness.overlay.is_controls_visible());
    assert_eq!(harness.tick(4000), Effect::Changed);
    assert!(!harness.overlay.is_controls_visible());

    let log = harness.animations.lock().unwrap();
    assert_eq!(
        log.targets.last(),
        Some(&(AnimatedProperty::ControlsOpacity, 0.0))
    );
}

#[test]
fn suspend_before_fire_prevents_hide() {
    let mut harness = Harness::mount();
    let now = harness.at(1000);
    harness.overlay.handle(Message::ScrubStarted, now);

    harness.tick(10_000);
    assert!(harness.overlay.is_controls_visible());
    assert!(harness.overlay.is_suspended_by(SuspendReason::Seeking));
}

#[test]
fn panel_suspends_auto_hide_and_rearms_on_close() {
    let mut harness = Harness::mount();
    let opened_at = harness.at(500);
    harness.overlay.handle(Message::ToggleTrackPanel, opened_at);
    assert!(harness.overlay.is_suspended_by(SuspendReason::MenuOpen));
    assert!(!harness.overlay.is_auto_hide_armed());

    harness.tick(20_000);
    assert!(harness.overlay.is_controls_visible());

    let closed_at = harness.at(21_000);
    harness.overlay.handle(Message::ToggleTrackPanel, closed_at);
    assert!(!harness.overlay.is_suspended_by(SuspendReason::MenuOpen));
    assert_eq!(
        harness.overlay.next_deadline(),
        Some(closed_at + HIDE_DELAY)
    );
}

#[test]
fn single_tap_with_panel_open_only_closes_the_panel() {
    let mut harness = Harness::mount();
    harness.overlay.handle(Message::ToggleTrackPanel, harness.start);

    harness.tap(100.0, 0);
    harness.tick(300);
    assert!(!harness.overlay.is_panel_open());
    assert!(harness.overlay.is_controls_visible());
    assert_eq!(harness.overlay.next_deadline(), Some(harness.at(300) + HIDE_DELAY));
}

#[test]
fn hiding_controls_closes_the_panel() {
    let mut harness = Harness::mount();
    harness.overlay.handle(Message::ToggleTrackPanel, harness.start);

    let effect = harness.overlay.handle(Message::HideControls, harness.at(200));
    assert_eq!(effect, Effect::Changed);
    assert!(!harness.overlay.is_controls_visible());
    assert!(!harness.overlay.is_panel_open());
    assert!(!harness.overlay.is_suspended_by(SuspendReason::MenuOpen));
    assert!(!harness.overlay.is_auto_hide_armed());

    let log = harness.animations.lock().unwrap();
    assert_eq!(
        log.targets.last(),
        Some(&(AnimatedProperty::PanelOffset, 600.0))
    );
}

#[test]
fn hiding_already_hidden_controls_still_closes_the_panel() {
    let mut harness = Harness::mount();
    harness.overlay.handle(Message::HideControls, harness.at(100));
    assert!(!harness.overlay.is_controls_visible());

    harness.overlay.handle(Message::ToggleTrackPanel, harness.at(200));
    assert!(harness.overlay.is_panel_open());
    assert!(harness.overlay.is_suspended_by(SuspendReason::MenuOpen));

    let effect = harness.overlay.handle(Message::HideControls, harness.at(300));
    assert_eq!(effect, Effect::Changed);
    assert!(!harness.overlay.is_panel_open());
    assert!(!harness.overlay.is_suspended_by(SuspendReason::MenuOpen));
    assert!(!harness.overlay.is_controls_visible());
    assert!(!harness.overlay.is_auto_hide_armed());

    let again = harness.overlay.handle(Message::HideControls, harness.at(400));
    assert_eq!(again, Effect::None);
}

#[test]
fn open_track_panel_is_idempotent() {
    let mut harness = Harness::mount();
    let opened = harness.overlay.handle(Message::OpenTrackPanel, harness.at(100));
    assert_eq!(opened, Effect::Changed);
    assert!(harness.overlay.is_panel_open());
    assert!(!harness.overlay.is_auto_hide_armed());

    let again = harness.overlay.handle(Message::OpenTrackPanel, harness.at(200));
    assert_eq!(again, Effect::None);
    assert!(harness.overlay.is_panel_open());
}

#[test]
fn scrub_release_without_duration_keeps_position() {
    let mut harness = Harness::mount();
    harness.report(42.0, 0.0, 100);

    harness.overlay.handle(Message::ScrubStarted, harness.at(200));
    assert!(harness.overlay.is_suspended_by(SuspendReason::Seeking));
    harness
        .overlay
        .handle(Message::ScrubReleased(0.9), harness.at(300));

    assert_abs_diff_eq!(harness.overlay.status().current_time, 42.0);
    assert!(harness.decoder.lock().unwrap().seeks.is_empty());
    assert!(!harness.overlay.is_suspended_by(SuspendReason::Seeking));
    assert!(harness.overlay.is_auto_hide_armed());
}

#[test]
fn pinch_switches_fit_only_beyond_thresholds() {
    let mut harness = Harness::mount();

    harness.pinch(1.3, 0);
    assert_eq!(harness.overlay.content_fit(), ContentFit::Cover);

    harness.pinch(1.0, 100);
    assert_eq!(harness.overlay.content_fit(), ContentFit::Cover);

    harness.pinch(0.5, 200);
    assert_eq!(harness.overlay.content_fit(), ContentFit::Contain);

    harness.pinch(1.0, 300);
    assert_eq!(harness.overlay.content_fit(), ContentFit::Contain);
}

#[test]
fn progress_is_zero_without_duration() {
    let mut harness = Harness::mount();
    harness.report(42.0, 0.0, 0);

    let view = harness.overlay.view(harness.start);
    assert_abs_diff_eq!(view.scrubber.progress_percent, 0.0);
    assert!(!view.scrubber.progress_percent.is_nan());
    assert_eq!(view.scrubber.elapsed_label, "0:42");
}

#[test]
fn taps_400ms_apart_are_two_single_taps() {
    let mut harness = Harness::mount();
    harness.report(30.0, 60.0, 0);

    harness.tap(100.0, 0);
    harness.tick(300);
    assert!(!harness.overlay.is_controls_visible());

    harness.tap(100.0, 400);
    harness.tick(700);
    assert!(harness.overlay.is_controls_visible());

    assert!(harness.decoder.lock().unwrap().seeks.is_empty());
    assert_abs_diff_eq!(harness.overlay.status().current_time, 30.0);
}

#[test]
fn teardown_releases_everything_once() {
    let mut harness = Harness::mount();
    harness.tap(100.0, 0);
    harness.overlay.handle(Message::TogglePlayback, harness.start);
    harness.overlay.handle(Message::ToggleTrackPanel, harness.start);
    assert!(!harness.animations.lock().unwrap().live.is_empty());

    harness.overlay.teardown();
    harness.overlay.teardown();

    assert!(harness.animations.lock().unwrap().live.is_empty());
    assert_eq!(harness.overlay.next_deadline(), None);
    assert_eq!(harness.tick(60_000), Effect::None);

    let Harness { overlay, decoder, .. } = harness;
    drop(overlay);
    assert_eq!(decoder.lock().unwrap().unsubscribed, 1);
}

#[test]
fn dropping_without_teardown_still_unsubscribes() {
    let harness = Harness::mount();
    let Harness { overlay, decoder, .. } = harness;
    drop(overlay);
    assert_eq!(decoder.lock().unwrap().unsubscribed, 1);
}
