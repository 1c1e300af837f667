// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-event overlay paths.
//!
//! Measures:
//! - Tap and pinch classification in the gesture disambiguator
//! - Scrubber projection from a decoder tick

use criterion::{criterion_group, criterion_main, Criterion};
use iced_core::{Point, Size};
use playback_overlay::domain::{DoubleTapWindow, PlaybackStatus};
use playback_overlay::overlay::{GestureDisambiguator, RawPointerEvent, ScrubberView};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn surface() -> Size {
    Size::new(1280.0, 720.0)
}

/// Benchmark a double tap followed by a full pinch sequence.
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_classification");

    let surface = surface();

    group.bench_function("double_tap", |b| {
        let start = Instant::now();
        b.iter(|| {
            let mut gestures = GestureDisambiguator::new(DoubleTapWindow::default());
            let tap = RawPointerEvent::Tap {
                position: Point::new(1000.0, 360.0),
            };
            black_box(gestures.classify(tap, surface, start));
            black_box(gestures.classify(tap, surface, start + Duration::from_millis(120)));
        });
    });

    group.bench_function("pinch_sequence", |b| {
        let now = Instant::now();
        b.iter(|| {
            let mut gestures = GestureDisambiguator::new(DoubleTapWindow::default());
            gestures.classify(RawPointerEvent::PinchStarted, surface, now);
            for step in 0..16 {
                let scale = 1.0 + step as f32 * 0.025;
                gestures.classify(RawPointerEvent::PinchChanged { scale }, surface, now);
            }
            black_box(gestures.classify(RawPointerEvent::PinchEnded { scale: 1.4 }, surface, now));
        });
    });

    group.finish();
}

/// Benchmark projecting a decoder tick onto the scrubber.
fn bench_scrubber(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_classification");
    let status = PlaybackStatus::new(754.2, 5400.0, 812.0, true);

    group.bench_function("scrubber_projection", |b| {
        b.iter(|| black_box(ScrubberView::project(black_box(&status))));
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_scrubber);
criterion_main!(benches);
