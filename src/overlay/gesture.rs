// SPDX-License-Identifier: MPL-2.0
//! Gesture disambiguation.
//!
//! Turns raw pointer primitives into at most one [`GestureIntent`] per
//! physical interaction:
//!
//! - A first tap is held pending for the double-tap window. A second tap on
//!   the same half inside the window yields `DoubleTapLeft`/`DoubleTapRight`.
//!   Otherwise the pending tap resolves to `SingleTap`, either from
//!   [`GestureDisambiguator::tick`] once the window elapses or when the next
//!   tap shows up too late or on the other half.
//! - Pinches are tracked independently of the tap window. Starting a pinch
//!   discards the pending tap and taps are ignored until the pinch ends.
//! - Malformed input is logged and dropped. Classification never fails.

use super::timer::ScopedTimer;
use crate::domain::{ContentFit, DoubleTapWindow, GestureIntent, PinchThresholds, SurfaceHalf};
use iced_core::{Point, Size};
use std::time::Instant;

/// Pointer primitives reported by the host's touch surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawPointerEvent {
    /// A single finger tap at `position`, in surface coordinates.
    Tap { position: Point },
    /// Two fingers went down.
    PinchStarted,
    /// Live scale relative to the pinch start.
    PinchChanged { scale: f32 },
    /// Fingers lifted with this final scale.
    PinchEnded { scale: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingTap {
    half: SurfaceHalf,
    at: Instant,
}

/// Classifier state: the pending tap, its window timer and the live pinch.
#[derive(Debug, Clone, Default)]
pub struct GestureDisambiguator {
    window: DoubleTapWindow,
    pending: Option<PendingTap>,
    timer: ScopedTimer,
    pinch_scale: Option<f32>,
}

impl GestureDisambiguator {
    #[must_use]
    pub fn new(window: DoubleTapWindow) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    /// Feeds one raw event. Returns the intent it completes, if any.
    pub fn classify(
        &mut self,
        event: RawPointerEvent,
        surface: Size,
        now: Instant,
    ) -> Option<GestureIntent> {
        match event {
            RawPointerEvent::Tap { position } => self.tap(position, surface, now),
            RawPointerEvent::PinchStarted => {
                if self.pending.take().is_some() {
                    self.timer.cancel();
                    log::trace!("Pinch started, pending tap discarded");
                }
                self.pinch_scale = Some(1.0);
                None
            }
            RawPointerEvent::PinchChanged { scale } => {
                if self.pinch_scale.is_none() {
                    log::debug!("Dropping pinch update without a pinch in progress");
                } else if !is_valid_scale(scale) {
                    log::debug!("Dropping pinch update with invalid scale {scale}");
                } else {
                    self.pinch_scale = Some(scale);
                }
                None
            }
            RawPointerEvent::PinchEnded { scale } => {
                if self.pinch_scale.take().is_none() {
                    log::debug!("Dropping pinch end without a pinch in progress");
                    return None;
                }
                if !is_valid_scale(scale) {
                    log::debug!("Dropping pinch end with invalid scale {scale}");
                    return None;
                }
                Some(GestureIntent::Pinch(scale))
            }
        }
    }

    fn tap(&mut self, position: Point, surface: Size, now: Instant) -> Option<GestureIntent> {
        if self.pinch_scale.is_some() {
            log::debug!("Dropping tap during pinch");
            return None;
        }
        if !is_inside(position, surface) {
            log::debug!(
                "Dropping tap at ({}, {}) outside surface {}x{}",
                position.x,
                position.y,
                surface.width,
                surface.height
            );
            return None;
        }

        let half = SurfaceHalf::of(position.x, surface.width);
        let window = self.window.as_duration();

        match self.pending.take() {
            Some(first)
                if first.half == half && now.saturating_duration_since(first.at) < window =>
            {
                self.timer.cancel();
                Some(GestureIntent::double_tap(half))
            }
            Some(_) => {
                // Too late or on the other half: the first tap stands alone
                // and this one opens a new window.
                self.pend(half, now);
                Some(GestureIntent::SingleTap)
            }
            None => {
                self.pend(half, now);
                None
            }
        }
    }

    fn pend(&mut self, half: SurfaceHalf, now: Instant) {
        self.pending = Some(PendingTap { half, at: now });
        self.timer.arm(now, self.window.as_duration());
    }

    /// Resolves a pending tap whose window has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<GestureIntent> {
        if self.timer.fire(now) && self.pending.take().is_some() {
            return Some(GestureIntent::SingleTap);
        }
        None
    }

    /// Forgets any pending tap and pinch. Used at teardown.
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.pending = None;
        self.pinch_scale = None;
    }

    #[must_use]
    pub fn has_pending_tap(&self) -> bool {
        self.pending.is_some()
    }

    /// Scale of the pinch in progress, for live preview.
    #[must_use]
    pub fn live_pinch_scale(&self) -> Option<f32> {
        self.pinch_scale
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }
}

/// Content fit after a pinch ending at `scale`.
///
/// Strictly above the cover threshold switches to cover, strictly below
/// the contain threshold switches to contain. Anything in between keeps
/// the current mode.
#[must_use]
pub fn fit_after_pinch(scale: f32, thresholds: PinchThresholds, current: ContentFit) -> ContentFit {
    if scale > thresholds.cover() {
        ContentFit::Cover
    } else if scale < thresholds.contain() {
        ContentFit::Contain
    } else {
        current
    }
}

fn is_valid_scale(scale: f32) -> bool {
    scale.is_finite() && scale > 0.0
}

fn is_inside(position: Point, surface: Size) -> bool {
    position.x.is_finite()
        && position.y.is_finite()
        && surface.width > 0.0
        && surface.height > 0.0
        && (0.0..=surface.width).contains(&position.x)
        && (0.0..=surface.height).contains(&position.y)
}
