// SPDX-License-Identifier: MPL-2.0
//! Animation driver port definition.
//!
//! The overlay never interpolates visuals itself. It asks an
//! [`AnimationDriver`] to move a named property towards a target along a
//! curve and keeps the returned handle so the animation can be cancelled.

use std::time::{Duration, Instant};

/// Visual properties the overlay animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    /// Opacity of the top and bottom control bars.
    ControlsOpacity,
    /// Vertical offset of the track selection panel.
    PanelOffset,
    /// Opacity of the double-tap seek indicator.
    SeekFeedbackOpacity,
    /// Opacity of the play/pause pulse.
    CenterIconOpacity,
    /// Scale of the play/pause pulse.
    CenterIconScale,
}

/// Interpolation curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// Linear interpolation over `duration`, starting after `delay`.
    Timing { duration: Duration, delay: Duration },
    /// Damped spring with unit mass.
    Spring { tension: f32, friction: f32 },
}

impl Curve {
    /// Timing curve without delay.
    #[must_use]
    pub fn timing(duration: Duration) -> Self {
        Self::Timing {
            duration,
            delay: Duration::ZERO,
        }
    }
}

/// Cancellable handle to a running animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

impl AnimationHandle {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Port for the host's animation runtime.
///
/// Cancelling a handle that already finished, or was already cancelled,
/// must be a no-op.
pub trait AnimationDriver: Send {
    /// Jumps a property to a value without animating.
    fn set_value(&mut self, property: AnimatedProperty, value: f32);

    /// Starts animating a property from its current value to `target`.
    fn animate_to(
        &mut self,
        property: AnimatedProperty,
        target: f32,
        curve: Curve,
        started_at: Instant,
    ) -> AnimationHandle;

    /// Stops a running animation, leaving the property where it is.
    fn cancel(&mut self, handle: AnimationHandle);
}
