// SPDX-License-Identifier: MPL-2.0
//! Software animation driver.
//!
//! Animations are evaluated lazily: nothing runs in the background, the
//! current value of a property is computed from the elapsed time whenever
//! [`SoftwareAnimator::sample`] is called.

use crate::application::port::{AnimatedProperty, AnimationDriver, AnimationHandle, Curve};
use std::collections::HashMap;
use std::time::Instant;

/// Remaining amplitude, relative to the start, at which a spring is considered at rest.
const SPRING_REST_RATIO: f32 = 1e-3;

#[derive(Debug, Clone, Copy)]
struct Running {
    handle: AnimationHandle,
    from: f32,
    to: f32,
    curve: Curve,
    started_at: Instant,
}

impl Running {
    /// Value at `now`, and whether the animation has finished.
    fn evaluate(&self, now: Instant) -> (f32, bool) {
        let elapsed = now.saturating_duration_since(self.started_at);
        match self.curve {
            Curve::Timing { duration, delay } => {
                let Some(active) = elapsed.checked_sub(delay) else {
                    return (self.from, false);
                };
                if duration.is_zero() || active >= duration {
                    return (self.to, true);
                }
                let progress = active.as_secs_f32() / duration.as_secs_f32();
                (self.from + (self.to - self.from) * progress, false)
            }
            Curve::Spring { tension, friction } => {
                let spring = Spring::new(tension, friction);
                let t = elapsed.as_secs_f32();
                if t >= spring.settle_time() {
                    (self.to, true)
                } else {
                    (self.to + (self.from - self.to) * spring.displacement(t), false)
                }
            }
        }
    }
}

/// Unit-mass damped spring released from rest.
#[derive(Debug, Clone, Copy)]
struct Spring {
    omega: f32,
    zeta: f32,
}

impl Spring {
    fn new(tension: f32, friction: f32) -> Self {
        let tension = tension.max(f32::EPSILON);
        let omega = tension.sqrt();
        Self {
            omega,
            zeta: friction.max(0.0) / (2.0 * omega),
        }
    }

    /// Normalized displacement: 1.0 at release, 0.0 at rest.
    fn displacement(self, t: f32) -> f32 {
        let Self { omega, zeta } = self;
        if (zeta - 1.0).abs() < 1e-3 {
            (-omega * t).exp() * (1.0 + omega * t)
        } else if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            (-zeta * omega * t).exp()
                * ((damped * t).cos() + (zeta * omega / damped) * (damped * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Seconds until the envelope decays below the rest ratio.
    fn settle_time(self) -> f32 {
        let Self { omega, zeta } = self;
        let decay = if zeta <= 1.0 {
            zeta * omega
        } else {
            omega * (zeta - (zeta * zeta - 1.0).sqrt())
        };
        if decay <= 0.0 {
            // Undamped springs never settle; snap after a while instead of oscillating forever.
            return 10.0;
        }
        -SPRING_REST_RATIO.ln() / decay
    }
}

/// [`AnimationDriver`] that interpolates values from elapsed time.
#[derive(Debug, Default)]
pub struct SoftwareAnimator {
    values: HashMap<AnimatedProperty, f32>,
    running: HashMap<AnimatedProperty, Running>,
    next_handle: u64,
}

impl SoftwareAnimator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a property. Unset properties read as `0.0`.
    pub fn sample(&mut self, property: AnimatedProperty, now: Instant) -> f32 {
        if let Some(running) = self.running.get(&property).copied() {
            let (value, finished) = running.evaluate(now);
            self.values.insert(property, value);
            if finished {
                self.running.remove(&property);
            }
            return value;
        }
        self.values.get(&property).copied().unwrap_or(0.0)
    }

    /// Returns true while a property has an unfinished animation.
    #[must_use]
    pub fn is_animating(&self, property: AnimatedProperty) -> bool {
        self.running.contains_key(&property)
    }
}

impl AnimationDriver for SoftwareAnimator {
    fn set_value(&mut self, property: AnimatedProperty, value: f32) {
        self.running.remove(&property);
        self.values.insert(property, value);
    }

    fn animate_to(
        &mut self,
        property: AnimatedProperty,
        target: f32,
        curve: Curve,
        started_at: Instant,
    ) -> AnimationHandle {
        let from = self.sample(property, started_at);
        self.next_handle += 1;
        let handle = AnimationHandle::new(self.next_handle);
        self.running.insert(
            property,
            Running {
                handle,
                from,
                to: target,
                curve,
                started_at,
            },
        );
        handle
    }

    fn cancel(&mut self, handle: AnimationHandle) {
        self.running.retain(|_, running| running.handle != handle);
    }
}
