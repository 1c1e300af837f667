// SPDX-License-Identifier: MPL-2.0
//! Bookkeeping around the host's [`AnimationDriver`].
//!
//! Holds at most one running handle per property. Starting a new animation
//! on a property cancels the previous one first.

use crate::application::port::{AnimatedProperty, AnimationDriver, AnimationHandle, Curve};
use std::collections::HashMap;
use std::time::Instant;

pub struct Animations {
    driver: Box<dyn AnimationDriver>,
    running: HashMap<AnimatedProperty, AnimationHandle>,
}

impl Animations {
    #[must_use]
    pub fn new(driver: Box<dyn AnimationDriver>) -> Self {
        Self {
            driver,
            running: HashMap::new(),
        }
    }

    /// Animates `property` to `target`, replacing any running animation on it.
    pub fn animate(
        &mut self,
        property: AnimatedProperty,
        target: f32,
        curve: Curve,
        now: Instant,
    ) {
        self.cancel(property);
        let handle = self.driver.animate_to(property, target, curve, now);
        self.running.insert(property, handle);
    }

    /// Jumps `property` to `value`, cancelling any running animation on it.
    pub fn set(&mut self, property: AnimatedProperty, value: f32) {
        self.cancel(property);
        self.driver.set_value(property, value);
    }

    pub fn cancel(&mut self, property: AnimatedProperty) {
        if let Some(handle) = self.running.remove(&property) {
            self.driver.cancel(handle);
        }
    }

    /// Cancels every outstanding handle.
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.running.drain() {
            self.driver.cancel(handle);
        }
    }

    #[must_use]
    pub fn handle(&self, property: AnimatedProperty) -> Option<AnimationHandle> {
        self.running.get(&property).copied()
    }

    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.running.len()
    }
}

impl std::fmt::Debug for Animations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animations")
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}
