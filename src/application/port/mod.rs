// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that the host (or the adapters in
//! [`crate::infrastructure`]) implement. These traits use only domain types,
//! ensuring the overlay engine remains independent of any media or
//! animation runtime.
//!
//! # Available Ports
//!
//! - [`decoder`]: Media decoder capability (play, pause, seek, tick subscription)
//! - [`animation`]: Animation driver (animate a property towards a target)
//!
//! # Design Notes
//!
//! - Traits are `Send` so the engine can live on a tokio task
//! - No `async fn` - calls are fire-and-forget intents; results come back
//!   through decoder ticks
//! - No method returns an error: decoder failures surface as a stalled
//!   (`playing == false`) status

pub mod animation;
pub mod decoder;

// Re-export main types for convenience
pub use animation::{AnimatedProperty, AnimationDriver, AnimationHandle, Curve};
pub use decoder::{Decoder, OnTick, Subscription};
