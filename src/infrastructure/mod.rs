// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. Hosts with their own media and animation runtimes
//! replace them; the demo binary and the tests use them as-is.
//!
//! # Available Adapters
//!
//! - [`animation`]: Time-sampled interpolation (implements [`AnimationDriver`])
//! - [`simulated`]: Clock-driven fake media source (implements [`Decoder`])
//!
//! [`AnimationDriver`]: crate::application::port::AnimationDriver
//! [`Decoder`]: crate::application::port::Decoder

pub mod animation;
pub mod simulated;

// Re-export main types for convenience
pub use animation::SoftwareAnimator;
pub use simulated::SimulatedDecoder;
