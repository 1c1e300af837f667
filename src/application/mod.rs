// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports the overlay engine depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The overlay engine only talks to the host through these ports
//!
//! # Example
//!
//! ```ignore
//! use playback_overlay::application::port::{AnimationDriver, Decoder};
//!
//! // The host implements the port traits
//! struct ExoDecoder { /* ... */ }
//! impl Decoder for ExoDecoder { /* ... */ }
//!
//! // The overlay consumes them as trait objects
//! let (overlay, ticks) = Overlay::mount(Box::new(decoder), Box::new(animator), options, settings, now);
//! ```

pub mod port;
