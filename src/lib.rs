// SPDX-License-Identifier: MPL-2.0
//! `playback_overlay` is the interaction engine of a touch video player's
//! control overlay.
//!
//! It tracks playback position reported by an external decoder, auto-hides
//! the controls, turns touch input into single-tap, double-tap-seek and
//! pinch-to-fit intents, and drives the seek feedback and track selection
//! panel. Decoding and rendering stay with the host, behind the
//! [`application::port::Decoder`] and [`application::port::AnimationDriver`]
//! traits.

#![doc(html_root_url = "https://docs.rs/playback_overlay/0.3.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod overlay;
pub mod runtime;

#[cfg(test)]
pub(crate) mod test_utils;
