// SPDX-License-Identifier: MPL-2.0
//! Playback overlay engine.
//!
//! Each sub-component has its own state, messages and effects. The
//! [`component::Overlay`] orchestrator routes host input between them and
//! is the only owner of the decoder and the animation driver.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── gesture       - Tap/double-tap/pinch disambiguation
//!     ├── playback      - Decoder mirror, play/pause/seek
//!     ├── scrubber      - Progress and time label projection
//!     ├── visibility    - Auto-hide with suspend reasons
//!     ├── seek_feedback - Double-tap skip indicator
//!     ├── center_icon   - Play/pause pulse
//!     ├── track_panel   - Subtitle/audio selection sheet
//!     ├── animations    - Handles held on the animation driver
//!     └── timer         - Cancellable deadlines
//! ```

pub mod animations;
pub mod center_icon;
pub mod component;
pub mod gesture;
pub mod playback;
pub mod scrubber;
pub mod seek_feedback;
pub mod timer;
pub mod track_panel;
pub mod visibility;

pub use component::{Effect, Message, MountOptions, Overlay, OverlayView};
pub use gesture::{GestureDisambiguator, RawPointerEvent};
pub use scrubber::ScrubberView;
pub use timer::ScopedTimer;
pub use visibility::SuspendReason;
