// SPDX-License-Identifier: MPL-2.0
//! Gesture intents and the display modes they drive.

/// The single intent a physical interaction resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureIntent {
    /// One tap with no follow-up inside the double-tap window.
    SingleTap,
    /// Two taps on the left half of the surface.
    DoubleTapLeft,
    /// Two taps on the right half of the surface.
    DoubleTapRight,
    /// A finished pinch with its final scale relative to the start.
    Pinch(f32),
}

impl GestureIntent {
    /// Builds the double-tap intent for the half that was tapped.
    #[must_use]
    pub fn double_tap(half: SurfaceHalf) -> Self {
        match half {
            SurfaceHalf::Left => Self::DoubleTapLeft,
            SurfaceHalf::Right => Self::DoubleTapRight,
        }
    }
}

/// Horizontal half of the gesture surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceHalf {
    Left,
    Right,
}

impl SurfaceHalf {
    /// Classifies an x coordinate against the surface midpoint.
    ///
    /// The midpoint itself belongs to the right half.
    #[must_use]
    pub fn of(x: f32, width: f32) -> Self {
        if x < width / 2.0 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// Direction of a skip seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekDirection {
    Forward,
    Backward,
}

impl SeekDirection {
    /// Sign applied to the skip step.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

impl From<SurfaceHalf> for SeekDirection {
    fn from(half: SurfaceHalf) -> Self {
        match half {
            SurfaceHalf::Left => Self::Backward,
            SurfaceHalf::Right => Self::Forward,
        }
    }
}

/// How the video frame is scaled into its viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentFit {
    /// Letterboxed: the whole frame is visible.
    #[default]
    Contain,
    /// Cropped to fill the viewport.
    Cover,
}

impl ContentFit {
    /// Returns the other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Contain => Self::Cover,
            Self::Cover => Self::Contain,
        }
    }
}
