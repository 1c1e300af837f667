// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Float assertions go through `approx` so interpolated opacities, offsets
//! and percentages are compared with a tolerance instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;
