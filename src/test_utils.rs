// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Scale factors and scroll offsets are floats; compare them with the
//! `approx` macros instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;
