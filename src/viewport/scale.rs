// SPDX-License-Identifier: MPL-2.0
//! Scale factor, zoom direction and display mode.

use crate::config::{
    DEFAULT_SCALE_FACTOR, MAX_SCALE_FACTOR, MIN_SCALE_FACTOR, ZOOM_FACTOR_IN, ZOOM_FACTOR_OUT,
};

/// How the display scale is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Recomputed from the container on every resize.
    Fit,
    /// Exactly one image pixel per device pixel.
    #[default]
    Literal,
    /// Set by explicit zoom steps.
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Multiplier applied by one step in this direction.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            ZoomDirection::In => ZOOM_FACTOR_IN,
            ZoomDirection::Out => ZOOM_FACTOR_OUT,
        }
    }
}

/// Ratio of displayed pixels to image pixels.
///
/// Zoom steps always land inside `[MIN_SCALE_FACTOR, MAX_SCALE_FACTOR]`.
/// Fit-derived factors are taken as computed and may lie outside that range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    pub const LITERAL: Self = Self(DEFAULT_SCALE_FACTOR);

    /// Creates a scale factor clamped to the zoom range.
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        Self(value.clamp(MIN_SCALE_FACTOR, MAX_SCALE_FACTOR))
    }

    /// Creates a scale factor without clamping. Non-finite or non-positive
    /// values fall back to [`ScaleFactor::LITERAL`].
    #[must_use]
    pub fn unclamped(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self::LITERAL
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_SCALE_FACTOR
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_SCALE_FACTOR
    }

    /// One zoom step from this factor, clamped to the zoom range.
    #[must_use]
    pub fn step(self, direction: ZoomDirection) -> Self {
        Self::clamped(self.0 * direction.factor())
    }

    /// Rounded percentage for display (1.0 → 100).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_percent(self) -> i64 {
        (self.0 * 100.0).round() as i64
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::LITERAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn clamped_respects_bounds() {
        assert_eq!(ScaleFactor::clamped(100.0).value(), MAX_SCALE_FACTOR);
        assert_eq!(ScaleFactor::clamped(0.0001).value(), MIN_SCALE_FACTOR);
        assert_eq!(ScaleFactor::clamped(2.0).value(), 2.0);
    }

    #[test]
    fn unclamped_keeps_out_of_range_values() {
        assert_eq!(ScaleFactor::unclamped(25.0).value(), 25.0);
        assert_eq!(ScaleFactor::unclamped(0.01).value(), 0.01);
    }

    #[test]
    fn unclamped_rejects_degenerate_values() {
        assert_eq!(ScaleFactor::unclamped(f64::NAN), ScaleFactor::LITERAL);
        assert_eq!(ScaleFactor::unclamped(0.0), ScaleFactor::LITERAL);
        assert_eq!(ScaleFactor::unclamped(f64::INFINITY), ScaleFactor::LITERAL);
    }

    #[test]
    fn step_in_then_out_returns_to_start() {
        let scale = ScaleFactor::LITERAL
            .step(ZoomDirection::In)
            .step(ZoomDirection::Out);
        assert_abs_diff_eq!(scale.value(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn step_from_out_of_range_fit_value_is_clamped() {
        let scale = ScaleFactor::unclamped(40.0).step(ZoomDirection::Out);
        assert!(scale.is_max());
    }

    #[test]
    fn percent_rounds() {
        assert_eq!(ScaleFactor::clamped(1.25).as_percent(), 125);
        assert_eq!(ScaleFactor::clamped(0.8 * 0.8).as_percent(), 64);
    }

    #[test]
    fn default_mode_is_literal() {
        assert_eq!(DisplayMode::default(), DisplayMode::Literal);
    }
}
