// SPDX-License-Identifier: MPL-2.0
//! Display surface port.
//!
//! The viewport controller never draws. It hands a rescaled bitmap to a
//! surface and reads back the visible extent and scroll position.

use crate::domain::image::RenderedBitmap;

/// Visible area of the scrollable container, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Scroll position of the container's top-left corner within the content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffsets {
    pub x: f32,
    pub y: f32,
}

impl ScrollOffsets {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

pub trait DisplaySurface {
    /// Replaces the displayed bitmap; the surface takes ownership of its pixels.
    fn render(&mut self, bitmap: RenderedBitmap);

    fn viewport_size(&self) -> ViewportSize;

    fn scroll_offsets(&self) -> ScrollOffsets;

    /// Moves the scroll position. Implementations clamp to their content.
    fn set_scroll_offsets(&mut self, offsets: ScrollOffsets);
}
