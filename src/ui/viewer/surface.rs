// SPDX-License-Identifier: MPL-2.0
//! Display surface backed by an iced image handle inside a scrollable.
//!
//! The controller writes scroll positions synchronously; the widget can only
//! be scrolled through a `Task`. Requested positions are therefore queued and
//! drained by the application after each controller call.

use crate::application::port::{DisplaySurface, ScrollOffsets, ViewportSize};
use crate::domain::image::{BitmapSize, RenderedBitmap};
use iced::widget::image::Handle;
use iced::widget::scrollable::RelativeOffset;

#[derive(Debug, Clone, Default)]
pub struct IcedSurface {
    handle: Option<Handle>,
    bitmap_size: BitmapSize,
    viewport: ViewportSize,
    offsets: ScrollOffsets,
    pending_scroll: Option<ScrollOffsets>,
}

impl IcedSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn handle(&self) -> Option<&Handle> {
        self.handle.as_ref()
    }

    #[must_use]
    pub fn bitmap_size(&self) -> BitmapSize {
        self.bitmap_size
    }

    /// Records the visible size reported by layout.
    ///
    /// Returns `true` when it changed.
    pub fn set_viewport(&mut self, viewport: ViewportSize) -> bool {
        if self.viewport == viewport {
            return false;
        }
        self.viewport = viewport;
        true
    }

    /// Records a scroll position reported by the widget.
    pub fn track_scroll(&mut self, offsets: ScrollOffsets) {
        self.offsets = offsets;
    }

    /// Largest offsets the scrollable allows for the current bitmap.
    #[must_use]
    pub fn max_offsets(&self) -> ScrollOffsets {
        #[allow(clippy::cast_precision_loss)]
        let (width, height) = (self.bitmap_size.width as f32, self.bitmap_size.height as f32);
        ScrollOffsets::new(
            (width - self.viewport.width).max(0.0),
            (height - self.viewport.height).max(0.0),
        )
    }

    /// Takes the queued scroll position as a relative offset for
    /// `operation::snap_to`.
    pub fn take_pending_scroll(&mut self) -> Option<RelativeOffset> {
        let target = self.pending_scroll.take()?;
        let max = self.max_offsets();
        Some(RelativeOffset {
            x: relative(target.x, max.x),
            y: relative(target.y, max.y),
        })
    }
}

fn relative(offset: f32, max: f32) -> f32 {
    if max > 0.0 {
        (offset / max).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

impl DisplaySurface for IcedSurface {
    fn render(&mut self, bitmap: RenderedBitmap) {
        let size = bitmap.size();
        self.handle = Some(Handle::from_rgba(size.width, size.height, bitmap.into_rgba()));
        self.bitmap_size = size;
    }

    fn viewport_size(&self) -> ViewportSize {
        self.viewport
    }

    fn scroll_offsets(&self) -> ScrollOffsets {
        self.offsets
    }

    fn set_scroll_offsets(&mut self, offsets: ScrollOffsets) {
        let max = self.max_offsets();
        let clamped = ScrollOffsets::new(offsets.x.clamp(0.0, max.x), offsets.y.clamp(0.0, max.y));
        self.offsets = clamped;
        self.pending_scroll = Some(clamped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn surface_with(bitmap: BitmapSize, viewport: ViewportSize) -> IcedSurface {
        let mut surface = IcedSurface::new();
        surface.set_viewport(viewport);
        let pixels = vec![0; (bitmap.width * bitmap.height * 4) as usize];
        surface.render(RenderedBitmap::from_rgba(bitmap, pixels).expect("valid buffer"));
        surface
    }

    #[test]
    fn render_replaces_handle_and_size() {
        let surface = surface_with(BitmapSize::new(30, 20), ViewportSize::new(10.0, 10.0));
        assert!(surface.handle().is_some());
        assert_eq!(surface.bitmap_size(), BitmapSize::new(30, 20));
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut surface = surface_with(BitmapSize::new(300, 200), ViewportSize::new(100.0, 100.0));

        surface.set_scroll_offsets(ScrollOffsets::new(500.0, -5.0));

        assert_eq!(surface.scroll_offsets(), ScrollOffsets::new(200.0, 0.0));
    }

    #[test]
    fn pending_scroll_is_relative_and_drained_once() {
        let mut surface = surface_with(BitmapSize::new(300, 200), ViewportSize::new(100.0, 100.0));
        surface.set_scroll_offsets(ScrollOffsets::new(50.0, 25.0));

        let relative = surface.take_pending_scroll().expect("queued");
        assert_abs_diff_eq!(relative.x, 0.25);
        assert_abs_diff_eq!(relative.y, 0.25);
        assert!(surface.take_pending_scroll().is_none());
    }

    #[test]
    fn content_smaller_than_viewport_scrolls_to_origin() {
        let mut surface = surface_with(BitmapSize::new(50, 50), ViewportSize::new(100.0, 100.0));
        surface.set_scroll_offsets(ScrollOffsets::new(10.0, 10.0));

        let relative = surface.take_pending_scroll().expect("queued");
        assert_eq!((relative.x, relative.y), (0.0, 0.0));
    }

    #[test]
    fn viewport_change_is_reported_once() {
        let mut surface = IcedSurface::new();
        assert!(surface.set_viewport(ViewportSize::new(10.0, 10.0)));
        assert!(!surface.set_viewport(ViewportSize::new(10.0, 10.0)));
    }
}
