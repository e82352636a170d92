// SPDX-License-Identifier: MPL-2.0
//! Page composition for printing.
//!
//! The displayed bitmap is scaled, preserving its aspect ratio, to fill the
//! printable area and drawn at the top-left of a white sheet.

use crate::config::{PrintConfig, MAX_PRINT_DPI, MIN_PRINT_DPI};
use crate::domain::image::{BitmapSize, RenderedBitmap};
use crate::viewport::render;
use image_rs::imageops;
use image_rs::{Rgba, RgbaImage};

const MM_PER_INCH: f32 = 25.4;
const PAPER_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Pixel rectangle on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRect {
    pub x: u32,
    pub y: u32,
    pub size: BitmapSize,
}

/// Sheet geometry in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    page: BitmapSize,
    margin: u32,
    dpi: u32,
}

impl PageLayout {
    #[must_use]
    pub const fn new(page: BitmapSize, margin: u32, dpi: u32) -> Self {
        Self { page, margin, dpi }
    }

    /// Converts the millimetre geometry of `config` at its resolution.
    ///
    /// Out-of-range resolutions are clamped; negative lengths count as zero.
    #[must_use]
    pub fn from_config(config: &PrintConfig) -> Self {
        let dpi = config.dpi.clamp(MIN_PRINT_DPI, MAX_PRINT_DPI);
        let page = BitmapSize::new(
            mm_to_px(config.paper_width_mm, dpi),
            mm_to_px(config.paper_height_mm, dpi),
        );
        Self::new(page, mm_to_px(config.margin_mm, dpi), dpi)
    }

    #[must_use]
    pub fn page_size(&self) -> BitmapSize {
        self.page
    }

    #[must_use]
    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// The sheet minus its margins, or `None` if the margins cover it.
    #[must_use]
    pub fn printable_area(&self) -> Option<PageRect> {
        let width = self.page.width.checked_sub(self.margin.saturating_mul(2))?;
        let height = self.page.height.checked_sub(self.margin.saturating_mul(2))?;
        let size = BitmapSize::new(width, height);
        (!size.is_empty()).then_some(PageRect {
            x: self.margin,
            y: self.margin,
            size,
        })
    }

    /// Where a bitmap of `image` size lands: scaled to fit the printable
    /// area and anchored at its top-left corner.
    #[must_use]
    pub fn placement(&self, image: BitmapSize) -> Option<PageRect> {
        let area = self.printable_area()?;
        let (width, height) = image.fit_within(
            f64::from(area.size.width),
            f64::from(area.size.height),
        );
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        let size = BitmapSize::from_extent(width, height);
        Some(PageRect {
            x: area.x,
            y: area.y,
            size: BitmapSize::new(
                size.width.min(area.size.width),
                size.height.min(area.size.height),
            ),
        })
    }

    /// Renders the full sheet with `bitmap` placed on it.
    #[must_use]
    pub fn compose(&self, bitmap: &RenderedBitmap) -> Option<RenderedBitmap> {
        let rect = self.placement(bitmap.size())?;
        let scaled = render::resample(bitmap.size(), bitmap.rgba_bytes(), rect.size)?;
        let top = render::rgba_view(scaled.size(), scaled.rgba_bytes())?;

        let mut sheet = RgbaImage::from_pixel(self.page.width, self.page.height, PAPER_WHITE);
        imageops::overlay(&mut sheet, &top, i64::from(rect.x), i64::from(rect.y));
        RenderedBitmap::from_rgba(self.page, sheet.into_raw())
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::from_config(&PrintConfig::default())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn mm_to_px(mm: f32, dpi: u32) -> u32 {
    (mm.max(0.0) / MM_PER_INCH * dpi as f32).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black(width: u32, height: u32) -> RenderedBitmap {
        let pixels = [0, 0, 0, 255].repeat((width * height) as usize);
        RenderedBitmap::from_rgba(BitmapSize::new(width, height), pixels).expect("valid buffer")
    }

    fn pixel(bitmap: &RenderedBitmap, x: u32, y: u32) -> [u8; 4] {
        let index = ((y * bitmap.size().width + x) * 4) as usize;
        let bytes = &bitmap.rgba_bytes()[index..index + 4];
        [bytes[0], bytes[1], bytes[2], bytes[3]]
    }

    #[test]
    fn a4_at_default_resolution() {
        let layout = PageLayout::default();
        assert_eq!(layout.page_size(), BitmapSize::new(1240, 1754));
        assert_eq!(layout.dpi(), 150);
        let area = layout.printable_area().expect("printable");
        assert_eq!((area.x, area.y), (59, 59));
    }

    #[test]
    fn config_resolution_is_clamped() {
        let config = PrintConfig {
            dpi: 10_000,
            ..PrintConfig::default()
        };
        assert_eq!(PageLayout::from_config(&config).dpi(), MAX_PRINT_DPI);
    }

    #[test]
    fn oversized_margin_leaves_no_printable_area() {
        let layout = PageLayout::new(BitmapSize::new(100, 100), 60, 72);
        assert!(layout.printable_area().is_none());
        assert!(layout.compose(&black(10, 10)).is_none());
    }

    #[test]
    fn wide_image_is_limited_by_width() {
        let layout = PageLayout::new(BitmapSize::new(220, 420), 10, 72);
        let rect = layout.placement(BitmapSize::new(400, 100)).expect("placed");
        assert_eq!(rect.size, BitmapSize::new(200, 50));
        assert_eq!((rect.x, rect.y), (10, 10));
    }

    #[test]
    fn small_image_is_scaled_up() {
        let layout = PageLayout::new(BitmapSize::new(220, 420), 10, 72);
        let rect = layout.placement(BitmapSize::new(10, 40)).expect("placed");
        assert_eq!(rect.size, BitmapSize::new(100, 400));
    }

    #[test]
    fn compose_draws_image_top_left_on_white() {
        let layout = PageLayout::new(BitmapSize::new(120, 120), 10, 72);

        let page = layout.compose(&black(50, 25)).expect("composed");

        assert_eq!(page.size(), BitmapSize::new(120, 120));
        assert_eq!(pixel(&page, 0, 0), [255, 255, 255, 255]);
        assert_eq!(pixel(&page, 10, 10), [0, 0, 0, 255]);
        // Below the 100x50 placement the sheet stays white.
        assert_eq!(pixel(&page, 50, 70), [255, 255, 255, 255]);
    }
}
