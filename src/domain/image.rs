// SPDX-License-Identifier: MPL-2.0
//! Image value types shared by the viewport core and its collaborators.
//!
//! These types represent pure data without any presentation dependencies.

use std::sync::Arc;

/// Integer pixel dimensions of a bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitmapSize {
    pub width: u32,
    pub height: u32,
}

impl BitmapSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Rounds a fractional extent to whole pixels, never below 1x1.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_extent(width: f64, height: f64) -> Self {
        Self {
            width: width.round().max(1.0) as u32,
            height: height.round().max(1.0) as u32,
        }
    }

    /// Largest extent with this aspect ratio that fits inside `bounds`.
    ///
    /// Scales up as well as down, so a small bitmap grows to fill the bounds.
    #[must_use]
    pub fn fit_within(self, bounds_width: f64, bounds_height: f64) -> (f64, f64) {
        if self.is_empty() || bounds_width <= 0.0 || bounds_height <= 0.0 {
            return (0.0, 0.0);
        }
        let ratio = (bounds_width / f64::from(self.width))
            .min(bounds_height / f64::from(self.height));
        (f64::from(self.width) * ratio, f64::from(self.height) * ratio)
    }
}

/// Channel layout of the decoded source, before conversion to RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorModel {
    Gray,
    GrayAlpha,
    Rgb,
    Rgba,
}

/// An image as delivered by a codec or the clipboard.
///
/// Pixels are always stored as straight RGBA8 exactly as decoded. Embedded
/// colour profiles are not applied, so the values are only sRGB when the
/// file was. `bit_depth` and `color_model` describe the original encoding and are kept
/// for display in the status bar.
#[derive(Debug, Clone)]
pub struct SourceImage {
    size: BitmapSize,
    bit_depth: u16,
    color_model: ColorModel,
    rgba: Arc<Vec<u8>>,
}

impl SourceImage {
    /// Wraps an RGBA8 buffer.
    ///
    /// Returns `None` if either dimension is zero or the buffer length is not
    /// `width * height * 4`.
    #[must_use]
    pub fn from_rgba(
        size: BitmapSize,
        rgba: Vec<u8>,
        bit_depth: u16,
        color_model: ColorModel,
    ) -> Option<Self> {
        let expected = (size.width as usize) * (size.height as usize) * 4;
        if size.is_empty() || rgba.len() != expected {
            return None;
        }
        Some(Self {
            size,
            bit_depth,
            color_model,
            rgba: Arc::new(rgba),
        })
    }

    #[must_use]
    pub fn size(&self) -> BitmapSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Bits per pixel of the original encoding.
    #[must_use]
    pub fn bit_depth(&self) -> u16 {
        self.bit_depth
    }

    #[must_use]
    pub fn color_model(&self) -> ColorModel {
        self.color_model
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba
    }
}

impl PartialEq for SourceImage {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.bit_depth == other.bit_depth
            && self.color_model == other.color_model
            && Arc::ptr_eq(&self.rgba, &other.rgba)
    }
}

/// A resampled copy of the source, sized for the display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBitmap {
    size: BitmapSize,
    rgba: Arc<Vec<u8>>,
}

impl RenderedBitmap {
    /// Wraps an RGBA8 buffer produced by the renderer.
    ///
    /// Returns `None` when the buffer does not match `size`.
    #[must_use]
    pub fn from_rgba(size: BitmapSize, rgba: Vec<u8>) -> Option<Self> {
        let expected = (size.width as usize) * (size.height as usize) * 4;
        if size.is_empty() || rgba.len() != expected {
            return None;
        }
        Some(Self {
            size,
            rgba: Arc::new(rgba),
        })
    }

    #[must_use]
    pub fn size(&self) -> BitmapSize {
        self.size
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba
    }

    /// Takes the pixel buffer, copying only if it is still shared.
    #[must_use]
    pub fn into_rgba(self) -> Vec<u8> {
        Arc::try_unwrap(self.rgba).unwrap_or_else(|shared| shared.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_image_rejects_mismatched_buffer() {
        let size = BitmapSize::new(2, 2);
        assert!(SourceImage::from_rgba(size, vec![0; 15], 32, ColorModel::Rgba).is_none());
        assert!(SourceImage::from_rgba(size, vec![0; 16], 32, ColorModel::Rgba).is_some());
    }

    #[test]
    fn source_image_rejects_empty_dimensions() {
        let size = BitmapSize::new(0, 4);
        assert!(SourceImage::from_rgba(size, Vec::new(), 32, ColorModel::Rgba).is_none());
    }

    #[test]
    fn fit_within_preserves_aspect_ratio() {
        let size = BitmapSize::new(400, 200);
        let (w, h) = size.fit_within(100.0, 100.0);
        assert!((w - 100.0).abs() < 1e-9);
        assert!((h - 50.0).abs() < 1e-9);
    }

    #[test]
    fn fit_within_scales_up_small_bitmaps() {
        let size = BitmapSize::new(10, 20);
        let (w, h) = size.fit_within(300.0, 100.0);
        assert!((w - 50.0).abs() < 1e-9);
        assert!((h - 100.0).abs() < 1e-9);
    }

    #[test]
    fn from_extent_never_collapses_to_zero() {
        assert_eq!(BitmapSize::from_extent(0.2, 0.4), BitmapSize::new(1, 1));
        assert_eq!(BitmapSize::from_extent(99.5, 10.4), BitmapSize::new(100, 10));
    }

    #[test]
    fn into_rgba_moves_unique_buffer() {
        let pixels = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let address = pixels.as_ptr();
        let bitmap = RenderedBitmap::from_rgba(BitmapSize::new(2, 1), pixels).expect("valid");

        let taken = bitmap.into_rgba();
        assert_eq!(taken.as_ptr(), address);
    }

    #[test]
    fn into_rgba_copies_shared_buffer() {
        let bitmap =
            RenderedBitmap::from_rgba(BitmapSize::new(1, 1), vec![9, 8, 7, 6]).expect("valid");
        let kept = bitmap.clone();

        assert_eq!(bitmap.into_rgba(), vec![9, 8, 7, 6]);
        assert_eq!(kept.rgba_bytes(), &[9, 8, 7, 6]);
    }
}
