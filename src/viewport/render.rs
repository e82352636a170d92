// SPDX-License-Identifier: MPL-2.0
//! Resampling of the source image to display size.

use crate::domain::image::{BitmapSize, RenderedBitmap, SourceImage};
use image_rs::imageops::{self, FilterType};
use image_rs::{ImageBuffer, Rgba};

/// Borrowed RGBA view over a pixel buffer.
pub(crate) type RgbaView<'a> = ImageBuffer<Rgba<u8>, &'a [u8]>;

pub(crate) fn rgba_view(size: BitmapSize, bytes: &[u8]) -> Option<RgbaView<'_>> {
    ImageBuffer::from_raw(size.width, size.height, bytes)
}

/// Picks the resampling filter for a size change.
///
/// Magnification keeps hard pixel edges; minification averages.
#[must_use]
pub fn filter_for(from: BitmapSize, to: BitmapSize) -> FilterType {
    if u64::from(to.width) * u64::from(to.height) > u64::from(from.width) * u64::from(from.height) {
        FilterType::Nearest
    } else {
        FilterType::Triangle
    }
}

/// Resamples `pixels` of `from` size into a fresh bitmap of `to` size.
///
/// Returns `None` if the buffer does not match `from` or `to` is empty.
#[must_use]
pub fn resample(from: BitmapSize, pixels: &[u8], to: BitmapSize) -> Option<RenderedBitmap> {
    if to.is_empty() {
        return None;
    }
    let view = rgba_view(from, pixels)?;
    if from == to {
        return RenderedBitmap::from_rgba(to, pixels.to_vec());
    }
    let resized = imageops::resize(&view, to.width, to.height, filter_for(from, to));
    RenderedBitmap::from_rgba(to, resized.into_raw())
}

/// Resamples the source image to `target`.
#[must_use]
pub fn rescale(source: &SourceImage, target: BitmapSize) -> Option<RenderedBitmap> {
    resample(source.size(), source.rgba_bytes(), target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::image::ColorModel;

    fn checker(width: u32, height: u32) -> SourceImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = if (x + y) % 2 == 0 { 255 } else { 0 };
                pixels.extend_from_slice(&[v, v, v, 255]);
            }
        }
        SourceImage::from_rgba(BitmapSize::new(width, height), pixels, 32, ColorModel::Rgba)
            .expect("valid buffer")
    }

    #[test]
    fn rescale_produces_requested_size() {
        let source = checker(4, 2);
        let bitmap = rescale(&source, BitmapSize::new(10, 5)).expect("rescaled");
        assert_eq!(bitmap.size(), BitmapSize::new(10, 5));
        assert_eq!(bitmap.rgba_bytes().len(), 10 * 5 * 4);
    }

    #[test]
    fn same_size_copies_pixels() {
        let source = checker(3, 3);
        let bitmap = rescale(&source, source.size()).expect("rescaled");
        assert_eq!(bitmap.rgba_bytes(), source.rgba_bytes());
    }

    #[test]
    fn magnification_keeps_hard_edges() {
        let source = checker(2, 1);
        let bitmap = rescale(&source, BitmapSize::new(4, 2)).expect("rescaled");
        // Nearest-neighbour: every channel stays fully black or fully white.
        assert!(bitmap.rgba_bytes().iter().all(|&c| c == 0 || c == 255));
    }

    #[test]
    fn empty_target_is_rejected() {
        let source = checker(2, 2);
        assert!(rescale(&source, BitmapSize::new(0, 2)).is_none());
    }

    #[test]
    fn filter_choice_follows_direction() {
        let small = BitmapSize::new(10, 10);
        let large = BitmapSize::new(20, 20);
        assert_eq!(filter_for(small, large), FilterType::Nearest);
        assert_eq!(filter_for(large, small), FilterType::Triangle);
    }
}
