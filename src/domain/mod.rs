// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types with no toolkit or codec dependencies.
//!
//! - [`image`]: [`SourceImage`](image::SourceImage), [`RenderedBitmap`](image::RenderedBitmap),
//!   [`BitmapSize`](image::BitmapSize)

pub mod image;
