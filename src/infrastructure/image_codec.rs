// SPDX-License-Identifier: MPL-2.0
//! Raster image files through the `image` crate.

use crate::application::port::ImageCodec;
use crate::domain::image::{BitmapSize, ColorModel, SourceImage};
use crate::error::{Error, Result};
use image_rs::{ColorType, DynamicImage, ImageDecoder, ImageFormat, ImageReader, RgbaImage};
use std::path::Path;

/// Codec for every raster format compiled into the `image` dependency.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageRsCodec;

impl ImageRsCodec {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ImageCodec for ImageRsCodec {
    fn decode(&self, path: &Path) -> Result<SourceImage> {
        let reader = ImageReader::open(path)
            .map_err(|e| Error::decode(path, e))?
            .with_guessed_format()
            .map_err(|e| Error::decode(path, e))?;
        let mut decoder = reader.into_decoder().map_err(|e| Error::decode(path, e))?;

        let color_type = decoder.color_type();
        let orientation = decoder.orientation().ok();
        let mut image = DynamicImage::from_decoder(decoder).map_err(|e| Error::decode(path, e))?;
        if let Some(orientation) = orientation {
            image.apply_orientation(orientation);
        }

        let rgba = image.to_rgba8();
        let size = BitmapSize::new(rgba.width(), rgba.height());
        SourceImage::from_rgba(
            size,
            rgba.into_raw(),
            color_type.bits_per_pixel(),
            color_model(color_type),
        )
        .ok_or_else(|| Error::decode(path, "image has no pixels"))
    }

    fn encode(&self, image: &SourceImage, path: &Path) -> Result<()> {
        let format = ImageFormat::from_path(path).map_err(|e| Error::encode(path, e))?;
        if !format.writing_enabled() {
            return Err(Error::encode(
                path,
                format!("writing {format:?} is not supported"),
            ));
        }

        let rgba = RgbaImage::from_raw(image.width(), image.height(), image.rgba_bytes().to_vec())
            .ok_or_else(|| Error::encode(path, "pixel buffer does not match image size"))?;
        let dynamic = DynamicImage::ImageRgba8(rgba);
        // JPEG has no alpha channel.
        let dynamic = match format {
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(dynamic.to_rgb8()),
            _ => dynamic,
        };

        dynamic
            .save_with_format(path, format)
            .map_err(|e| Error::encode(path, e))
    }

    fn readable_extensions(&self) -> Vec<&'static str> {
        extensions(ImageFormat::reading_enabled)
    }

    fn writable_extensions(&self) -> Vec<&'static str> {
        extensions(ImageFormat::writing_enabled)
    }
}

fn extensions(enabled: fn(&ImageFormat) -> bool) -> Vec<&'static str> {
    ImageFormat::all()
        .filter(|format| enabled(format))
        .flat_map(|format| format.extensions_str().iter().copied())
        .collect()
}

fn color_model(color_type: ColorType) -> ColorModel {
    match (color_type.has_color(), color_type.has_alpha()) {
        (false, false) => ColorModel::Gray,
        (false, true) => ColorModel::GrayAlpha,
        (true, false) => ColorModel::Rgb,
        (true, true) => ColorModel::Rgba,
    }
}
