// SPDX-License-Identifier: MPL-2.0
//! System clipboard adapter backed by `arboard`.

use crate::application::port::ImageClipboard;
use crate::domain::image::{BitmapSize, ColorModel, SourceImage};
use crate::error::{Error, Result};
use arboard::{Clipboard, ImageData};
use std::borrow::Cow;

/// Clipboard images are always delivered as RGBA8.
const CLIPBOARD_BIT_DEPTH: u16 = 32;

/// Opens the platform clipboard on first use, so a missing display server
/// only fails the operation that needed it.
#[derive(Default)]
pub struct ArboardClipboard {
    handle: Option<Clipboard>,
}

impl ArboardClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn clipboard(&mut self) -> Result<&mut Clipboard> {
        if self.handle.is_none() {
            self.handle = Some(Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?);
        }
        self.handle
            .as_mut()
            .ok_or_else(|| Error::Clipboard("clipboard unavailable".to_string()))
    }
}

impl std::fmt::Debug for ArboardClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArboardClipboard")
            .field("open", &self.handle.is_some())
            .finish()
    }
}

impl ImageClipboard for ArboardClipboard {
    fn read_image(&mut self) -> Result<SourceImage> {
        let data = match self.clipboard()?.get_image() {
            Ok(data) => data,
            Err(arboard::Error::ContentNotAvailable) => return Err(Error::NoImageAvailable),
            Err(err) => {
                tracing::debug!("clipboard image read failed: {err}");
                return Err(Error::NoImageAvailable);
            }
        };
        source_from_clipboard(&data).ok_or(Error::NoImageAvailable)
    }

    fn write_image(&mut self, image: &SourceImage) -> Result<()> {
        let data = ImageData {
            width: image.width() as usize,
            height: image.height() as usize,
            bytes: Cow::Borrowed(image.rgba_bytes()),
        };
        self.clipboard()?
            .set_image(data)
            .map_err(|e| Error::Clipboard(e.to_string()))
    }

    fn has_image(&mut self) -> bool {
        match self.clipboard() {
            Ok(clipboard) => clipboard.get_image().is_ok(),
            Err(err) => {
                tracing::debug!("clipboard check skipped: {err}");
                false
            }
        }
    }
}

/// Converts clipboard RGBA data, rejecting empty or truncated buffers.
fn source_from_clipboard(data: &ImageData<'_>) -> Option<SourceImage> {
    let width = u32::try_from(data.width).ok()?;
    let height = u32::try_from(data.height).ok()?;
    SourceImage::from_rgba(
        BitmapSize::new(width, height),
        data.bytes.to_vec(),
        CLIPBOARD_BIT_DEPTH,
        ColorModel::Rgba,
    )
}
