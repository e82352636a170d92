// SPDX-License-Identifier: MPL-2.0
//! System clipboard port (images only).

use crate::domain::image::SourceImage;
use crate::error::Result;

pub trait ImageClipboard {
    /// Returns the image currently on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::NoImageAvailable`] when the clipboard is
    /// empty or holds something other than an image.
    fn read_image(&mut self) -> Result<SourceImage>;

    /// Places `image` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Clipboard`] when the system clipboard
    /// rejects the data.
    fn write_image(&mut self, image: &SourceImage) -> Result<()>;

    /// Whether the clipboard currently holds an image. Unavailable
    /// clipboards report `false`.
    fn has_image(&mut self) -> bool;
}
