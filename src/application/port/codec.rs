// SPDX-License-Identifier: MPL-2.0
//! Image codec port.

use crate::domain::image::SourceImage;
use crate::error::Result;
use std::path::Path;

/// Reads and writes image files.
///
/// # Example
///
/// ```ignore
/// use iced_peek::application::port::ImageCodec;
///
/// fn describe(codec: &impl ImageCodec, path: &std::path::Path) {
///     match codec.decode(path) {
///         Ok(image) => println!("{}x{}", image.width(), image.height()),
///         Err(err) => eprintln!("{err}"),
///     }
/// }
/// ```
pub trait ImageCodec {
    /// Decodes the file at `path`, applying any orientation stored in it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Decode`] naming `path` when the file
    /// is missing, unreadable, of an unsupported format or corrupt.
    fn decode(&self, path: &Path) -> Result<SourceImage>;

    /// Encodes `image` to `path`; the format follows the extension.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Encode`] naming `path`.
    fn encode(&self, image: &SourceImage, path: &Path) -> Result<()>;

    /// Lower-case extensions `decode` understands, without dots.
    fn readable_extensions(&self) -> Vec<&'static str>;

    /// Lower-case extensions `encode` can produce, without dots.
    fn writable_extensions(&self) -> Vec<&'static str>;
}
