// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`codec`]: Image decoding and encoding
//! - [`clipboard`]: System image clipboard
//! - [`print`]: Print spooling
//! - [`surface`]: Passive display surface driven by the viewport controller
//!
//! # Design Notes
//!
//! - All traits use domain types only (no iced handles, no `image` types)
//! - Methods are synchronous and return [`crate::error::Result`]

pub mod clipboard;
pub mod codec;
pub mod print;
pub mod surface;

pub use clipboard::ImageClipboard;
pub use codec::ImageCodec;
pub use print::{PrintJob, PrintSpooler};
pub use surface::{DisplaySurface, ScrollOffsets, ViewportSize};
