// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! `image` crate, the system clipboard and the platform print spooler.
//!
//! # Available Adapters
//!
//! - [`image_codec`]: File decoding and encoding (implements [`ImageCodec`])
//! - [`system_clipboard`]: Clipboard access via `arboard` (implements [`ImageClipboard`])
//! - [`lp_spooler`]: CUPS `lp` submission (implements [`PrintSpooler`])
//!
//! [`ImageCodec`]: crate::application::port::ImageCodec
//! [`ImageClipboard`]: crate::application::port::ImageClipboard
//! [`PrintSpooler`]: crate::application::port::PrintSpooler

pub mod image_codec;
pub mod lp_spooler;
pub mod system_clipboard;

pub use image_codec::ImageRsCodec;
pub use lp_spooler::LpSpooler;
pub use system_clipboard::ArboardClipboard;
