// SPDX-License-Identifier: MPL-2.0
//! `iced_peek` is a minimal image viewer built with the Iced GUI framework.
//!
//! It opens an image from disk or the clipboard, shows it at literal size,
//! zoomed or fitted to the window width, and can copy, print or save it.
//! The zoom and fit logic lives in [`viewport`] and talks to the outside world
//! only through the ports in [`application::port`].

#![doc(html_root_url = "https://docs.rs/iced_peek/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod print;
pub mod ui;
pub mod viewport;

#[cfg(test)]
mod test_utils;
