// SPDX-License-Identifier: MPL-2.0
//! Display-scale state machine for the viewer pane.
//!
//! The [`ViewportController`] decides how large the image is drawn and where
//! the scroll position lands after a zoom. Drawing and scrolling themselves
//! happen behind the [`crate::application::port::DisplaySurface`] port.

pub mod controller;
pub mod render;
pub mod scale;

pub use controller::{
    adjusted_offset, Collaborators, DisplayState, ImageSummary, ViewerEvent, ViewportController,
};
pub use scale::{DisplayMode, ScaleFactor, ZoomDirection};
