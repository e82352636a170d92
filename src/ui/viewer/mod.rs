// SPDX-License-Identifier: MPL-2.0
//! Image viewer pane: the scrollable area showing the rendered bitmap.

pub mod empty_state;
pub mod pane;
pub mod surface;

pub use surface::IcedSurface;

use crate::viewport::ZoomDirection;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Rectangle;

/// Identifier used for the viewer scrollable widget.
pub const SCROLLABLE_ID: &str = "viewer-image-scrollable";

/// Messages emitted by the viewer pane.
#[derive(Debug, Clone)]
pub enum Message {
    /// The scrollable was laid out or scrolled.
    ViewportChanged {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    /// Ctrl+wheel over the image.
    WheelZoom(ZoomDirection),
    /// The open button of the empty state.
    OpenFileRequested,
}
