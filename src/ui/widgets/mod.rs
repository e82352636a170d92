// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod zoom_wheel;

pub use zoom_wheel::{zoom_wheel, ZoomWheel};
