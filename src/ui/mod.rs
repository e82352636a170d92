// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! takes a borrowed `ViewContext` and emits its own `Message` type, which the
//! application maps into its top-level message.
//!
//! - [`toolbar`] - File, edit and view actions
//! - [`viewer`] - Scrollable image pane and its display surface
//! - [`status_bar`] - Status messages and zoom indicator
//! - [`widgets`] - Custom Iced widgets (Ctrl+wheel zoom)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod status_bar;
pub mod styles;
pub mod toolbar;
pub mod viewer;
pub mod widgets;
