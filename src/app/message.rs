// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::image::SourceImage;
use crate::ui::{toolbar, viewer};
use iced::Size;
use std::path::PathBuf;

/// Dialog to reopen once a failure notice is dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retry {
    Open,
    Save,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A toolbar button or its keyboard shortcut.
    Toolbar(toolbar::Message),
    Viewer(viewer::Message),
    /// The window was opened or resized to this inner size.
    WindowResized(Size),
    /// Periodic clipboard check that keeps Paste enablement current.
    ClipboardPoll,
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Result from the open file dialog.
    OpenDialogResult(Option<PathBuf>),
    /// Result from the save dialog.
    SaveDialogResult(Option<PathBuf>),
    /// A failure notice was dismissed.
    NoticeClosed(Option<Retry>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Path of the image given on the command line.
    pub file_path: Option<PathBuf>,
    /// That image, already decoded by `main`.
    pub image: Option<SourceImage>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_PEEK_CONFIG_DIR` environment variable.
    pub config_dir: Option<PathBuf>,
}
