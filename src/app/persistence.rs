// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Only the fit-to-window choice and the last dialog directory change at
//! runtime; everything else in `settings.toml` is read once at startup.

use crate::config::{self, Config};
use std::path::{Path, PathBuf};

/// Writes `config` to disk, logging failures.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling the update functions directly.
pub fn persist_preferences(config: &Config, config_dir: Option<PathBuf>) {
    if cfg!(test) {
        return;
    }

    if let Err(error) = config::save_with_override(config, config_dir) {
        tracing::warn!("failed to save config: {error}");
    }
}

/// Records the directory containing `path` as the last dialog directory.
///
/// Returns `true` when the stored value changed.
pub fn remember_directory(config: &mut Config, path: &Path) -> bool {
    let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) else {
        return false;
    };
    if config.files.last_directory.as_deref() == Some(dir) {
        return false;
    }
    config.files.last_directory = Some(dir.to_path_buf());
    true
}

/// Records the fit-to-window choice. Returns `true` when it changed.
pub fn remember_fit_to_window(config: &mut Config, fit: bool) -> bool {
    if config.display.fit_to_window == Some(fit) {
        return false;
    }
    config.display.fit_to_window = Some(fit);
    true
}
