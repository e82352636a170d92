// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[display]` - Fit-to-window default and viewer background
//! - `[files]` - Default save suffix and last dialog directory
//! - `[print]` - Paper size, resolution and margin of printed pages
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line or `ICED_PEEK_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_peek::config;
//!
//! let (mut config, _warning) = config::load();
//! config.display.fit_to_window = Some(true);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundTheme {
    Light,
    #[default]
    Dark,
}

// =============================================================================
// Section Structs
// =============================================================================

/// Viewer display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Whether new images are fitted to the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_to_window: Option<bool>,

    /// Colour behind the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundTheme>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fit_to_window: Some(false),
            background: Some(BackgroundTheme::default()),
        }
    }
}

/// Open/save dialog settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilesConfig {
    /// Suffix appended to save paths without an extension.
    #[serde(
        default = "default_save_extension",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_save_extension: Option<String>,

    /// Directory the last open/save dialog ended in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_directory: Option<PathBuf>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            default_save_extension: default_save_extension(),
            last_directory: None,
        }
    }
}

/// Printed page geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrintConfig {
    #[serde(default = "default_paper_width_mm")]
    pub paper_width_mm: f32,

    #[serde(default = "default_paper_height_mm")]
    pub paper_height_mm: f32,

    #[serde(default = "default_print_dpi")]
    pub dpi: u32,

    #[serde(default = "default_print_margin_mm")]
    pub margin_mm: f32,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            paper_width_mm: DEFAULT_PAPER_WIDTH_MM,
            paper_height_mm: DEFAULT_PAPER_HEIGHT_MM,
            dpi: DEFAULT_PRINT_DPI,
            margin_mm: DEFAULT_PRINT_MARGIN_MM,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub print: PrintConfig,
}

impl Config {
    /// Save suffix, falling back to the built-in default when unset or blank.
    #[must_use]
    pub fn save_extension(&self) -> &str {
        self.files
            .default_save_extension
            .as_deref()
            .map(|ext| ext.trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .unwrap_or(DEFAULT_SAVE_EXTENSION)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_save_extension() -> Option<String> {
    Some(DEFAULT_SAVE_EXTENSION.to_string())
}

fn default_paper_width_mm() -> f32 {
    DEFAULT_PAPER_WIDTH_MM
}

fn default_paper_height_mm() -> f32 {
    DEFAULT_PAPER_HEIGHT_MM
}

fn default_print_dpi() -> u32 {
    DEFAULT_PRINT_DPI
}

fn default_print_margin_mm() -> f32 {
    DEFAULT_PRINT_MARGIN_MM
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), "{err}; using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
