// SPDX-License-Identifier: MPL-2.0
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Recoverable failures surfaced to the user through a modal notice.
///
/// None of these leave the viewer in a modified state: the operation that
/// produced them is rejected as a whole.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The file could not be opened or decoded.
    #[error("Cannot load {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    /// The clipboard holds no image (empty, text, or unreadable).
    #[error("No image in clipboard")]
    NoImageAvailable,

    /// The image could not be encoded or written.
    #[error("Cannot write {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },

    #[error("Clipboard Error: {0}")]
    Clipboard(String),

    #[error("Print Error: {0}")]
    Print(String),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl Error {
    /// Builds a decode error for `path` from any codec error.
    pub fn decode(path: &Path, err: impl std::fmt::Display) -> Self {
        Error::Decode {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Builds an encode error for `path` from any codec error.
    pub fn encode(path: &Path, err: impl std::fmt::Display) -> Self {
        Error::Encode {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Returns the message key used to render this error in a notice.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Decode { .. } => "error-open-file",
            Error::NoImageAvailable => "status-clipboard-empty",
            Error::Encode { .. } => "error-save-file",
            Error::Clipboard(_) => "error-clipboard",
            Error::Print(_) => "error-print",
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
        }
    }

    /// Returns the Fluent arguments for [`Error::i18n_key`].
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            Error::Decode { path, message } | Error::Encode { path, message } => vec![
                ("path", path.display().to_string()),
                ("reason", message.clone()),
            ],
            Error::NoImageAvailable => Vec::new(),
            Error::Clipboard(reason)
            | Error::Print(reason)
            | Error::Io(reason)
            | Error::Config(reason) => vec![("reason", reason.clone())],
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
