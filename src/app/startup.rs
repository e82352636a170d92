// SPDX-License-Identifier: MPL-2.0
//! Command-line parsing and the start-up image.
//!
//! `main` only wires these together with the dialog and the exit status.

use crate::application::port::ImageCodec;
use crate::domain::image::SourceImage;
use crate::error::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const USAGE: &str = "\
Usage: iced_peek [OPTIONS] [FILE]

Arguments:
  [FILE]  Image file to open

Options:
      --config-dir <PATH>  Directory holding settings.toml
  -h, --help               Print help
";

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run {
        file: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    },
}

/// Parses the arguments after the program name.
///
/// # Errors
///
/// Returns a message for unknown options, a missing option value or more
/// than one file.
pub fn parse_args(args: Vec<OsString>) -> std::result::Result<Command, String> {
    let mut args = pico_args::Arguments::from_vec(args);

    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }

    let config_dir: Option<PathBuf> = args
        .opt_value_from_str("--config-dir")
        .map_err(|err| err.to_string())?;

    let mut free = args.finish().into_iter();
    let file = free.next().map(PathBuf::from);
    if let Some(extra) = free.next() {
        return Err(format!("unexpected argument '{}'", extra.to_string_lossy()));
    }
    if let Some(path) = &file {
        if path.to_string_lossy().starts_with('-') {
            return Err(format!("unknown option '{}'", path.display()));
        }
    }

    Ok(Command::Run { file, config_dir })
}

/// Decodes the image named on the command line, if any.
///
/// # Errors
///
/// Returns the codec's [`crate::error::Error::Decode`]; the caller treats it
/// as fatal.
pub fn startup_image(path: Option<&Path>, codec: &dyn ImageCodec) -> Result<Option<SourceImage>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let image = codec.decode(path).inspect_err(|err| {
        tracing::error!(path = %path.display(), "startup image failed: {err}");
    })?;
    Ok(Some(image))
}
