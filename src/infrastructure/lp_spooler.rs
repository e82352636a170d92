// SPDX-License-Identifier: MPL-2.0
//! Print spooling through the CUPS `lp` command.
//!
//! The composed page is written to a temporary PNG and handed to `lp` with
//! its resolution, so the printer reproduces the sheet at physical size.

use crate::application::port::{PrintJob, PrintSpooler};
use crate::error::{Error, Result};
use image_rs::{ExtendedColorType, ImageFormat};
use std::process::Command;

const DEFAULT_PROGRAM: &str = "lp";

#[derive(Debug, Clone)]
pub struct LpSpooler {
    program: String,
}

impl LpSpooler {
    /// Spooler that runs `program` instead of `lp`.
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for LpSpooler {
    fn default() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }
}

impl PrintSpooler for LpSpooler {
    fn submit(&self, job: &PrintJob) -> Result<()> {
        if !cfg!(unix) {
            return Err(Error::Print(
                "printing is only supported through CUPS".to_string(),
            ));
        }

        let file = tempfile::Builder::new()
            .prefix("iced-peek-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| Error::Print(e.to_string()))?;
        let size = job.page.size();
        image_rs::save_buffer_with_format(
            file.path(),
            job.page.rgba_bytes(),
            size.width,
            size.height,
            ExtendedColorType::Rgba8,
            ImageFormat::Png,
        )
        .map_err(|e| Error::Print(e.to_string()))?;

        tracing::debug!(program = %self.program, title = %job.title, "spooling page");
        let output = Command::new(&self.program)
            .arg("-t")
            .arg(&job.title)
            .arg("-o")
            .arg(format!("ppi={}", job.dpi))
            .arg(file.path())
            .output()
            .map_err(|e| Error::Print(format!("{}: {e}", self.program)))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(Error::Print(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )))
        }
    }
}
