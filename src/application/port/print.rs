// SPDX-License-Identifier: MPL-2.0
//! Print spooling port.

use crate::domain::image::RenderedBitmap;
use crate::error::Result;

/// A fully composed page, ready for the printer.
#[derive(Debug, Clone)]
pub struct PrintJob {
    /// Job name shown in the printer queue.
    pub title: String,
    /// The whole sheet, margins included.
    pub page: RenderedBitmap,
    /// Resolution the page was composed at.
    pub dpi: u32,
}

pub trait PrintSpooler {
    /// Hands `job` to the platform print system.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Print`] when the job cannot be queued.
    fn submit(&self, job: &PrintJob) -> Result<()>;
}
