// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Zoom**: zoom factors and scale bounds
//! - **Files**: default save suffix
//! - **Print**: paper geometry used to lay out printed pages

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale factor of one image pixel per device pixel.
pub const DEFAULT_SCALE_FACTOR: f64 = 1.0;

/// Multiplier applied by a single zoom-in step.
pub const ZOOM_FACTOR_IN: f64 = 1.25;

/// Multiplier applied by a single zoom-out step.
pub const ZOOM_FACTOR_OUT: f64 = 0.8;

/// Smallest scale factor reachable through zoom steps.
pub const MIN_SCALE_FACTOR: f64 = 0.1;

/// Largest scale factor reachable through zoom steps.
pub const MAX_SCALE_FACTOR: f64 = 10.0;

/// Most pixels a displayed bitmap may hold: 512 MiB of RGBA8, the same
/// allocation limit the `image` decoder applies.
pub const MAX_RENDER_PIXELS: u64 = 512 * 1024 * 1024 / 4;

// ==========================================================================
// File Defaults
// ==========================================================================

/// Extension appended to a save path that has none.
pub const DEFAULT_SAVE_EXTENSION: &str = "jpg";

// ==========================================================================
// Print Defaults (A4 portrait)
// ==========================================================================

pub const DEFAULT_PAPER_WIDTH_MM: f32 = 210.0;
pub const DEFAULT_PAPER_HEIGHT_MM: f32 = 297.0;
pub const DEFAULT_PRINT_DPI: u32 = 150;
pub const DEFAULT_PRINT_MARGIN_MM: f32 = 10.0;

/// DPI bounds accepted from the config file.
pub const MIN_PRINT_DPI: u32 = 72;
pub const MAX_PRINT_DPI: u32 = 600;
