// SPDX-License-Identifier: MPL-2.0
//! Application layer.
//!
//! - [`port`]: Trait definitions (interfaces) for the collaborators the
//!   viewport core talks to: image codec, clipboard, print spooler and the
//!   display surface.
//!
//! # Dependency Rule
//!
//! - Ports use domain types only
//! - Infrastructure implements the ports
//! - The iced layer implements [`port::DisplaySurface`] and wires everything

pub mod port;
