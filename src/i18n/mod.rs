// SPDX-License-Identifier: MPL-2.0
//! User-visible message catalog.
//!
//! Messages are Fluent (`.ftl`) resources embedded at build time from
//! `assets/i18n/`. Only the `en-US` catalog ships; keys that fail to resolve
//! render as `MISSING: <key>` so gaps are visible during development.

pub mod fluent;
