//! # ec-core
//!
//! Core types and error definitions for ethiocal.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace – the error hierarchy, the language
//! selection used for localised names, and the explicit text parsers that
//! turn user input into typed integers before any calendar arithmetic runs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure_range!` / `fail!` macros.
pub mod errors;

/// Language selection for localised names.
pub mod language;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use language::Language;
