//! # ordo-core
//!
//! Core types and error definitions for the ordo liturgical calendar.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace: the error enum, the `Result` alias, the [`ensure!`] macro, and
//! a few primitive type aliases.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A proleptic-Gregorian calendar year.
pub type Year = u16;

/// A season-relative week number (0 for the days before the first Sunday of
/// Lent, otherwise 1-based).
pub type Week = u8;

/// Precedence class of a celebration (1 = highest).
pub type PrecedenceClass = u8;

/// First year of the Gregorian reform; the computus is meaningless before it.
pub const FIRST_GREGORIAN_YEAR: Year = 1583;

/// Last year representable by the four-digit civil dates used here.
pub const LAST_SUPPORTED_YEAR: Year = 9999;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
