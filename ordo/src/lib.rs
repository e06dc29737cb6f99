//! # ordo
//!
//! The Roman liturgical calendar of 1962 in Rust.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `ordo-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! ordo = "0.1"
//! ```
//!
//! ```rust
//! use ordo::calendar::CalendarEngine;
//! use ordo::time::Date;
//!
//! let engine = CalendarEngine::new();
//! let christmas = engine.day(Date::from_ymd(2025, 12, 25)?).unwrap();
//! assert_eq!(christmas.celebration().id(), "christmas");
//! # Ok::<(), ordo::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and primitive aliases.
pub use ordo_core as core;

/// Civil dates, weekdays, months, and the computus.
pub use ordo_time as time;

/// Cycles, precedence, and the calendar engine.
pub use ordo_calendar as calendar;

