//! # ordo-time
//!
//! Civil-calendar primitives for ordo: the `Date` triple, weekdays, months,
//! and the Gregorian computus.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Gregorian Easter computation.
pub mod computus;

/// `Date` type and calendar arithmetic.
pub mod date;

/// Months of the year.
pub mod month;

/// Days of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use computus::easter;
pub use date::{days_in_month, is_leap_year, Date, DateRange};
pub use month::{days_in_year, Month};
pub use weekday::Weekday;
