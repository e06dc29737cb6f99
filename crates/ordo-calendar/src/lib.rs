//! # ordo-calendar
//!
//! The 1962 Roman liturgical calendar: moveable feasts, the temporal and
//! sanctoral cycles, precedence resolution, and the caching
//! [`CalendarEngine`] that ties them together.
//!
//! ```
//! use ordo_calendar::{CalendarEngine, LiturgicalColor};
//! use ordo_time::Date;
//!
//! let engine = CalendarEngine::new();
//! let ash = engine.day(Date::from_ymd(2025, 3, 5).unwrap()).unwrap();
//! assert_eq!(ash.celebration().id(), "ash-wednesday");
//! assert_eq!(ash.color(), LiturgicalColor::Violet);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Celebrations, ranks, categories, and colors.
pub mod celebration;

/// Resolved days and the per-year calendar container.
pub mod day;

/// The caching calendar engine.
pub mod engine;

/// Easter-relative and anchor-relative dates of a year.
pub mod moveable_feasts;

/// Winner and commemorations for a single date.
pub mod precedence;

/// Fixed-date feasts, Holy Name, and Holy Family.
pub mod sanctoral;

/// Liturgical seasons.
pub mod season;

/// Engine configuration.
pub mod settings;

/// Seasons, weeks, Sundays, and feriae of the temporal cycle.
pub mod temporal;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use celebration::{Category, Celebration, LiturgicalColor, Rank};
pub use day::{LiturgicalDay, YearCalendar};
pub use engine::{build_year_calendar, CalendarEngine};
pub use moveable_feasts::{compute_moveable_feasts, MoveableFeasts};
pub use precedence::{resolve, Resolution};
pub use sanctoral::{
    build_sanctoral_cycle, holy_family_candidate, holy_family_date, holy_name_date, major_feasts,
    FixedFeast,
};
pub use season::Season;
pub use settings::{EngineSettings, DEFAULT_LOOKAHEAD_DAYS};
pub use temporal::{
    build_temporal_cycle, classify_special, make_feria, make_sunday, TemporalDay, TemporalEntry,
};
