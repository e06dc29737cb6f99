//! Engine settings.
//!
//! [`EngineSettings`] is a plain value handed to
//! [`CalendarEngine::with_settings`](crate::engine::CalendarEngine::with_settings).
//! There is no process-wide instance: each engine owns its copy.

use std::ops::RangeInclusive;

use ordo_core::errors::{Error, Result};
use ordo_core::{ensure, Year, FIRST_GREGORIAN_YEAR, LAST_SUPPORTED_YEAR};
use ordo_time::Date;

/// Default number of days returned by
/// [`CalendarEngine::upcoming`](crate::engine::CalendarEngine::upcoming).
pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 7;

/// Configuration of a [`CalendarEngine`](crate::engine::CalendarEngine).
///
/// Use the builder methods (`with_*`) to override the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Date treated as "today"; `None` means the local civil date.
    evaluation_date: Option<Date>,
    /// Window size of `upcoming`.
    lookahead_days: u32,
    /// Years the engine agrees to build.
    supported_years: RangeInclusive<Year>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            evaluation_date: None,
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
            supported_years: FIRST_GREGORIAN_YEAR..=LAST_SUPPORTED_YEAR,
        }
    }
}

impl EngineSettings {
    /// Pin "today" to a fixed date.
    pub fn with_evaluation_date(mut self, date: Date) -> Self {
        self.evaluation_date = Some(date);
        self
    }

    /// Set the number of consecutive days returned by `upcoming`.
    pub fn with_lookahead_days(mut self, days: u32) -> Self {
        self.lookahead_days = days;
        self
    }

    /// Restrict the years the engine will build.
    pub fn with_supported_years(mut self, years: RangeInclusive<Year>) -> Self {
        self.supported_years = years;
        self
    }

    /// The pinned evaluation date, if any.
    pub fn evaluation_date(&self) -> Option<Date> {
        self.evaluation_date
    }

    /// Window size of `upcoming`.
    pub fn lookahead_days(&self) -> u32 {
        self.lookahead_days
    }

    /// Years the engine agrees to build.
    pub fn supported_years(&self) -> &RangeInclusive<Year> {
        &self.supported_years
    }

    /// Check the settings for consistency.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (1..=366).contains(&self.lookahead_days),
            "lookahead_days must be in [1, 366], got {}",
            self.lookahead_days
        );
        let (start, end) = (*self.supported_years.start(), *self.supported_years.end());
        if start > end {
            return Err(Error::InvalidArgument(format!(
                "supported year range {start}..={end} is empty"
            )));
        }
        if start < FIRST_GREGORIAN_YEAR || end > LAST_SUPPORTED_YEAR {
            return Err(Error::InvalidArgument(format!(
                "supported year range {start}..={end} exceeds \
                 [{FIRST_GREGORIAN_YEAR}, {LAST_SUPPORTED_YEAR}]"
            )));
        }
        Ok(())
    }

    /// Reject years outside [`supported_years`](Self::supported_years).
    pub fn check_year(&self, year: i32) -> Result<Year> {
        check_year_in(year, &self.supported_years)
    }
}

/// Reject years outside the Gregorian range the cycle builders accept.
pub(crate) fn check_gregorian_year(year: Year) -> Result<Year> {
    check_year_in(year as i32, &(FIRST_GREGORIAN_YEAR..=LAST_SUPPORTED_YEAR))
}

fn check_year_in(year: i32, range: &RangeInclusive<Year>) -> Result<Year> {
    match Year::try_from(year) {
        Ok(y) if range.contains(&y) => Ok(y),
        _ => Err(Error::YearOutOfRange {
            year,
            min: *range.start(),
            max: *range.end(),
        }),
    }
}
