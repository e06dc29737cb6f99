//! The calendar engine: builds year calendars on demand and caches them.
//!
//! A [`CalendarEngine`] owns its [`EngineSettings`] and its cache; there is
//! no process-wide instance.  Share one engine by reference (it is
//! `Send + Sync`) or wrap it in an `Arc`.
//!
//! ```
//! use ordo_calendar::CalendarEngine;
//! use ordo_time::Date;
//!
//! let engine = CalendarEngine::new();
//! let day = engine.day(Date::from_ymd(2025, 4, 20).unwrap()).unwrap();
//! assert_eq!(day.celebration().id(), "easter-sunday");
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use chrono::Datelike;
use tracing::{debug, trace};

use ordo_core::errors::{Error, Result};
use ordo_core::Year;
use ordo_time::{Date, Month};

use crate::celebration::Celebration;
use crate::day::{LiturgicalDay, YearCalendar};
use crate::precedence::resolve;
use crate::sanctoral::{build_sanctoral_cycle, major_feasts};
use crate::settings::EngineSettings;
use crate::temporal::build_temporal_cycle;

/// Builds, caches, and serves resolved liturgical calendars.
#[derive(Debug, Default)]
pub struct CalendarEngine {
    settings: EngineSettings,
    cache: Mutex<HashMap<Year, Arc<YearCalendar>>>,
    builds: AtomicUsize,
}

impl CalendarEngine {
    // ── Constructors ─────────────────────────────────────────────────────

    /// An engine with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine with the given settings.
    ///
    /// # Errors
    /// Fails if [`EngineSettings::validate`] does.
    pub fn with_settings(settings: EngineSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            ..Self::default()
        })
    }

    /// The engine's settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    // ── Calendar access ──────────────────────────────────────────────────

    /// The resolved calendar of `year`, built on first request.
    ///
    /// The cache lock is held while a year is built, so each year is built
    /// at most once per engine even under concurrent callers. Builds of
    /// different years are serialized by the same lock and do not run in
    /// parallel.
    ///
    /// # Errors
    /// [`Error::YearOutOfRange`] if `year` is outside the supported range.
    pub fn calendar(&self, year: Year) -> Result<Arc<YearCalendar>> {
        let year = self.settings.check_year(i32::from(year))?;
        let mut cache = self.cache.lock().expect("calendar cache mutex poisoned");
        if let Some(calendar) = cache.get(&year) {
            trace!(year, "calendar cache hit");
            return Ok(Arc::clone(calendar));
        }
        trace!(year, "calendar cache miss");
        let calendar = Arc::new(build_year_calendar(year)?);
        self.builds.fetch_add(1, Ordering::Relaxed);
        cache.insert(year, Arc::clone(&calendar));
        Ok(calendar)
    }

    /// The resolved day for `date`, or `None` if its year is not supported.
    pub fn day(&self, date: Date) -> Option<LiturgicalDay> {
        match self.calendar(date.year()) {
            Ok(calendar) => calendar.get(&date).cloned(),
            Err(err) => {
                trace!(%date, %err, "day lookup miss");
                None
            }
        }
    }

    /// Every day of `month` in `year`, in date order.
    pub fn days_in_month(&self, year: Year, month: Month) -> Result<Vec<LiturgicalDay>> {
        let calendar = self.calendar(year)?;
        Ok(calendar.month(month).cloned().collect())
    }

    /// The fixed-date feasts, highest precedence first.
    pub fn all_sanctoral_feasts(&self) -> Vec<Celebration> {
        let mut feasts: Vec<Celebration> =
            major_feasts().into_iter().map(|f| f.celebration).collect();
        feasts.sort_by_key(Celebration::precedence_key);
        feasts
    }

    // ── Evaluation date ──────────────────────────────────────────────────

    /// The date treated as today: the pinned evaluation date if set,
    /// otherwise the local civil date.
    pub fn evaluation_date(&self) -> Result<Date> {
        if let Some(date) = self.settings.evaluation_date() {
            return Ok(date);
        }
        let local = chrono::Local::now().date_naive();
        let year = Year::try_from(local.year())
            .map_err(|_| Error::Date(format!("local year {} out of range", local.year())))?;
        Date::from_ymd(year, local.month() as u8, local.day() as u8)
    }

    /// Today's resolved day.
    pub fn today(&self) -> Option<LiturgicalDay> {
        match self.evaluation_date() {
            Ok(date) => self.day(date),
            Err(err) => {
                trace!(%err, "no evaluation date");
                None
            }
        }
    }

    /// `lookahead_days` consecutive days starting at `from`.  Days whose
    /// year is not supported are skipped.
    pub fn upcoming(&self, from: Date) -> Vec<LiturgicalDay> {
        (0..self.settings.lookahead_days() as i32)
            .map_while(|offset| from.add_days(offset).ok())
            .filter_map(|date| self.day(date))
            .collect()
    }

    // ── Cache introspection ──────────────────────────────────────────────

    /// How many year calendars this engine has built.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }

    /// Years currently cached, ascending.
    pub fn cached_years(&self) -> Vec<Year> {
        let cache = self.cache.lock().expect("calendar cache mutex poisoned");
        let mut years: Vec<Year> = cache.keys().copied().collect();
        years.sort_unstable();
        years
    }
}

/// Build the resolved calendar of `year` without caching.
///
/// Every date of the temporal cycle gets its default-or-special temporal
/// celebration resolved against the sanctoral candidates of that date.
#[tracing::instrument(level = "debug")]
pub fn build_year_calendar(year: Year) -> Result<YearCalendar> {
    let started = Instant::now();
    let temporal = build_temporal_cycle(year)?;
    let sanctoral = build_sanctoral_cycle(year)?;

    let days = temporal.into_iter().map(|t| {
        let candidates = sanctoral.get(&t.date).map(Vec::as_slice).unwrap_or_default();
        let resolution = resolve(t.celebration(), candidates);
        LiturgicalDay::new(t.date, t.entry, resolution)
    });
    let calendar = YearCalendar::from_days(year, days);

    debug!(
        year,
        days = calendar.len(),
        elapsed = ?started.elapsed(),
        "built year calendar"
    );
    Ok(calendar)
}
