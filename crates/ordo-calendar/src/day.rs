//! Resolved days and the per-year calendar that holds them.

use std::collections::BTreeMap;

use ordo_core::{Week, Year};
use ordo_time::{Date, Month};

use crate::celebration::{Celebration, LiturgicalColor};
use crate::precedence::Resolution;
use crate::season::Season;
use crate::temporal::TemporalEntry;

/// The liturgical character of one calendar date.
///
/// The color is always the winning celebration's color. Deserialization
/// rejects records that break this.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawDay")
)]
pub struct LiturgicalDay {
    date: Date,
    season: Season,
    week: Week,
    celebration: Celebration,
    commemorations: Vec<Celebration>,
    color: LiturgicalColor,
}

impl LiturgicalDay {
    pub(crate) fn new(date: Date, entry: TemporalEntry, resolution: Resolution) -> Self {
        let Resolution {
            winner,
            commemorations,
        } = resolution;
        Self {
            date,
            season: entry.season,
            week: entry.week,
            color: winner.color(),
            celebration: winner,
            commemorations,
        }
    }

    /// The date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Season of the temporal cycle.
    pub fn season(&self) -> Season {
        self.season
    }

    /// Week within the season.
    pub fn week(&self) -> Week {
        self.week
    }

    /// The celebration whose office is said.
    pub fn celebration(&self) -> &Celebration {
        &self.celebration
    }

    /// Commemorated celebrations, highest precedence first.
    pub fn commemorations(&self) -> &[Celebration] {
        &self.commemorations
    }

    /// Liturgical color of the day.
    pub fn color(&self) -> LiturgicalColor {
        self.color
    }
}

/// Unchecked serialized form of a [`LiturgicalDay`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDay {
    date: Date,
    season: Season,
    week: Week,
    celebration: Celebration,
    commemorations: Vec<Celebration>,
    color: LiturgicalColor,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDay> for LiturgicalDay {
    type Error = ordo_core::Error;

    fn try_from(raw: RawDay) -> ordo_core::Result<Self> {
        ordo_core::ensure!(
            raw.color == raw.celebration.color(),
            "{}: color {} differs from {} of {}",
            raw.date,
            raw.color,
            raw.celebration.color(),
            raw.celebration.id()
        );
        Ok(Self {
            date: raw.date,
            season: raw.season,
            week: raw.week,
            celebration: raw.celebration,
            commemorations: raw.commemorations,
            color: raw.color,
        })
    }
}

impl std::fmt::Display for LiturgicalDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} [{}]", self.date, self.celebration, self.color)?;
        for c in &self.commemorations {
            write!(f, "; commemoration of {}", c.title_vernacular())?;
        }
        Ok(())
    }
}

/// Every resolved day of one civil year, keyed by date.
///
/// Built once by the engine and shared behind an `Arc`; there is no way to
/// mutate it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct YearCalendar {
    year: Year,
    days: BTreeMap<Date, LiturgicalDay>,
}

impl YearCalendar {
    pub(crate) fn from_days(year: Year, days: impl IntoIterator<Item = LiturgicalDay>) -> Self {
        Self {
            year,
            days: days.into_iter().map(|d| (d.date, d)).collect(),
        }
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// The civil year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Number of days (365 or 366).
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the calendar holds no days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// January 1, or `None` if empty.
    pub fn first_date(&self) -> Option<Date> {
        self.days.keys().next().copied()
    }

    /// December 31, or `None` if empty.
    pub fn last_date(&self) -> Option<Date> {
        self.days.keys().next_back().copied()
    }

    // ── Element access ───────────────────────────────────────────────────

    /// The day for `date`, if it lies in this year.
    pub fn get(&self, date: &Date) -> Option<&LiturgicalDay> {
        self.days.get(date)
    }

    /// Whether `date` lies in this year.
    pub fn contains(&self, date: &Date) -> bool {
        self.days.contains_key(date)
    }

    /// Iterate every day in date order.
    pub fn iter(&self) -> impl Iterator<Item = &LiturgicalDay> {
        self.days.values()
    }

    /// Iterate the days of `month` in date order.
    pub fn month(&self, month: Month) -> impl Iterator<Item = &LiturgicalDay> {
        let first = Date::from_month_day(self.year, month, 1).ok();
        let last = Date::from_month_day(self.year, month, month.length(self.year)).ok();
        first
            .zip(last)
            .into_iter()
            .flat_map(move |(first, last)| self.days.range(first..=last).map(|(_, d)| d))
    }
}

impl<'a> IntoIterator for &'a YearCalendar {
    type Item = &'a LiturgicalDay;
    type IntoIter = std::collections::btree_map::Values<'a, Date, LiturgicalDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.values()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
