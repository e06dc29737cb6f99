//! `Date`: a proleptic-Gregorian civil date.
//!
//! A date is stored as its (year, month, day) triple with no time-of-day
//! component, so equality and ordering are plain field-wise comparisons and
//! a date can be used directly as a map key.
//!
//! Arithmetic goes through a day serial number.
//!
//! # Serial number convention
//! * Serial 1 = January 1, year 1 (a Monday).
//! * The valid date range is 0001-01-01 to 9999-12-31.

use std::str::FromStr;

use crate::month::Month;
use crate::weekday::Weekday;
use ordo_core::errors::{Error, Result};
use ordo_core::Year;

/// A calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: Year,
    month: u8,
    day: u8,
}

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, year 1.
    pub const MIN: Date = Date::from_ymd_unchecked(1, 1, 1);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date::from_ymd_unchecked(9999, 12, 31);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date { year, month, day })
    }

    /// Create a date from a [`Month`] value.
    pub fn from_month_day(year: Year, month: Month, day: u8) -> Result<Self> {
        Self::from_ymd(year, month.number(), day)
    }

    /// Create a date from a serial number (1 = 0001-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.serial() || serial > Self::MAX.serial() {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        let (year, month, day) = ymd_from_serial(serial);
        Ok(Date { year, month, day })
    }

    /// Create a date whose components are known to be valid.
    pub(crate) const fn from_ymd_unchecked(year: Year, month: u8, day: u8) -> Self {
        Date { year, month, day }
    }

    /// First day of `year`.
    pub fn first_of_year(year: Year) -> Result<Self> {
        Self::from_ymd(year, 1, 1)
    }

    /// Last day of `year`.
    pub fn last_of_year(year: Year) -> Result<Self> {
        Self::from_ymd(year, 12, 31)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        serial_from_ymd(self.year, self.month, self.day)
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        match Month::from_number(self.month) {
            Some(m) => m,
            None => unreachable!("Date always holds a month in 1..=12"),
        }
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.day
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let mut doy = MONTH_OFFSET[self.month as usize - 1] + self.day as u16;
        if self.month > 2 && is_leap_year(self.year) {
            doy += 1;
        }
        doy
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (0001-01-01) is a Monday (ordinal 1).
        let w = ((self.serial() - 1).rem_euclid(7) + 1) as u8;
        match Weekday::from_ordinal(w) {
            Some(wd) => wd,
            None => unreachable!("rem_euclid always in 1..=7"),
        }
    }

    /// Return `true` if this date falls on a Sunday.
    pub fn is_sunday(&self) -> bool {
        self.weekday() == Weekday::Sunday
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.serial() + n;
        Self::from_serial(serial).map_err(|_| {
            Error::Date(format!("date arithmetic: {self:?} + {n} days out of range"))
        })
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.serial() - self.serial()
    }

    /// The first `weekday` falling on or after this date.
    pub fn next_weekday_on_or_after(self, weekday: Weekday) -> Self {
        let skip = (weekday.ordinal() as i32 - self.weekday().ordinal() as i32).rem_euclid(7);
        self + skip
    }

    /// The last `weekday` falling on or before this date.
    pub fn previous_weekday_on_or_before(self, weekday: Weekday) -> Self {
        let back = (self.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7);
        self - back
    }

    /// Iterate every date from `start` to `end`, both inclusive.
    ///
    /// Yields nothing if `end < start`.
    pub fn range_inclusive(start: Date, end: Date) -> DateRange {
        DateRange {
            next: Some(start),
            end,
        }
    }

    /// Format as ISO 8601 (`YYYY-MM-DD`).
    pub fn to_iso_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// ── Iteration ─────────────────────────────────────────────────────────────────

/// Iterator over consecutive dates, created by [`Date::range_inclusive`].
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<Date>,
    end: Date,
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next.filter(|d| *d <= self.end)?;
        self.next = current.add_days(1).ok();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match self.next {
            Some(d) if d <= self.end => (d.days_between(self.end) + 1) as usize,
            _ => 0,
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRange {}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.serial() - rhs.serial()
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_of_year(), self.year)
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.to_iso_string())
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::Date(format!("expected YYYY-MM-DD, got {s:?}"));
        let mut parts = s.trim().splitn(3, '-');
        let mut field = || parts.next().ok_or_else(invalid);
        let (y, m, d) = (field()?, field()?, field()?);
        let year = y.parse::<Year>().map_err(|_| invalid())?;
        let month = m.parse::<u8>().map_err(|_| invalid())?;
        let day = d.parse::<u8>().map_err(|_| invalid())?;
        Date::from_ymd(year, month, day)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_iso_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a serial number.
fn serial_from_ymd(year: Year, month: u8, day: u8) -> i32 {
    let prior = year as i32 - 1;
    // Days in the complete years before `year`, Gregorian leap rule.
    let mut serial = prior * 365 + prior / 4 - prior / 100 + prior / 400;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (Year, u8, u8) {
    // 146097 days per 400-year cycle; estimate then correct.
    let mut y = ((serial as i64 * 400) / 146_097 + 1).clamp(1, 9999) as Year;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if y < 9999 && serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(date(1, 1, 1).serial(), 1);
        assert_eq!(date(1, 1, 1).weekday(), Weekday::Monday);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1, 1, 1),
            (1582, 10, 15),
            (1900, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2024, 12, 31),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let original = date(y, m, d);
            let back = Date::from_serial(original.serial()).unwrap();
            assert_eq!(back, original, "serial roundtrip failed for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
        // 2024-01-06 is a Saturday
        assert_eq!(date(2024, 1, 6).weekday(), Weekday::Saturday);
        // 2025-04-20 is Easter Sunday
        assert!(date(2025, 4, 20).is_sunday());
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(date(2025, 1, 1).day_of_year(), 1);
        assert_eq!(date(2025, 12, 31).day_of_year(), 365);
        assert_eq!(date(2024, 12, 31).day_of_year(), 366);
        assert_eq!(date(2024, 3, 1).day_of_year(), 61);
    }

    #[test]
    fn test_arithmetic() {
        let d = date(2023, 1, 1);
        let d2 = d + 31;
        assert_eq!(d2, date(2023, 2, 1));
        assert_eq!(date(2023, 2, 1) - d, 31);
        assert_eq!(date(2025, 1, 1) - 1, date(2024, 12, 31));
        assert_eq!(date(2024, 2, 28) + 1, date(2024, 2, 29));
    }

    #[test]
    fn test_add_days_out_of_range() {
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
    }

    #[test]
    fn test_invalid_components() {
        assert!(Date::from_ymd(2025, 2, 29).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
        assert!(Date::from_ymd(2025, 4, 0).is_err());
        assert!(Date::from_ymd(0, 1, 1).is_err());
        assert!(Date::from_ymd(10000, 1, 1).is_err());
    }

    #[test]
    fn test_weekday_search() {
        // 2025-10-31 is a Friday; the Sunday on or before is Oct 26.
        let oct31 = date(2025, 10, 31);
        assert_eq!(oct31.previous_weekday_on_or_before(Weekday::Sunday), date(2025, 10, 26));
        assert_eq!(oct31.next_weekday_on_or_after(Weekday::Sunday), date(2025, 11, 2));
        // A Sunday is its own on-or-before / on-or-after Sunday.
        let sun = date(2025, 4, 20);
        assert_eq!(sun.previous_weekday_on_or_before(Weekday::Sunday), sun);
        assert_eq!(sun.next_weekday_on_or_after(Weekday::Sunday), sun);
    }

    #[test]
    fn test_range_inclusive() {
        let days: Vec<Date> = Date::range_inclusive(date(2024, 2, 27), date(2024, 3, 1)).collect();
        assert_eq!(
            days,
            vec![date(2024, 2, 27), date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]
        );
        assert_eq!(Date::range_inclusive(date(2024, 3, 1), date(2024, 2, 1)).count(), 0);
        assert_eq!(Date::range_inclusive(date(2025, 1, 1), date(2025, 12, 31)).len(), 365);
        // The range ends cleanly at the last representable date.
        assert_eq!(Date::range_inclusive(date(9999, 12, 30), Date::MAX).count(), 2);
    }

    #[test]
    fn test_display_and_parse() {
        let d = date(2025, 4, 20);
        assert_eq!(d.to_string(), "20 April 2025");
        assert_eq!(format!("{d:?}"), "Date(2025-04-20)");
        assert_eq!("2025-04-20".parse::<Date>().unwrap(), d);
        assert!("2025-02-30".parse::<Date>().is_err());
        assert!("20 April 2025".parse::<Date>().is_err());
    }
}
