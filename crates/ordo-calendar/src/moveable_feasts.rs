//! Moveable feasts: every date of the year that hangs off Easter or off a
//! fixed calendar anchor.

use ordo_core::errors::Result;
use ordo_core::Year;
use ordo_time::{easter, Date, Weekday};

use crate::settings::check_gregorian_year;

/// The moveable dates of one liturgical year.
///
/// All fields except [`christ_the_king`](Self::christ_the_king) and
/// [`advent1`](Self::advent1) are fixed offsets from Easter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveableFeasts {
    /// Easter Sunday.
    pub easter: Date,
    /// Septuagesima Sunday (Easter − 63).
    pub septuagesima: Date,
    /// Ash Wednesday (Easter − 46).
    pub ash_wednesday: Date,
    /// Passion Sunday (Easter − 14).
    pub passion_sunday: Date,
    /// Palm Sunday (Easter − 7).
    pub palm_sunday: Date,
    /// Holy Thursday (Easter − 3).
    pub holy_thursday: Date,
    /// Good Friday (Easter − 2).
    pub good_friday: Date,
    /// Holy Saturday (Easter − 1).
    pub holy_saturday: Date,
    /// Ascension Thursday (Easter + 39).
    pub ascension: Date,
    /// Pentecost Sunday (Easter + 49).
    pub pentecost: Date,
    /// Corpus Christi (Easter + 60).
    pub corpus_christi: Date,
    /// Sacred Heart (Corpus Christi + 8).
    pub sacred_heart: Date,
    /// Christ the King: the last Sunday of October.
    pub christ_the_king: Date,
    /// First Sunday of Advent: the Sunday nearest November 30.
    pub advent1: Date,
    /// Ember Wednesday, Friday, and Saturday of Lent, Pentecost, September,
    /// and Advent, in that order.
    pub ember_days: [Date; 12],
    /// Monday, Tuesday, and Wednesday before the Ascension.
    pub rogation_days: [Date; 3],
}

/// Ember days fall on Wednesday, Friday, and Saturday after their anchor
/// Sunday.
const EMBER_OFFSETS: [i32; 3] = [3, 5, 6];

impl MoveableFeasts {
    /// First Sunday of Lent (Ash Wednesday + 4).
    pub fn first_sunday_of_lent(&self) -> Date {
        self.ash_wednesday + 4
    }

    /// Low Sunday, the octave day of Easter (Easter + 7).
    pub fn low_sunday(&self) -> Date {
        self.easter + 7
    }

    /// Third Sunday of Advent (Advent I + 14).
    pub fn advent3(&self) -> Date {
        self.advent1 + 14
    }

    /// Whether `date` is one of the twelve ember days.
    pub fn is_ember_day(&self, date: Date) -> bool {
        self.ember_days.contains(&date)
    }

    /// Whether `date` is one of the three rogation days.
    pub fn is_rogation_day(&self, date: Date) -> bool {
        self.rogation_days.contains(&date)
    }
}

/// Compute the moveable feasts of `year`.
///
/// # Errors
/// Returns [`Error::YearOutOfRange`](ordo_core::Error::YearOutOfRange) for
/// years before the Gregorian reform.
pub fn compute_moveable_feasts(year: Year) -> Result<MoveableFeasts> {
    let year = check_gregorian_year(year)?;
    let e = easter(year);
    let ash_wednesday = e - 46;
    let ascension = e + 39;
    let pentecost = e + 49;
    let corpus_christi = e + 60;

    let christ_the_king =
        Date::from_ymd(year, 10, 31)?.previous_weekday_on_or_before(Weekday::Sunday);
    let advent1 = sunday_nearest(Date::from_ymd(year, 11, 30)?);

    let first_sunday_of_lent = ash_wednesday + 4;
    let third_sunday_of_september = Date::from_ymd(year, 9, 1)?
        .next_weekday_on_or_after(Weekday::Sunday)
        + 14;
    let third_sunday_of_advent = advent1 + 14;

    let anchors = [
        first_sunday_of_lent,
        pentecost,
        third_sunday_of_september,
        third_sunday_of_advent,
    ];
    let ember_days: [Date; 12] = std::array::from_fn(|i| anchors[i / 3] + EMBER_OFFSETS[i % 3]);

    Ok(MoveableFeasts {
        easter: e,
        septuagesima: e - 63,
        ash_wednesday,
        passion_sunday: e - 14,
        palm_sunday: e - 7,
        holy_thursday: e - 3,
        good_friday: e - 2,
        holy_saturday: e - 1,
        ascension,
        pentecost,
        corpus_christi,
        sacred_heart: corpus_christi + 8,
        christ_the_king,
        advent1,
        ember_days,
        rogation_days: [ascension - 3, ascension - 2, ascension - 1],
    })
}

/// The Sunday nearest `date`; a tie (Wednesday) resolves backwards.
fn sunday_nearest(date: Date) -> Date {
    let d = date.weekday().days_from_sunday() as i32;
    if d <= 3 {
        date - d
    } else {
        date + (7 - d)
    }
}
