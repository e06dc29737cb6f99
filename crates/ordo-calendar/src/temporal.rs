//! Temporal cycle: the season and week of every date, and the celebrations
//! the temporal cycle itself assigns (Sundays, feriae, Easter-dependent
//! feasts, ember and rogation days).

use ordo_core::errors::Result;
use ordo_core::{Week, Year};
use ordo_time::{Date, Weekday};

use crate::celebration::{Category, Celebration, LiturgicalColor, Rank};
use crate::moveable_feasts::{compute_moveable_feasts, MoveableFeasts};
use crate::season::Season;

/// Season and season-relative week of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemporalEntry {
    /// Season containing the date.
    pub season: Season,
    /// Week within the season.  Lent uses week 0 for Ash Wednesday and the
    /// three days after it.
    pub week: Week,
}

impl TemporalEntry {
    fn new(season: Season, week: Week) -> Self {
        Self { season, week }
    }
}

/// One row of the temporal cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalDay {
    /// The date.
    pub date: Date,
    /// Season and week.
    pub entry: TemporalEntry,
    /// A celebration overriding the plain Sunday or feria, if any.
    pub special: Option<Celebration>,
}

impl TemporalDay {
    /// The temporal celebration of the day: the special one if present,
    /// otherwise the plain Sunday or feria of the season and week.
    pub fn celebration(&self) -> Celebration {
        match &self.special {
            Some(special) => special.clone(),
            None if self.date.is_sunday() => make_sunday(self.entry.season, self.entry.week),
            None => make_feria(self.entry.season, self.entry.week, self.date),
        }
    }
}

/// Build the temporal cycle of `year`: one [`TemporalDay`] per date from
/// January 1 to December 31, in date order.
///
/// Each call rebuilds from scratch.
pub fn build_temporal_cycle(year: Year) -> Result<Vec<TemporalDay>> {
    let mf = compute_moveable_feasts(year)?;
    let epiphany = Date::from_ymd(year, 1, 6)?;
    let christmas = Date::from_ymd(year, 12, 25)?;
    let days = Date::range_inclusive(Date::first_of_year(year)?, Date::last_of_year(year)?)
        .map(|date| TemporalDay {
            date,
            entry: temporal_entry(date, &mf, epiphany, christmas),
            special: classify_special(date, &mf),
        })
        .collect();
    Ok(days)
}

/// Week `n` (1-based) of a span that started on `start`.
fn week_since(start: Date, date: Date) -> Week {
    (start.days_between(date) / 7 + 1) as Week
}

/// Season boundaries, first match wins.
fn temporal_entry(
    date: Date,
    mf: &MoveableFeasts,
    epiphany: Date,
    christmas: Date,
) -> TemporalEntry {
    if date < epiphany {
        TemporalEntry::new(Season::Christmas, 1)
    } else if date < mf.septuagesima {
        TemporalEntry::new(Season::AfterEpiphany, week_since(epiphany, date))
    } else if date < mf.ash_wednesday {
        TemporalEntry::new(Season::Septuagesima, week_since(mf.septuagesima, date))
    } else if date < mf.passion_sunday {
        let first_sunday = mf.first_sunday_of_lent();
        if date < first_sunday {
            TemporalEntry::new(Season::Lent, 0)
        } else {
            TemporalEntry::new(Season::Lent, week_since(first_sunday, date))
        }
    } else if date < mf.palm_sunday {
        TemporalEntry::new(Season::Passiontide, 1)
    } else if date < mf.easter {
        TemporalEntry::new(Season::HolyWeek, 1)
    } else if date < mf.ascension {
        TemporalEntry::new(Season::Easter, week_since(mf.easter, date))
    } else if date <= mf.pentecost {
        TemporalEntry::new(Season::Ascensiontide, 1)
    } else if date < mf.advent1 {
        TemporalEntry::new(Season::AfterPentecost, week_since(mf.pentecost, date))
    } else if date < christmas {
        TemporalEntry::new(Season::Advent, week_since(mf.advent1, date))
    } else {
        TemporalEntry::new(Season::Christmas, 1)
    }
}

/// The special temporal celebration of `date`, if any.  Rules are tried in
/// order and the first match wins.
pub fn classify_special(date: Date, mf: &MoveableFeasts) -> Option<Celebration> {
    use Category::*;
    use LiturgicalColor::*;

    let weekday = date.weekday();
    let since_easter = mf.easter.days_between(date);
    let since_pentecost = mf.pentecost.days_between(date);

    if date == mf.easter {
        return Some(Celebration::new(
            "easter-sunday",
            "Dominica Resurrectionis",
            "Easter Sunday",
            Rank::ClassI,
            Solemnity,
            White,
            1,
        ));
    }
    if (1..7).contains(&since_easter) {
        return Some(Celebration::new(
            format!("easter-octave-{since_easter}"),
            format!("{} infra Octavam Paschae", latin_weekday(weekday)),
            format!("{weekday} within the Octave of Easter"),
            Rank::ClassI,
            WithinOctave,
            White,
            1,
        ));
    }
    if since_easter == 7 {
        return Some(Celebration::new(
            "low-sunday",
            "Dominica in Albis",
            "Low Sunday (Octave Day of Easter)",
            Rank::ClassI,
            OctaveDay,
            White,
            1,
        ));
    }
    if date == mf.ash_wednesday {
        return Some(Celebration::new(
            "ash-wednesday",
            "Feria IV Cinerum",
            "Ash Wednesday",
            Rank::ClassI,
            Feria,
            Violet,
            3,
        ));
    }
    if date == mf.palm_sunday {
        return Some(Celebration::new(
            "palm-sunday",
            "Dominica in Palmis",
            "Palm Sunday",
            Rank::ClassI,
            Sunday,
            Violet,
            2,
        ));
    }
    if date == mf.holy_thursday {
        return Some(Celebration::new(
            "holy-thursday",
            "Feria V in Cena Domini",
            "Holy Thursday",
            Rank::ClassI,
            Solemnity,
            White,
            1,
        ));
    }
    if date == mf.good_friday {
        return Some(Celebration::new(
            "good-friday",
            "Feria VI in Parasceve",
            "Good Friday",
            Rank::ClassI,
            Solemnity,
            Black,
            1,
        ));
    }
    if date == mf.holy_saturday {
        return Some(Celebration::new(
            "holy-saturday",
            "Sabbato Sancto",
            "Holy Saturday",
            Rank::ClassI,
            Solemnity,
            Violet,
            1,
        ));
    }
    if date == mf.ascension {
        return Some(Celebration::new(
            "ascension",
            "In Ascensione Domini",
            "The Ascension of Our Lord",
            Rank::ClassI,
            FeastOfLord,
            White,
            1,
        ));
    }
    if date == mf.pentecost {
        return Some(Celebration::new(
            "pentecost",
            "Dominica Pentecostes",
            "Pentecost Sunday",
            Rank::ClassI,
            Solemnity,
            Red,
            1,
        ));
    }
    if (1..7).contains(&since_pentecost) {
        return Some(Celebration::new(
            format!("pentecost-octave-{since_pentecost}"),
            format!("{} infra Octavam Pentecostes", latin_weekday(weekday)),
            format!("{weekday} within the Octave of Pentecost"),
            Rank::ClassI,
            WithinOctave,
            Red,
            1,
        ));
    }
    if date == mf.corpus_christi {
        return Some(Celebration::new(
            "corpus-christi",
            "Ss.mi Corporis Christi",
            "Corpus Christi",
            Rank::ClassI,
            FeastOfLord,
            White,
            1,
        ));
    }
    if date == mf.sacred_heart {
        return Some(Celebration::new(
            "sacred-heart",
            "Ss.mi Cordis Jesu",
            "The Most Sacred Heart of Jesus",
            Rank::ClassI,
            FeastOfLord,
            White,
            4,
        ));
    }
    if date == mf.christ_the_king {
        return Some(Celebration::new(
            "christ-the-king",
            "D.N. Jesu Christi Regis",
            "Our Lord Jesus Christ the King",
            Rank::ClassI,
            FeastOfLord,
            White,
            4,
        ));
    }
    if mf.is_ember_day(date) {
        return Some(Celebration::new(
            format!("ember-{}-{}", date.month(), date.day_of_month()),
            "Feria Quatuor Temporum",
            format!("Ember {weekday}"),
            Rank::FeriaPrivileged,
            EmberDay,
            Violet,
            8,
        ));
    }
    if mf.is_rogation_day(date) {
        return Some(Celebration::new(
            format!("rogation-{}-{}", date.month(), date.day_of_month()),
            "Feria Rogationum",
            format!("Rogation {weekday}"),
            Rank::ClassIV,
            RogationDay,
            Violet,
            11,
        ));
    }
    // Septuagesima, Sexagesima, Quinquagesima.
    for week in 1..=3 {
        if date == mf.septuagesima + 7 * (i32::from(week) - 1) {
            return Some(make_sunday(Season::Septuagesima, week));
        }
    }
    if date == mf.passion_sunday {
        return Some(make_sunday(Season::Passiontide, 1));
    }
    if is_last_sunday_after_pentecost(date, mf) {
        return Some(Celebration::new(
            "last-sunday-after-pentecost",
            "Dominica Ultima post Pentecosten",
            "Last Sunday after Pentecost",
            Rank::ClassI,
            Sunday,
            Green,
            2,
        ));
    }
    None
}

/// A Sunday after the first week following Pentecost whose successor would
/// already be Advent I.
fn is_last_sunday_after_pentecost(date: Date, mf: &MoveableFeasts) -> bool {
    date.is_sunday() && date > mf.pentecost + 7 && date < mf.advent1 && date + 7 >= mf.advent1
}

/// The plain Sunday of `season`, week `week`.
pub fn make_sunday(season: Season, week: Week) -> Celebration {
    let (color, rank, precedence) = sunday_attributes(season, week);
    let (title, title_vernacular) = match (season, week) {
        (Season::Septuagesima, 1..=3) => {
            let name = ["Septuagesima", "Sexagesima", "Quinquagesima"][week as usize - 1];
            (format!("Dominica in {name}"), format!("{name} Sunday"))
        }
        _ => (
            format!("Dominica {} {}", roman(week), season.latin_qualifier()),
            format!("{} Sunday of {}", ordinal(week), season.display_name()),
        ),
    };
    Celebration::new(
        format!("sunday-{}-{week}", season.key()),
        title,
        title_vernacular,
        rank,
        Category::Sunday,
        color,
        precedence,
    )
}

/// The plain weekday of `season`, week `week`, falling on `date`.
pub fn make_feria(season: Season, week: Week, date: Date) -> Celebration {
    let (color, rank, precedence) = feria_attributes(season);
    let weekday = date.weekday();
    let (title, title_vernacular) = if season == Season::Lent && week == 0 {
        (
            format!("{} post Cineres", latin_weekday(weekday)),
            format!("{weekday} after Ash Wednesday"),
        )
    } else {
        (
            format!(
                "{} infra hebdomadam {} {}",
                latin_weekday(weekday),
                roman(week),
                season.latin_qualifier()
            ),
            format!("{weekday} of the {} week of {}", ordinal(week), season.display_name()),
        )
    };
    Celebration::new(
        format!("feria-{}-{week}-{}", season.key(), weekday.name().to_lowercase()),
        title,
        title_vernacular,
        rank,
        Category::Feria,
        color,
        precedence,
    )
}

fn sunday_attributes(season: Season, week: Week) -> (LiturgicalColor, Rank, u8) {
    use LiturgicalColor::*;
    match season {
        Season::Advent => match week {
            1 => (Violet, Rank::ClassI, 2),
            // Gaudete
            3 => (Rose, Rank::ClassI, 6),
            _ => (Violet, Rank::ClassI, 6),
        },
        Season::Christmas | Season::AfterEpiphany => (White, Rank::ClassII, 6),
        Season::Septuagesima => (Violet, Rank::ClassII, 6),
        Season::Lent => match week {
            1 => (Violet, Rank::ClassI, 2),
            // Laetare
            4 => (Rose, Rank::ClassI, 6),
            _ => (Violet, Rank::ClassI, 6),
        },
        Season::Passiontide | Season::HolyWeek => (Violet, Rank::ClassI, 2),
        Season::Easter if week == 1 => (White, Rank::ClassI, 1),
        Season::Easter | Season::Ascensiontide => (White, Rank::ClassII, 6),
        Season::AfterPentecost => (Green, Rank::ClassII, 6),
    }
}

fn feria_attributes(season: Season) -> (LiturgicalColor, Rank, u8) {
    use LiturgicalColor::*;
    match season {
        Season::Advent | Season::Lent | Season::Passiontide => (Violet, Rank::FeriaPrivileged, 8),
        Season::HolyWeek => (Violet, Rank::ClassI, 3),
        Season::Christmas | Season::AfterEpiphany => (White, Rank::Feria, 11),
        Season::Septuagesima => (Violet, Rank::Feria, 11),
        Season::Easter | Season::Ascensiontide => (White, Rank::Feria, 11),
        Season::AfterPentecost => (Green, Rank::Feria, 11),
    }
}

/// Latin name of a weekday as used in feria titles.
fn latin_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday => "Dominica",
        Weekday::Monday => "Feria II",
        Weekday::Tuesday => "Feria III",
        Weekday::Wednesday => "Feria IV",
        Weekday::Thursday => "Feria V",
        Weekday::Friday => "Feria VI",
        Weekday::Saturday => "Sabbato",
    }
}

fn roman(n: Week) -> String {
    const DIGITS: [(u8, &str); 5] = [(40, "XL"), (10, "X"), (9, "IX"), (5, "V"), (4, "IV")];
    let mut n = n;
    let mut out = String::new();
    for (value, numeral) in DIGITS {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out.push_str(&"I".repeat(n as usize));
    out
}

fn ordinal(n: Week) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
