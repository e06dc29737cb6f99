//! Sanctoral cycle: fixed-date feasts and the two floating Sundays of the
//! Christmas season.

use std::collections::BTreeMap;

use ordo_core::errors::Result;
use ordo_core::{PrecedenceClass, Year};
use ordo_time::{Date, Month, Weekday};

use crate::celebration::{Category, Celebration, LiturgicalColor, Rank};
use crate::settings::check_gregorian_year;

/// A feast celebrated on the same month and day every year.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedFeast {
    /// Month.
    pub month: Month,
    /// Day of month.
    pub day: u8,
    /// The celebration.
    pub celebration: Celebration,
}

impl FixedFeast {
    /// Date of the feast in `year`.
    pub fn date_in(&self, year: Year) -> Result<Date> {
        Date::from_month_day(year, self.month, self.day)
    }
}

#[allow(clippy::too_many_arguments)]
fn fixed(
    month: Month,
    day: u8,
    id: &str,
    title: &str,
    title_vernacular: &str,
    rank: Rank,
    category: Category,
    color: LiturgicalColor,
    precedence: PrecedenceClass,
) -> FixedFeast {
    FixedFeast {
        month,
        day,
        celebration: Celebration::new(
            id,
            title,
            title_vernacular,
            rank,
            category,
            color,
            precedence,
        ),
    }
}

/// The fixed-date feasts of the 1962 calendar, in calendar order.
///
/// None falls on February 29, so every entry has a date in every year.
#[rustfmt::skip]
pub fn major_feasts() -> Vec<FixedFeast> {
    use Category::*;
    use LiturgicalColor::*;
    use Month::*;
    use Rank::*;

    vec![
        // January
        fixed(January, 1, "circumcision", "In Circumcisione Domini", "Circumcision of Our Lord", ClassI, FeastOfLord, White, 4),
        fixed(January, 6, "epiphany", "In Epiphania Domini", "The Epiphany of Our Lord", ClassI, FeastOfLord, White, 4),
        fixed(January, 25, "conversion-of-st-paul", "Conversio S. Pauli", "Conversion of St. Paul", ClassIII, Feast, White, 9),
        fixed(January, 28, "st-thomas-aquinas", "S. Thomae de Aquino", "St. Thomas Aquinas", ClassIII, Feast, White, 9),
        // February
        fixed(February, 2, "purification-bvm", "In Purificatione B.M.V.", "Purification of the BVM (Candlemas)", ClassII, FeastOfLord, White, 5),
        fixed(February, 22, "chair-of-st-peter", "Cathedra S. Petri", "Chair of St. Peter", ClassII, Feast, White, 7),
        fixed(February, 24, "st-matthias", "S. Matthiae", "St. Matthias, Apostle", ClassII, Feast, Red, 7),
        // March
        fixed(March, 7, "st-perpetua-felicity", "Ss. Perpetuae et Felicitatis", "Sts. Perpetua and Felicity, Martyrs", ClassIII, Feast, Red, 9),
        fixed(March, 12, "st-gregory-great", "S. Gregorii I Papae", "St. Gregory the Great, Pope and Doctor", ClassIII, Feast, White, 9),
        fixed(March, 17, "st-patrick", "S. Patricii", "St. Patrick, Bishop and Confessor", ClassIII, Feast, White, 9),
        fixed(March, 19, "st-joseph", "S. Joseph Sponsi B.M.V.", "St. Joseph, Spouse of the BVM", ClassI, Solemnity, White, 4),
        fixed(March, 25, "annunciation", "In Annuntiatione B.M.V.", "The Annunciation of the BVM", ClassI, FeastOfLord, White, 4),
        // April
        fixed(April, 2, "st-francis-of-paola", "S. Francisci de Paula", "St. Francis of Paola, Confessor", ClassIII, Feast, White, 9),
        fixed(April, 25, "st-mark", "S. Marci", "St. Mark, Evangelist", ClassII, Feast, Red, 7),
        // May
        fixed(May, 1, "st-joseph-worker", "S. Joseph Opificis", "St. Joseph the Worker", ClassI, Solemnity, White, 4),
        fixed(May, 3, "finding-holy-cross", "Inventio S. Crucis", "Finding of the Holy Cross", ClassIII, Feast, Red, 9),
        fixed(May, 11, "ss-philip-james", "Ss. Philippi et Jacobi", "Sts. Philip and James, Apostles", ClassII, Feast, Red, 7),
        fixed(May, 31, "queenship-of-mary", "B.M.V. Reginae", "Queenship of the BVM", ClassII, Feast, White, 7),
        // June
        fixed(June, 24, "nativity-of-st-john-baptist", "In Nativitate S. Joannis Baptistae", "Nativity of St. John the Baptist", ClassI, Solemnity, White, 4),
        fixed(June, 29, "ss-peter-paul", "Ss. Petri et Pauli", "Sts. Peter and Paul, Apostles", ClassI, Solemnity, Red, 4),
        // July
        fixed(July, 2, "visitation-bvm", "Visitatio B.M.V.", "Visitation of the BVM", ClassII, Feast, White, 7),
        fixed(July, 25, "st-james-greater", "S. Jacobi Majoris", "St. James the Greater, Apostle", ClassII, Feast, Red, 7),
        fixed(July, 26, "st-anne", "S. Annae Matris B.M.V.", "St. Anne, Mother of the BVM", ClassII, Feast, White, 7),
        // August
        fixed(August, 6, "transfiguration", "In Transfiguratione Domini", "The Transfiguration of Our Lord", ClassII, FeastOfLord, White, 5),
        fixed(August, 10, "st-lawrence", "S. Laurentii", "St. Lawrence, Martyr", ClassII, Feast, Red, 7),
        fixed(August, 15, "assumption-bvm", "In Assumptione B.M.V.", "The Assumption of the BVM", ClassI, Solemnity, White, 4),
        fixed(August, 22, "immaculate-heart-of-mary", "Immaculati Cordis B.M.V.", "Immaculate Heart of Mary", ClassII, Feast, White, 7),
        fixed(August, 24, "st-bartholomew", "S. Bartholomaei", "St. Bartholomew, Apostle", ClassII, Feast, Red, 7),
        fixed(August, 28, "st-augustine", "S. Augustini", "St. Augustine, Bishop and Doctor", ClassIII, Feast, White, 9),
        fixed(August, 29, "beheading-john-baptist", "In Decollatione S. Joannis Baptistae", "Beheading of St. John the Baptist", ClassIII, Feast, Red, 9),
        // September
        fixed(September, 8, "nativity-bvm", "In Nativitate B.M.V.", "Nativity of the BVM", ClassII, Feast, White, 7),
        fixed(September, 14, "exaltation-holy-cross", "In Exaltatione S. Crucis", "Exaltation of the Holy Cross", ClassII, FeastOfLord, Red, 5),
        fixed(September, 15, "seven-sorrows-bvm", "Septem Dolorum B.M.V.", "Seven Sorrows of the BVM", ClassII, Feast, White, 7),
        fixed(September, 21, "st-matthew", "S. Matthaei", "St. Matthew, Apostle and Evangelist", ClassII, Feast, Red, 7),
        fixed(September, 29, "st-michael", "Dedicatio S. Michaelis Archangeli", "St. Michael the Archangel", ClassI, Solemnity, White, 4),
        // October
        fixed(October, 7, "holy-rosary", "B.M.V. a Rosario", "Our Lady of the Rosary", ClassII, Feast, White, 7),
        fixed(October, 11, "divine-motherhood-bvm", "Maternitatis B.M.V.", "Divine Motherhood of the BVM", ClassII, Feast, White, 7),
        fixed(October, 18, "st-luke", "S. Lucae", "St. Luke, Evangelist", ClassII, Feast, Red, 7),
        fixed(October, 28, "ss-simon-jude", "Ss. Simonis et Judae", "Sts. Simon and Jude, Apostles", ClassII, Feast, Red, 7),
        // November
        fixed(November, 1, "all-saints", "Omnium Sanctorum", "All Saints", ClassI, Solemnity, White, 4),
        fixed(November, 2, "all-souls", "In Commemoratione Omnium Fidelium Defunctorum", "All Souls Day", ClassI, Solemnity, Black, 4),
        fixed(November, 9, "dedication-lateran", "Dedicatio Archibasilicae Ss.mi Salvatoris", "Dedication of the Lateran Basilica", ClassII, Feast, White, 7),
        fixed(November, 11, "st-martin-of-tours", "S. Martini Episcopi", "St. Martin of Tours, Bishop", ClassIII, Feast, White, 9),
        fixed(November, 21, "presentation-bvm", "Praesentatio B.M.V.", "Presentation of the BVM", ClassIII, Feast, White, 9),
        fixed(November, 22, "st-cecilia", "S. Caeciliae", "St. Cecilia, Virgin and Martyr", ClassIII, Feast, Red, 9),
        fixed(November, 25, "st-catherine-of-alexandria", "S. Catharinae", "St. Catherine of Alexandria, Virgin and Martyr", ClassIII, Feast, Red, 9),
        fixed(November, 30, "st-andrew", "S. Andreae", "St. Andrew, Apostle", ClassII, Feast, Red, 7),
        // December
        fixed(December, 8, "immaculate-conception", "In Conceptione Immaculata B.M.V.", "Immaculate Conception of the BVM", ClassI, Solemnity, White, 4),
        fixed(December, 21, "st-thomas-apostle", "S. Thomae Apostoli", "St. Thomas, Apostle", ClassII, Feast, Red, 7),
        fixed(December, 25, "christmas", "In Nativitate Domini", "The Nativity of Our Lord", ClassI, Solemnity, White, 1),
        fixed(December, 26, "st-stephen", "S. Stephani Protomartyris", "St. Stephen, Protomartyr", ClassII, Feast, Red, 5),
        fixed(December, 27, "st-john-evangelist", "S. Joannis Apostoli et Evangelistae", "St. John, Apostle and Evangelist", ClassII, Feast, White, 5),
        fixed(December, 28, "holy-innocents", "Ss. Innocentium", "Holy Innocents", ClassII, Feast, Red, 5),
        fixed(December, 31, "st-sylvester", "S. Silvestri I", "St. Sylvester I, Pope", ClassIII, Feast, White, 9),
    ]
}

/// Build the sanctoral cycle of `year`: every date carrying at least one
/// sanctoral celebration, mapped to its candidates in table order.
///
/// Holy Name of Jesus is appended after the fixed feasts of its date, and
/// Holy Family after that.
pub fn build_sanctoral_cycle(year: Year) -> Result<BTreeMap<Date, Vec<Celebration>>> {
    let year = check_gregorian_year(year)?;
    let mut cycle: BTreeMap<Date, Vec<Celebration>> = BTreeMap::new();
    for feast in major_feasts() {
        cycle
            .entry(feast.date_in(year)?)
            .or_default()
            .push(feast.celebration);
    }

    cycle
        .entry(holy_name_date(year)?)
        .or_default()
        .push(holy_name_of_jesus());

    if let Some(date) = holy_family_date(year)? {
        cycle.entry(date).or_default().push(holy_family());
    }
    Ok(cycle)
}

/// Holy Name of Jesus: the Sunday between January 2 and 5, or January 2
/// when that span holds no Sunday.
pub fn holy_name_date(year: Year) -> Result<Date> {
    let jan2 = Date::from_ymd(year, 1, 2)?;
    let sunday = jan2.next_weekday_on_or_after(Weekday::Sunday);
    Ok(if sunday.day_of_month() <= 5 { sunday } else { jan2 })
}

/// The Sunday within the Christmas octave that began in `year - 1`.
///
/// December 30 when Christmas itself was a Sunday, otherwise the first
/// Sunday from December 26 through January 1.
pub fn holy_family_candidate(year: Year) -> Result<Date> {
    let previous = year
        .checked_sub(1)
        .ok_or_else(|| ordo_core::Error::Date(format!("no year before {year}")))?;
    let christmas = Date::from_ymd(previous, 12, 25)?;
    if christmas.is_sunday() {
        return Date::from_ymd(previous, 12, 30);
    }
    let octave = Date::range_inclusive(christmas + 1, Date::from_ymd(year, 1, 1)?);
    for date in octave {
        if date.is_sunday() {
            return Ok(date);
        }
    }
    Date::from_ymd(previous, 12, 30)
}

/// Holy Family as observed in `year`: the
/// [candidate](holy_family_candidate) if it falls inside `year`.
pub fn holy_family_date(year: Year) -> Result<Option<Date>> {
    let candidate = holy_family_candidate(year)?;
    Ok((candidate.year() == year).then_some(candidate))
}

fn holy_name_of_jesus() -> Celebration {
    Celebration::new(
        "holy-name-of-jesus",
        "Ss.mi Nominis Jesu",
        "The Most Holy Name of Jesus",
        Rank::ClassII,
        Category::FeastOfLord,
        LiturgicalColor::White,
        5,
    )
}

fn holy_family() -> Celebration {
    Celebration::new(
        "holy-family",
        "Sanctae Familiae",
        "The Holy Family",
        Rank::ClassI,
        Category::FeastOfLord,
        LiturgicalColor::White,
        4,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn table_is_ordered_and_unique() {
        let feasts = major_feasts();
        assert_eq!(feasts.len(), 54);
        let ids: HashSet<&str> = feasts.iter().map(|f| f.celebration.id()).collect();
        assert_eq!(ids.len(), feasts.len());
        assert!(feasts
            .windows(2)
            .all(|w| (w[0].month, w[0].day) < (w[1].month, w[1].day)));
    }

    #[test]
    fn holy_name() {
        // Sunday Jan 5.
        assert_eq!(holy_name_date(2025).unwrap(), date(2025, 1, 5));
        // Sunday Jan 2.
        assert_eq!(holy_name_date(2022).unwrap(), date(2022, 1, 2));
        // Jan 1 is the Sunday; no Sunday in Jan 2..=5.
        assert_eq!(holy_name_date(2023).unwrap(), date(2023, 1, 2));
    }

    #[test]
    fn holy_family_stays_in_the_previous_december() {
        assert_eq!(holy_family_candidate(2025).unwrap(), date(2024, 12, 29));
        assert_eq!(holy_family_date(2025).unwrap(), None);
        // Christmas 2022 was a Sunday.
        assert_eq!(holy_family_candidate(2023).unwrap(), date(2022, 12, 30));
        assert_eq!(holy_family_date(2023).unwrap(), None);
    }

    #[test]
    fn cycle_2025() {
        let cycle = build_sanctoral_cycle(2025).unwrap();
        let ids = |d: Date| -> Vec<String> {
            cycle
                .get(&d)
                .map(|v| v.iter().map(|c| c.id().to_owned()).collect())
                .unwrap_or_default()
        };
        assert_eq!(ids(date(2025, 1, 5)), ["holy-name-of-jesus"]);
        assert_eq!(ids(date(2025, 3, 19)), ["st-joseph"]);
        assert_eq!(ids(date(2025, 12, 25)), ["christmas"]);
        assert!(ids(date(2025, 3, 20)).is_empty());
        assert_eq!(cycle.len(), 55);
    }

    #[test]
    fn leap_years_share_the_table() {
        let cycle = build_sanctoral_cycle(2024).unwrap();
        assert!(cycle.contains_key(&date(2024, 2, 24)));
        assert!(!cycle.contains_key(&date(2024, 2, 29)));
    }

    #[test]
    fn rejects_years_before_the_reform() {
        assert!(build_sanctoral_cycle(1582).is_err());
    }
}
