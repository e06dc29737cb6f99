//! Integration tests for the sanctoral cycle.

use std::collections::HashSet;

use proptest::prelude::*;

use ordo_calendar::{
    build_sanctoral_cycle, holy_family_candidate, holy_family_date, holy_name_date, major_feasts,
    Category, LiturgicalColor, Rank,
};
use ordo_time::{Date, Month, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn table_entries() {
    let feasts = major_feasts();
    let find = |id: &str| {
        feasts
            .iter()
            .find(|f| f.celebration.id() == id)
            .unwrap_or_else(|| panic!("{id} missing"))
    };

    let christmas = find("christmas");
    assert_eq!((christmas.month, christmas.day), (Month::December, 25));
    assert_eq!(christmas.celebration.precedence(), 1);
    assert_eq!(christmas.celebration.title(), "In Nativitate Domini");

    let all_souls = find("all-souls");
    assert_eq!(all_souls.celebration.color(), LiturgicalColor::Black);
    assert_eq!(all_souls.celebration.rank(), Rank::ClassI);

    let purification = find("purification-bvm");
    assert_eq!(purification.celebration.category(), Category::FeastOfLord);
    assert_eq!(purification.celebration.precedence(), 5);

    let sylvester = find("st-sylvester");
    assert_eq!(sylvester.celebration.rank(), Rank::ClassIII);
    assert_eq!(sylvester.celebration.precedence(), 9);
}

#[test]
fn every_fixed_feast_lands_on_its_date() {
    let cycle = build_sanctoral_cycle(2025).unwrap();
    for feast in major_feasts() {
        let d = feast.date_in(2025).unwrap();
        let ids: Vec<&str> = cycle[&d].iter().map(|c| c.id()).collect();
        assert!(ids.contains(&feast.celebration.id()), "{d:?} lacks {}", feast.celebration.id());
    }
}

#[test]
fn holy_name_follows_the_first_sunday() {
    let cases = [
        (2020, date(2020, 1, 5)),
        (2021, date(2021, 1, 3)),
        (2022, date(2022, 1, 2)),
        (2023, date(2023, 1, 2)),
        (2024, date(2024, 1, 2)),
        (2025, date(2025, 1, 5)),
        (2026, date(2026, 1, 4)),
    ];
    for (year, expected) in cases {
        assert_eq!(holy_name_date(year).unwrap(), expected, "{year}");
    }
    let cycle = build_sanctoral_cycle(2026).unwrap();
    assert_eq!(cycle[&date(2026, 1, 4)][0].id(), "holy-name-of-jesus");
}

#[test]
fn holy_family_candidates() {
    // Christmas 2024 was a Wednesday: first Sunday after is Dec 29.
    assert_eq!(holy_family_candidate(2025).unwrap(), date(2024, 12, 29));
    // Christmas 2021 was a Saturday: Sunday Dec 26.
    assert_eq!(holy_family_candidate(2022).unwrap(), date(2021, 12, 26));
    // Christmas 2016 was a Sunday.
    assert_eq!(holy_family_candidate(2017).unwrap(), date(2016, 12, 30));
}

#[test]
fn holy_family_never_enters_the_next_year() {
    for year in 2000..=2040 {
        assert_eq!(holy_family_date(year).unwrap(), None, "{year}");
        let cycle = build_sanctoral_cycle(year).unwrap();
        assert!(cycle.values().flatten().all(|c| c.id() != "holy-family"));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cycle_shape(year in 1583u16..=9999) {
        let cycle = build_sanctoral_cycle(year).unwrap();
        prop_assert!(cycle.keys().all(|d| d.year() == year));

        let ids: Vec<&str> = cycle.values().flatten().map(|c| c.id()).collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        prop_assert_eq!(ids.len(), unique.len());
        prop_assert_eq!(ids.len(), major_feasts().len() + 1);

        let holy_name = holy_name_date(year).unwrap();
        prop_assert!(holy_name >= date(year, 1, 2) && holy_name <= date(year, 1, 5));
        prop_assert!(holy_name.weekday() == Weekday::Sunday || holy_name == date(year, 1, 2));
    }

    #[test]
    fn holy_family_candidate_is_in_the_octave(year in 1584u16..=9999) {
        let candidate = holy_family_candidate(year).unwrap();
        prop_assert!(candidate >= date(year - 1, 12, 26));
        prop_assert!(candidate <= date(year, 1, 1));
        prop_assert!(candidate.is_sunday() || candidate == date(year - 1, 12, 30));
    }
}
