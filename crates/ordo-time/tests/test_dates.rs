//! Integration tests for `Date`, `Weekday`, and `Month`.

use proptest::prelude::*;

use ordo_time::{days_in_month, days_in_year, is_leap_year, Date, Month, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert!(!is_leap_year(2025));
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
}

#[test]
fn ordering_is_chronological() {
    assert!(date(2024, 12, 31) < date(2025, 1, 1));
    assert!(date(2025, 1, 31) < date(2025, 2, 1));
    assert!(date(2025, 2, 1) < date(2025, 2, 2));
}

#[test]
fn known_weekdays() {
    assert_eq!(date(1900, 1, 1).weekday(), Weekday::Monday);
    assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
    assert_eq!(date(2025, 3, 5).weekday(), Weekday::Wednesday);
    assert_eq!(date(2025, 12, 25).weekday(), Weekday::Thursday);
    assert_eq!(date(2024, 12, 25).weekday(), Weekday::Wednesday);
    assert_eq!(date(2022, 12, 25).weekday(), Weekday::Sunday);
}

#[test]
fn month_accessors() {
    let d = Date::from_month_day(2025, Month::November, 30).unwrap();
    assert_eq!(d.month(), 11);
    assert_eq!(d.month_of_year(), Month::November);
    assert_eq!(d.day_of_month(), 30);
    assert!(Date::from_month_day(2025, Month::November, 31).is_err());
}

#[test]
fn whole_year_iteration() {
    for year in [1900, 2000, 2024, 2025, 2100] {
        let start = Date::first_of_year(year).unwrap();
        let end = Date::last_of_year(year).unwrap();
        let days: Vec<Date> = Date::range_inclusive(start, end).collect();
        assert_eq!(days.len(), days_in_year(year) as usize);
        assert!(days.windows(2).all(|w| w[1] - w[0] == 1));
        assert!(days.iter().all(|d| d.year() == year));
    }
}

proptest! {
    #[test]
    fn serial_roundtrip(serial in Date::MIN.serial()..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        prop_assert_eq!(d.serial(), serial);
        prop_assert_eq!(Date::from_ymd(d.year(), d.month(), d.day_of_month()).unwrap(), d);
    }

    #[test]
    fn add_then_difference(serial in 1000i32..3_000_000, n in -500i32..500) {
        let d = Date::from_serial(serial).unwrap();
        let moved = d + n;
        prop_assert_eq!(moved - d, n);
        prop_assert_eq!(d.days_between(moved), n);
        prop_assert_eq!(moved.weekday().ordinal() as i32,
            ((d.weekday().ordinal() as i32 - 1 + n).rem_euclid(7)) + 1);
    }

    #[test]
    fn iso_parse_roundtrip(serial in Date::MIN.serial()..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        prop_assert_eq!(d.to_iso_string().parse::<Date>().unwrap(), d);
    }

    #[test]
    fn sunday_search_brackets_date(serial in 1000i32..3_000_000) {
        let d = Date::from_serial(serial).unwrap();
        let before = d.previous_weekday_on_or_before(Weekday::Sunday);
        let after = d.next_weekday_on_or_after(Weekday::Sunday);
        prop_assert!(before.is_sunday() && after.is_sunday());
        prop_assert!(before <= d && d <= after);
        prop_assert!(d - before < 7 && after - d < 7);
    }
}
