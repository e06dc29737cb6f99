//! Easter dates checked against published Gregorian tables.

use ordo_time::{easter, Date, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn published_reference_years() {
    let known = [
        (1583, 4, 10),
        (1818, 3, 22),
        (1900, 4, 15),
        (1901, 4, 7),
        (1910, 3, 27),
        (1913, 3, 23),
        (1943, 4, 25),
        (1954, 4, 18),
        (1961, 4, 2),
        (1981, 4, 19),
        (2000, 4, 23),
        (2001, 4, 15),
        (2008, 3, 23),
        (2011, 4, 24),
        (2016, 3, 27),
        (2019, 4, 21),
        (2020, 4, 12),
        (2021, 4, 4),
        (2022, 4, 17),
        (2023, 4, 9),
        (2024, 3, 31),
        (2025, 4, 20),
        (2026, 4, 5),
        (2027, 3, 28),
        (2038, 4, 25),
        (2078, 4, 3),
        (2100, 3, 28),
        (2160, 3, 23),
        (2199, 4, 14),
        (2285, 3, 22),
    ];
    for (y, m, d) in known {
        assert_eq!(easter(y), date(y, m, d), "Easter {y}");
    }
}

#[test]
fn twentieth_and_twenty_first_century_in_march_or_april() {
    for year in 1900..=2199 {
        let e = easter(year);
        assert!(matches!(e.month(), 3 | 4), "Easter {year} in month {}", e.month());
        assert_eq!(e.weekday(), Weekday::Sunday);
        assert_eq!(e.year(), year);
    }
}

#[test]
fn extremes_of_the_window() {
    // Earliest possible date, March 22, last reached in 1818 and next in 2285.
    assert_eq!(easter(1818), date(1818, 3, 22));
    assert_eq!(easter(2285), date(2285, 3, 22));
    // Latest possible date, April 25.
    assert_eq!(easter(1943), date(1943, 4, 25));
    assert_eq!(easter(2038), date(2038, 4, 25));
}
