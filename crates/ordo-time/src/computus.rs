//! Gregorian computus: the date of Easter Sunday.
//!
//! Uses the Anonymous Gregorian algorithm (Meeus/Jones/Butcher), a closed
//! form in integer arithmetic with no iteration and no failure path.

use crate::date::Date;
use ordo_core::Year;

/// Easter Sunday of `year` in the Gregorian rite.
///
/// Valid for every year of the Gregorian calendar (1583 onwards); the result
/// always falls between March 22 and April 25.
///
/// ```
/// use ordo_time::{computus::easter, Date};
/// assert_eq!(easter(2025), Date::from_ymd(2025, 4, 20).unwrap());
/// ```
pub fn easter(year: Year) -> Date {
    let (month, day) = easter_month_day(year);
    Date::from_ymd_unchecked(year, month, day)
}

/// Month (3 or 4) and day of Easter Sunday.
pub fn easter_month_day(year: Year) -> (u8, u8) {
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    ((n / 31) as u8, (n % 31 + 1) as u8)
}
