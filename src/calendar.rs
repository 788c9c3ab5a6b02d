// This is a part of Timepoint.
// See README.md for license details.

//! Day counting on the proleptic Gregorian calendar.
//!
//! This is the small part of calendar arithmetic the ISO 8601 codec needs to move between
//! an epoch day and a `(year, month, day)` triple. Years are astronomical: the year before
//! 1 is 0, the one before that is -1.
//!
//! Both directions are total over the range of days covered by an `i64` second count.
//!
//! ```
//! use timepoint::calendar::{civil_from_days, days_from_civil};
//!
//! assert_eq!(days_from_civil(1970, 1, 1), 0);
//! assert_eq!(days_from_civil(2000, 3, 1), 11_017);
//! assert_eq!(civil_from_days(-1), (1969, 12, 31));
//! ```

/// Days in a 400-year Gregorian cycle.
const DAYS_PER_ERA: i64 = 146_097;
/// Days between 0000-03-01 and 1970-01-01.
const EPOCH_SHIFT: i64 = 719_468;

/// Returns `true` for leap years.
#[inline]
pub const fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// The number of days in `month` (1 through 12) of `year`.
///
/// Returns `None` for a month outside `1..=12`.
pub const fn days_in_month(year: i64, month: u32) -> Option<u32> {
    Some(match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return None,
    })
}

/// The number of days from 1970-01-01 to the given date, negative for earlier dates.
///
/// `month` and `day` are expected to be valid for `year` (see [`days_in_month`]); the
/// result for other values is unspecified. `year` must lie within
/// `-1_000_000_000_000..=1_000_000_000_000`.
pub const fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    // Shift the start of the year to March so the leap day is the last day of the year.
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let month = month as i64;
    let shifted_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * shifted_month + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - EPOCH_SHIFT
}

/// The `(year, month, day)` of the date `days` days after 1970-01-01.
///
/// This is the inverse of [`days_from_civil`].
pub const fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let days = days + EPOCH_SHIFT;
    let era = days.div_euclid(DAYS_PER_ERA);
    let day_of_era = days - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u32;
    let month = (if shifted_month < 10 { shifted_month + 3 } else { shifted_month - 9 }) as u32;
    let year = year_of_era + era * 400;
    (if month <= 2 { year + 1 } else { year }, month, day)
}
