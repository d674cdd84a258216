/*!
Proleptic Gregorian calendar arithmetic over raw instants.

A raw instant is a signed 64-bit count of microseconds since
`0001-01-01T00:00:00`. Years in this module are numbered the way people
write them: there is no year `0`, so the year before `1` is `-1` (1 BC).
Internally, routines convert to astronomical numbering (where 1 BC is year
`0`) so that one set of formulas with Euclidean division covers both eras.

A year of `0` passed to any routine here is treated as `-1`.

# Example

```
use tzrule::civil::{self, Weekday};

let days = civil::days_from_date(2024, 3, 10);
assert_eq!(civil::date_from_days(days), (2024, 3, 10));
assert_eq!(civil::weekday_from_days(days), Weekday::Sunday);
assert!(civil::is_leap_year(2024));
assert!(civil::is_leap_year(-1));
assert_eq!(civil::next_year(-1), 1);
```
*/

pub use self::weekday::Weekday;

mod weekday;

pub(crate) const MICROS_PER_HOUR: i64 = 3_600_000_000;
pub(crate) const MICROS_PER_DAY: i64 = 24 * MICROS_PER_HOUR;

/// The number of days before the first of each month in a non-leap year.
/// The thirteenth entry is the length of the year.
const DAYS_BEFORE_MONTH: [i16; 13] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];

const DAYS_PER_400_YEARS: i64 = 146_097;
const DAYS_PER_100_YEARS: i64 = 36_524;
const DAYS_PER_4_YEARS: i64 = 1_461;

/// Returns true if the given proleptic year is a leap year.
///
/// Since there is no year `0`, the year `-1` corresponds to astronomical
/// year `0` and is a leap year. So are `-5`, `-9` and so on.
pub const fn is_leap_year(year: i32) -> bool {
    let year = astronomical(year);
    // A year divisible by 25 is divisible by 100 exactly when it is also
    // divisible by 4, so checking 16 covers the 400 year rule too.
    let d = if year % 25 != 0 { 4 } else { 16 };
    year.rem_euclid(d) == 0
}

/// Returns the number of days in the given month (`1..=12`).
///
/// Months outside that range are clamped into it.
pub const fn days_in_month(month: i8, is_leap: bool) -> i8 {
    let month = clamp_month(month);
    if month == 2 {
        if is_leap {
            29
        } else {
            28
        }
    } else {
        30 | (month ^ (month >> 3))
    }
}

/// Returns the number of days from the epoch to January 1st of `year`.
///
/// This is negative for years before `1`.
pub const fn days_until_year(year: i32) -> i64 {
    let y = astronomical(year) - 1;
    365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

/// Returns the zero based day of the year on which the given month starts.
///
/// Months outside of `1..=12` are clamped into that range.
pub const fn day_of_year_from_month(month: i8, is_leap: bool) -> i16 {
    let month = clamp_month(month);
    let days = DAYS_BEFORE_MONTH[(month - 1) as usize];
    if is_leap && month > 2 {
        days + 1
    } else {
        days
    }
}

/// Converts a zero based day of the year into a month (`1..=12`) and a day
/// of the month (`1..=31`).
///
/// Days outside the year are clamped to its first or last day.
pub const fn month_from_day_of_year(
    day_of_year: i16,
    is_leap: bool,
) -> (i8, i8) {
    let last = if is_leap { 365 } else { 364 };
    let day_of_year = if day_of_year < 0 {
        0
    } else if day_of_year > last {
        last
    } else {
        day_of_year
    };
    let mut month = 12;
    while month > 1 && day_of_year_from_month(month, is_leap) > day_of_year {
        month -= 1;
    }
    let day = day_of_year - day_of_year_from_month(month, is_leap) + 1;
    (month, day as i8)
}

/// Returns the proleptic year containing the given day, counted from the
/// epoch.
pub const fn year_from_days(days: i64) -> i32 {
    let n400 = days.div_euclid(DAYS_PER_400_YEARS);
    let mut rem = days.rem_euclid(DAYS_PER_400_YEARS);
    // The last day of a 400 year cycle is the 366th day of a leap century,
    // which is why the century (and year) counts are capped.
    let n100 = min(rem / DAYS_PER_100_YEARS, 3);
    rem -= n100 * DAYS_PER_100_YEARS;
    let n4 = rem / DAYS_PER_4_YEARS;
    rem -= n4 * DAYS_PER_4_YEARS;
    let n1 = min(rem / 365, 3);
    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1 + 1;
    proleptic(year)
}

/// Returns the zero based day of the year for the given day, counted from
/// the epoch.
pub const fn day_of_year_from_days(days: i64) -> i16 {
    (days - days_until_year(year_from_days(days))) as i16
}

/// Returns the number of days from the epoch to the given date.
///
/// The month is clamped to `1..=12`. The day is not validated, so
/// `(2024, 1, 32)` is the same as `(2024, 2, 1)`.
pub const fn days_from_date(year: i32, month: i8, day: i8) -> i64 {
    let doy = day_of_year_from_month(month, is_leap_year(year));
    days_until_year(year) + doy as i64 + day as i64 - 1
}

/// Returns the year, month and day for the given day, counted from the
/// epoch.
pub const fn date_from_days(days: i64) -> (i32, i8, i8) {
    let year = year_from_days(days);
    let doy = (days - days_until_year(year)) as i16;
    let (month, day) = month_from_day_of_year(doy, is_leap_year(year));
    (year, month, day)
}

/// Returns the day of the week for the given day, counted from the epoch.
///
/// The epoch, `0001-01-01`, is a Monday.
pub const fn weekday_from_days(days: i64) -> Weekday {
    Weekday::from_days_since_sunday(days + 1)
}

/// Returns the number of whole days from the epoch to the given raw
/// instant. This rounds toward negative infinity.
pub const fn days_from_raw(raw: i64) -> i64 {
    raw.div_euclid(MICROS_PER_DAY)
}

/// Returns the proleptic year containing the given raw instant.
pub const fn year_from_raw(raw: i64) -> i32 {
    year_from_days(days_from_raw(raw))
}

/// Returns the hour of the day (`0..=23`) of the given raw instant.
pub const fn hours_from_raw(raw: i64) -> i8 {
    (raw.rem_euclid(MICROS_PER_DAY) / MICROS_PER_HOUR) as i8
}

/// Returns the raw instant at the start of the given day, counted from the
/// epoch. This saturates at the limits of `i64`.
pub const fn raw_from_days(days: i64) -> i64 {
    days.saturating_mul(MICROS_PER_DAY)
}

/// Returns the year after the given one, skipping year `0`.
pub const fn next_year(year: i32) -> i32 {
    match year {
        -1 | 0 => 1,
        _ => year.saturating_add(1),
    }
}

/// Returns the year before the given one, skipping year `0`.
pub const fn previous_year(year: i32) -> i32 {
    match year {
        1 | 0 => -1,
        _ => year.saturating_sub(1),
    }
}

const fn astronomical(year: i32) -> i64 {
    if year < 0 {
        year as i64 + 1
    } else if year == 0 {
        0
    } else {
        year as i64
    }
}

const fn proleptic(year: i64) -> i32 {
    let year = if year <= 0 { year - 1 } else { year };
    if year < i32::MIN as i64 {
        i32::MIN
    } else if year > i32::MAX as i64 {
        i32::MAX
    } else {
        year as i32
    }
}

const fn clamp_month(month: i8) -> i8 {
    if month < 1 {
        1
    } else if month > 12 {
        12
    } else {
        month
    }
}

const fn min(a: i64, b: i64) -> i64 {
    if a < b {
        a
    } else {
        b
    }
}
