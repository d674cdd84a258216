use crate::civil::{self, Weekday, MICROS_PER_HOUR};

// The packed layout. Everything fits in the low 22 bits of a `u32`.
//
//   bits 0..=5    hour of the day
//   bits 6..=8    days offset magnitude
//   bit  9        days offset sign (set when negative)
//   bits 10..=19  payload, depending on the rule type
//   bits 20..=21  rule type
//
// Payloads:
//
//   Fixed     10-bit day of year
//   Date      4-bit month, then 6-bit day of month
//   Floating  4-bit month, then 3-bit weekday (Sunday=1), then 3-bit week
//             index (First=0, Last=4)
const HOUR_MASK: u32 = 0x3F;
const DAYS_OFFSET_SHIFT: u32 = 6;
const DAYS_OFFSET_MASK: u32 = 0xF;
const PAYLOAD_SHIFT: u32 = 10;
const PAYLOAD_MASK: u32 = 0x3FF;
const KIND_SHIFT: u32 = 20;
const KIND_MASK: u32 = 0b11;

const KIND_NO_DST: u32 = 0;
const KIND_FIXED: u32 = 1;
const KIND_DATE: u32 = 2;
const KIND_FLOATING: u32 = 3;

/// The type of a [`TransitionRule`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TransitionRuleType {
    /// The rule is absent. No transition ever happens.
    NoDst,
    /// A zero based day of the year, counting February 29th in leap years.
    Fixed,
    /// A month and day of the month.
    Date,
    /// The first, second, third, fourth or last occurrence of a weekday in
    /// a month.
    Floating,
}

/// Which occurrence of a weekday in a month a floating rule refers to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Week {
    First,
    Second,
    Third,
    Fourth,
    /// The last occurrence, which is either the fourth or the fifth.
    Last,
}

impl Week {
    /// Converts a zero based index (`First` is `0` and `Last` is `4`) to a
    /// week.
    pub const fn from_index(index: i8) -> Option<Week> {
        Some(match index {
            0 => Week::First,
            1 => Week::Second,
            2 => Week::Third,
            3 => Week::Fourth,
            4 => Week::Last,
            _ => return None,
        })
    }

    /// Returns the zero based index of this week.
    pub const fn index(self) -> i8 {
        self as i8
    }

    /// Converts the `w` of a POSIX `Mm.w.d` rule (`1..=5`, where `5` means
    /// "last") to a week.
    pub const fn from_posix(week: i8) -> Option<Week> {
        Week::from_index(week - 1)
    }

    /// Returns the `w` of a POSIX `Mm.w.d` rule for this week.
    pub const fn to_posix(self) -> i8 {
        self.index() + 1
    }
}

/// A rule describing when in a year a daylight saving time transition
/// happens.
///
/// A rule is one of three kinds of days plus the hour of the day at which
/// the transition occurs:
///
/// * A [fixed](TransitionRule::fixed) zero based day of the year (leap days
/// counted).
/// * A [date](TransitionRule::date), i.e., a month and day of the month.
/// * A [floating](TransitionRule::floating) day, like "the second Sunday in
/// March" or "the last Friday before April 2nd".
///
/// Or it is [absent](TransitionRule::NO_DST), in which case no transition
/// ever happens.
///
/// Date and floating rules also carry a signed days offset that shifts the
/// computed day. This is how, e.g., Israel's "Friday before the last Sunday
/// of March" is expressed. The days offset is always in the range
/// `-8..=7`.
///
/// Rules convert to and from a compact 24-bit form with
/// [`TransitionRule::to_packed`] and [`TransitionRule::from_packed`].
/// Fields are not validated on construction. Values that don't fit the
/// packed layout are silently truncated by it.
///
/// # Example
///
/// ```
/// use tzrule::{civil::Weekday, tz::{TransitionRule, Week}};
///
/// // The second Sunday in March at 02:00.
/// let rule =
///     TransitionRule::floating(2, 3, Weekday::Sunday, Week::Second, 0);
/// assert_eq!(rule.day_of_year_of_transition(2024), Some(69));
/// assert_eq!(rule.to_string(), "M3.2.0/2");
/// assert_eq!(TransitionRule::from_packed(rule.to_packed()), rule);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TransitionRule {
    day: RuleDay,
    days_offset: i8,
    hour: i8,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
enum RuleDay {
    NoDst,
    Fixed { day_of_year: i16 },
    Date { month: i8, day: i8 },
    Floating { month: i8, weekday: Weekday, week: Week },
}

impl TransitionRule {
    /// The smallest days offset a rule can hold.
    pub const MIN_DAYS_OFFSET: i8 = -8;

    /// The largest days offset a rule can hold.
    pub const MAX_DAYS_OFFSET: i8 = 7;

    /// The absent rule.
    pub const NO_DST: TransitionRule =
        TransitionRule { day: RuleDay::NoDst, days_offset: 0, hour: 0 };

    /// A rule firing on the given zero based day of the year (`0..=365`).
    pub const fn fixed(hour: i8, day_of_year: i16) -> TransitionRule {
        TransitionRule {
            day: RuleDay::Fixed { day_of_year },
            days_offset: 0,
            hour: normalize_hour(hour),
        }
    }

    /// A rule firing on the given day (`1..=31`) of the given month
    /// (`1..=12`), shifted by `days_offset` days.
    pub const fn date(
        hour: i8,
        month: i8,
        day: i8,
        days_offset: i8,
    ) -> TransitionRule {
        TransitionRule {
            day: RuleDay::Date { month, day },
            days_offset: normalize_days_offset(days_offset),
            hour: normalize_hour(hour),
        }
    }

    /// A rule firing on the given occurrence of `weekday` in the given month
    /// (`1..=12`), shifted by `days_offset` days.
    pub const fn floating(
        hour: i8,
        month: i8,
        weekday: Weekday,
        week: Week,
        days_offset: i8,
    ) -> TransitionRule {
        TransitionRule {
            day: RuleDay::Floating { month, weekday, week },
            days_offset: normalize_days_offset(days_offset),
            hour: normalize_hour(hour),
        }
    }

    pub fn set_fixed(&mut self, hour: i8, day_of_year: i16) {
        *self = TransitionRule::fixed(hour, day_of_year);
    }

    pub fn set_date(&mut self, hour: i8, month: i8, day: i8, days_offset: i8) {
        *self = TransitionRule::date(hour, month, day, days_offset);
    }

    pub fn set_floating(
        &mut self,
        hour: i8,
        month: i8,
        weekday: Weekday,
        week: Week,
        days_offset: i8,
    ) {
        *self =
            TransitionRule::floating(hour, month, weekday, week, days_offset);
    }

    /// Sets the days offset.
    ///
    /// The value stored is what the packed sign-magnitude field can
    /// represent, so anything outside of `-8..=7` is truncated by its bit
    /// mask. For example, `9` becomes `1` and `-9` becomes `-1`.
    pub fn set_days_offset(&mut self, days_offset: i8) {
        self.days_offset = normalize_days_offset(days_offset);
    }

    /// Sets the hour of the day of the transition, wrapping into `0..=23`.
    pub fn set_transition_time(&mut self, hour: i8) {
        self.hour = normalize_hour(hour);
    }

    pub const fn kind(&self) -> TransitionRuleType {
        match self.day {
            RuleDay::NoDst => TransitionRuleType::NoDst,
            RuleDay::Fixed { .. } => TransitionRuleType::Fixed,
            RuleDay::Date { .. } => TransitionRuleType::Date,
            RuleDay::Floating { .. } => TransitionRuleType::Floating,
        }
    }

    pub const fn is_no_dst(&self) -> bool {
        matches!(self.day, RuleDay::NoDst)
    }

    /// Returns the hour of the day (`0..=23`) of the transition.
    pub const fn transition_time(&self) -> i8 {
        self.hour
    }

    pub const fn days_offset(&self) -> i8 {
        self.days_offset
    }

    /// The day of the year of a fixed rule.
    pub const fn day_of_year(&self) -> Option<i16> {
        match self.day {
            RuleDay::Fixed { day_of_year } => Some(day_of_year),
            _ => None,
        }
    }

    /// The month of a date or floating rule.
    pub const fn month(&self) -> Option<i8> {
        match self.day {
            RuleDay::Date { month, .. } | RuleDay::Floating { month, .. } => {
                Some(month)
            }
            _ => None,
        }
    }

    /// The day of the month of a date rule.
    pub const fn day_of_month(&self) -> Option<i8> {
        match self.day {
            RuleDay::Date { day, .. } => Some(day),
            _ => None,
        }
    }

    /// The weekday of a floating rule.
    pub const fn weekday(&self) -> Option<Weekday> {
        match self.day {
            RuleDay::Floating { weekday, .. } => Some(weekday),
            _ => None,
        }
    }

    /// The week of a floating rule.
    pub const fn week(&self) -> Option<Week> {
        match self.day {
            RuleDay::Floating { week, .. } => Some(week),
            _ => None,
        }
    }

    /// Encodes this rule into its 24-bit packed form.
    pub const fn to_packed(&self) -> u32 {
        let (kind, payload) = match self.day {
            RuleDay::NoDst => (KIND_NO_DST, 0),
            RuleDay::Fixed { day_of_year } => {
                (KIND_FIXED, day_of_year as u32 & PAYLOAD_MASK)
            }
            RuleDay::Date { month, day } => {
                (KIND_DATE, (month as u32 & 0xF) | ((day as u32 & 0x3F) << 4))
            }
            RuleDay::Floating { month, weekday, week } => {
                let weekday = weekday.to_sunday_one_offset() as u32;
                let week = week.index() as u32;
                (
                    KIND_FLOATING,
                    (month as u32 & 0xF)
                        | ((weekday & 0x7) << 4)
                        | ((week & 0x7) << 7),
                )
            }
        };
        (self.hour as u32 & HOUR_MASK)
            | (encode_days_offset(self.days_offset) << DAYS_OFFSET_SHIFT)
            | (payload << PAYLOAD_SHIFT)
            | (kind << KIND_SHIFT)
    }

    /// Decodes a rule from its 24-bit packed form.
    ///
    /// Bits above the low 22 are ignored. A payload that doesn't describe a
    /// real day (like month `13` or weekday `0`) or an hour past `23`
    /// decodes to [`TransitionRule::NO_DST`].
    pub fn from_packed(bits: u32) -> TransitionRule {
        TransitionRule::try_from_packed(bits).unwrap_or_else(|| {
            debug!(
                "packed transition rule {bits:#08X} has an invalid \
                 payload, treating it as absent",
            );
            TransitionRule::NO_DST
        })
    }

    fn try_from_packed(bits: u32) -> Option<TransitionRule> {
        let hour = (bits & HOUR_MASK) as i8;
        if hour > 23 {
            return None;
        }
        let days_offset =
            decode_days_offset((bits >> DAYS_OFFSET_SHIFT) & DAYS_OFFSET_MASK);
        let payload = (bits >> PAYLOAD_SHIFT) & PAYLOAD_MASK;
        let month = (payload & 0xF) as i8;
        let day = match (bits >> KIND_SHIFT) & KIND_MASK {
            KIND_NO_DST => RuleDay::NoDst,
            KIND_FIXED => {
                let day_of_year = payload as i16;
                if day_of_year > 365 {
                    return None;
                }
                RuleDay::Fixed { day_of_year }
            }
            KIND_DATE => {
                let day = (payload >> 4) as i8;
                if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
                    return None;
                }
                RuleDay::Date { month, day }
            }
            _ => {
                if !(1..=12).contains(&month) {
                    return None;
                }
                let weekday = ((payload >> 4) & 0x7) as i8;
                let week = (payload >> 7) as i8;
                RuleDay::Floating {
                    month,
                    weekday: Weekday::from_sunday_one_offset(weekday)?,
                    week: Week::from_index(week)?,
                }
            }
        };
        Some(TransitionRule { day, days_offset, hour })
    }

    /// Returns the zero based day of the year on which this rule fires.
    ///
    /// This takes the number of days from the epoch to January 1st of the
    /// year and whether that year is a leap year, so that callers resolving
    /// several rules in the same year compute those once.
    ///
    /// The day returned includes the days offset, so it may fall outside
    /// of the year (e.g., `-1` is December 31st of the previous year).
    /// Absent rules return `None`.
    pub const fn day_of_year_of_transition_helper(
        &self,
        days_until_first_day_of_year: i64,
        is_leap: bool,
    ) -> Option<i32> {
        let day = match self.day {
            RuleDay::NoDst => return None,
            RuleDay::Fixed { day_of_year } => day_of_year as i32,
            RuleDay::Date { month, day } => {
                let month_start =
                    civil::day_of_year_from_month(month, is_leap);
                month_start as i32 + day as i32 - 1
            }
            RuleDay::Floating { month, weekday, week } => {
                let month_start =
                    civil::day_of_year_from_month(month, is_leap) as i32;
                let first = civil::weekday_from_days(
                    days_until_first_day_of_year + month_start as i64,
                );
                let delta = weekday.days_since(first) as i32;
                let mut day = week.index() as i32 * 7 + delta;
                // Only `Last` can run past the end of the month. When it
                // does, the fourth occurrence is the last one.
                if day >= civil::days_in_month(month, is_leap) as i32 {
                    day = 3 * 7 + delta;
                }
                month_start + day
            }
        };
        Some(day + self.days_offset as i32)
    }

    /// Returns the zero based day of the year on which this rule fires in
    /// the given year. See
    /// [`TransitionRule::day_of_year_of_transition_helper`].
    pub const fn day_of_year_of_transition(&self, year: i32) -> Option<i32> {
        self.day_of_year_of_transition_helper(
            civil::days_until_year(year),
            civil::is_leap_year(year),
        )
    }

    /// Returns the raw instant, in local wall clock time, at which this rule
    /// fires in the given year.
    ///
    /// Absent rules return `None`.
    pub const fn date_of_transition_raw(&self, year: i32) -> Option<i64> {
        let days_until = civil::days_until_year(year);
        let is_leap = civil::is_leap_year(year);
        let Some(day_of_year) =
            self.day_of_year_of_transition_helper(days_until, is_leap)
        else {
            return None;
        };
        let day = civil::raw_from_days(days_until + day_of_year as i64);
        Some(day.saturating_add(self.hour as i64 * MICROS_PER_HOUR))
    }

    /// Returns the transition time in hours relative to the start of the
    /// computed day, with the days offset folded in. This is the `/time`
    /// of the POSIX form of this rule.
    pub(crate) const fn posix_hours(&self) -> i16 {
        self.hour as i16 + 24 * self.days_offset as i16
    }
}

/// Writes the POSIX form of this rule: `Jn`, `n` or `Mm.w.d` followed by
/// an explicit `/hours`. Nothing is written for an absent rule.
///
/// Date rules are written with the one based `Jn` form, which never counts
/// February 29th. So a date rule for February 29th is written as `J60`,
/// which is March 1st.
impl core::fmt::Display for TransitionRule {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.day {
            RuleDay::NoDst => return Ok(()),
            RuleDay::Fixed { day_of_year } => write!(f, "{day_of_year}")?,
            RuleDay::Date { month, day } => {
                let start = civil::day_of_year_from_month(month, false);
                write!(f, "J{}", start + i16::from(day))?;
            }
            RuleDay::Floating { month, weekday, week } => write!(
                f,
                "M{month}.{week}.{weekday}",
                week = week.to_posix(),
                weekday = weekday.to_sunday_zero_offset(),
            )?,
        }
        write!(f, "/{}", self.posix_hours())
    }
}

impl Default for TransitionRule {
    fn default() -> TransitionRule {
        TransitionRule::NO_DST
    }
}

const fn normalize_hour(hour: i8) -> i8 {
    hour.rem_euclid(24)
}

const fn normalize_days_offset(days: i8) -> i8 {
    decode_days_offset(encode_days_offset(days))
}

/// Sign-magnitude with the magnitude stored as `-1 - value` for negative
/// values. So `-1` is stored as `0b1_000` and `-8` as `0b1_111`.
const fn encode_days_offset(days: i8) -> u32 {
    let negative = days < 0;
    let magnitude = if negative { -1 - days } else { days };
    (magnitude as u32 & 0b111) | ((negative as u32) << 3)
}

const fn decode_days_offset(bits: u32) -> i8 {
    let magnitude = (bits & 0b111) as i8;
    if bits & 0b1000 != 0 {
        -1 - magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use chrono::{Datelike, NaiveDate};

    use super::*;

    /// Finds the day by walking the calendar one day at a time, without
    /// any of the arithmetic used by the rule itself.
    fn brute_force_floating(
        year: i32,
        month: u32,
        weekday: Weekday,
        week: Week,
    ) -> u32 {
        // chrono uses astronomical years, which have a year zero.
        let year = if year < 0 { year + 1 } else { year };
        let mut matches = alloc::vec::Vec::new();
        let mut date = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        while date.month() == month {
            let wd = date.weekday().num_days_from_sunday() as i8;
            if wd == weekday.to_sunday_zero_offset() {
                matches.push(date.ordinal0());
            }
            date = date.succ_opt().unwrap();
        }
        match week {
            Week::Last => *matches.last().unwrap(),
            _ => matches[week.index() as usize],
        }
    }

    #[test]
    fn packed_layout() {
        let rule =
            TransitionRule::floating(2, 3, Weekday::Sunday, Week::Second, 0);
        assert_eq!(rule.to_packed(), 0x32_4C02);

        let rule = TransitionRule::fixed(23, 365);
        assert_eq!(rule.to_packed(), (1 << 20) | (365 << 10) | 23);

        let rule = TransitionRule::date(0, 12, 31, -1);
        assert_eq!(
            rule.to_packed(),
            (2 << 20) | (((31 << 4) | 12) << 10) | (0b1000 << 6),
        );

        assert_eq!(TransitionRule::NO_DST.to_packed(), 0);
    }

    #[test]
    fn days_offset_sign_magnitude() {
        assert_eq!(encode_days_offset(0), 0b0000);
        assert_eq!(encode_days_offset(7), 0b0111);
        assert_eq!(encode_days_offset(-1), 0b1000);
        assert_eq!(encode_days_offset(-8), 0b1111);
        let (min, max) =
            (TransitionRule::MIN_DAYS_OFFSET, TransitionRule::MAX_DAYS_OFFSET);
        for days in min..=max {
            assert_eq!(decode_days_offset(encode_days_offset(days)), days);
        }
    }

    #[test]
    fn days_offset_truncates() {
        let mut rule = TransitionRule::date(2, 3, 1, 0);
        rule.set_days_offset(9);
        assert_eq!(rule.days_offset(), 1);
        rule.set_days_offset(-9);
        assert_eq!(rule.days_offset(), -1);
        rule.set_days_offset(8);
        assert_eq!(rule.days_offset(), 0);
        rule.set_days_offset(i8::MIN);
        assert_eq!(rule.days_offset(), -8);
        assert_eq!(
            TransitionRule::from_packed(rule.to_packed()).days_offset(),
            rule.days_offset(),
        );
    }

    #[test]
    fn transition_time_wraps() {
        let mut rule = TransitionRule::fixed(25, 10);
        assert_eq!(rule.transition_time(), 1);
        rule.set_transition_time(-1);
        assert_eq!(rule.transition_time(), 23);
        rule.set_transition_time(24);
        assert_eq!(rule.transition_time(), 0);
    }

    #[test]
    fn accessors_follow_the_variant() {
        let rule = TransitionRule::fixed(2, 100);
        assert_eq!(rule.kind(), TransitionRuleType::Fixed);
        assert_eq!(rule.day_of_year(), Some(100));
        assert_eq!(rule.month(), None);
        assert_eq!(rule.weekday(), None);

        let mut rule = TransitionRule::NO_DST;
        assert!(rule.is_no_dst());
        rule.set_floating(1, 10, Weekday::Sunday, Week::Last, 0);
        assert_eq!(rule.kind(), TransitionRuleType::Floating);
        assert_eq!(rule.month(), Some(10));
        assert_eq!(rule.week(), Some(Week::Last));
        assert_eq!(rule.day_of_month(), None);
        assert_eq!(rule.day_of_year(), None);

        rule.set_date(2, 4, 15, 0);
        assert_eq!(rule.kind(), TransitionRuleType::Date);
        assert_eq!(rule.day_of_month(), Some(15));
        assert_eq!(rule.week(), None);

        rule.set_fixed(2, 59);
        assert_eq!(rule.kind(), TransitionRuleType::Fixed);
    }

    #[test]
    fn invalid_packed_payloads_are_absent() {
        // month 13
        let bits = (KIND_DATE << KIND_SHIFT) | (((1 << 4) | 13) << 10);
        assert_eq!(TransitionRule::from_packed(bits), TransitionRule::NO_DST);
        // weekday 0
        let bits = (KIND_FLOATING << KIND_SHIFT) | (3 << 10);
        assert_eq!(TransitionRule::from_packed(bits), TransitionRule::NO_DST);
        // week index 5
        let payload = (5 << 7) | (1 << 4) | 3;
        let bits = (KIND_FLOATING << KIND_SHIFT) | (payload << 10);
        assert_eq!(TransitionRule::from_packed(bits), TransitionRule::NO_DST);
        // day of year 366
        let bits = (KIND_FIXED << KIND_SHIFT) | (366 << 10);
        assert_eq!(TransitionRule::from_packed(bits), TransitionRule::NO_DST);
        // hour 24
        let bits = (KIND_FIXED << KIND_SHIFT) | 24;
        assert_eq!(TransitionRule::from_packed(bits), TransitionRule::NO_DST);
    }

    #[test]
    fn last_sunday_of_february() {
        let rule =
            TransitionRule::floating(2, 2, Weekday::Sunday, Week::Last, 0);
        for year in 1990..=2030 {
            let expected =
                brute_force_floating(year, 2, Weekday::Sunday, Week::Last);
            let got = rule.day_of_year_of_transition(year).unwrap();
            assert_eq!(got, expected as i32, "year {year}");
        }
    }

    #[test]
    fn floating_rules_agree_with_calendar_walk() {
        let weeks =
            [Week::First, Week::Second, Week::Third, Week::Fourth, Week::Last];
        // The negative years exercise the weekday of negative day counts.
        let years = [-401, -400, -101, -5, -2, -1, 1, 1999, 2000, 2024, 2100];
        for year in years {
            for month in 1..=12 {
                for weekday in 0..=6 {
                    let weekday = Weekday::from_sunday_zero_offset(weekday)
                        .unwrap();
                    for week in weeks {
                        let rule = TransitionRule::floating(
                            0, month, weekday, week, 0,
                        );
                        let expected = brute_force_floating(
                            year,
                            month as u32,
                            weekday,
                            week,
                        );
                        assert_eq!(
                            rule.day_of_year_of_transition(year),
                            Some(expected as i32),
                            "{year}-{month} {weekday:?} {week:?}",
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn days_offset_shifts_the_day() {
        // The Friday before the last Sunday of March, 2024.
        let rule =
            TransitionRule::floating(2, 3, Weekday::Sunday, Week::Last, -2);
        let doy = rule.day_of_year_of_transition(2024).unwrap();
        let march = i32::from(civil::day_of_year_from_month(3, true));
        assert_eq!(doy, march + 28);

        let rule = TransitionRule::date(0, 1, 1, -1);
        assert_eq!(rule.day_of_year_of_transition(2024), Some(-1));
    }

    #[test]
    fn date_rules() {
        let rule = TransitionRule::date(2, 3, 1, 0);
        assert_eq!(rule.day_of_year_of_transition(2023), Some(59));
        assert_eq!(rule.day_of_year_of_transition(2024), Some(60));
        let rule = TransitionRule::fixed(2, 59);
        assert_eq!(rule.day_of_year_of_transition(2023), Some(59));
        assert_eq!(rule.day_of_year_of_transition(2024), Some(59));
        let rule = TransitionRule::NO_DST;
        assert_eq!(rule.day_of_year_of_transition(2024), None);
    }

    #[test]
    fn raw_transition_instant() {
        let rule =
            TransitionRule::floating(2, 3, Weekday::Sunday, Week::Second, 0);
        let expected = civil::raw_from_days(civil::days_from_date(2024, 3, 10))
            + 2 * MICROS_PER_HOUR;
        assert_eq!(rule.date_of_transition_raw(2024), Some(expected));
        assert_eq!(TransitionRule::NO_DST.date_of_transition_raw(2024), None);

        // Before the epoch too.
        let expected = civil::raw_from_days(civil::days_from_date(-1, 3, 1))
            + 2 * MICROS_PER_HOUR;
        let rule = TransitionRule::date(2, 3, 1, 0);
        assert_eq!(rule.date_of_transition_raw(-1), Some(expected));
        assert!(expected < 0);
    }

    #[test]
    fn display() {
        let rule =
            TransitionRule::floating(2, 3, Weekday::Sunday, Week::Second, 0);
        assert_eq!(rule.to_string(), "M3.2.0/2");
        let rule =
            TransitionRule::floating(2, 3, Weekday::Thursday, Week::Fourth, 0);
        assert_eq!(rule.to_string(), "M3.4.4/2");
        let rule =
            TransitionRule::floating(23, 3, Weekday::Sunday, Week::Last, -1);
        assert_eq!(rule.to_string(), "M3.5.0/-1");
        let rule =
            TransitionRule::floating(0, 9, Weekday::Saturday, Week::First, 1);
        assert_eq!(rule.to_string(), "M9.1.6/24");
        assert_eq!(TransitionRule::date(2, 3, 1, 0).to_string(), "J60/2");
        assert_eq!(TransitionRule::fixed(0, 59).to_string(), "59/0");
        assert_eq!(TransitionRule::NO_DST.to_string(), "");
    }

    quickcheck::quickcheck! {
        fn prop_packed_round_trip(
            hour: i8,
            month: i8,
            day: i8,
            days_offset: i8,
            weekday: i8,
            week: i8
        ) -> bool {
            let month = month.rem_euclid(12) + 1;
            let day = day.rem_euclid(31) + 1;
            let weekday = Weekday::from_days_since_sunday(i64::from(weekday));
            let week = Week::from_index(week.rem_euclid(5)).unwrap();
            let rules = [
                TransitionRule::date(hour, month, day, days_offset),
                TransitionRule::floating(
                    hour,
                    month,
                    weekday,
                    week,
                    days_offset,
                ),
                TransitionRule::fixed(hour, i16::from(day) * 11),
            ];
            rules.iter().all(|rule| {
                TransitionRule::from_packed(rule.to_packed()) == *rule
                    && rule.to_packed() < (1 << 22)
            })
        }
    }
}
