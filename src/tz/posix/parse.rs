use core::cell::Cell;

use crate::{
    civil::{self, Weekday},
    error::{tz::posix::Error as E, Error, ErrorContext},
    tz::{DstAdjustment, Offset, TimeZoneInfo, TransitionRule, Week},
    util::array_str::ArrayStr,
};

/// The start of DST assumed when a DST abbreviation has no rules. This is
/// the second Sunday in March at 02:00.
const DEFAULT_START: TransitionRule =
    TransitionRule::floating(2, 3, Weekday::Sunday, Week::Second, 0);

/// The end of DST assumed when a DST abbreviation has no rules. This is the
/// first Sunday in November at 02:00.
const DEFAULT_END: TransitionRule =
    TransitionRule::floating(2, 11, Weekday::Sunday, Week::First, 0);

/// The transition time used when a rule has no `/time` suffix.
const DEFAULT_TRANSITION_SECONDS: i32 = 2 * 60 * 60;

/// The largest number of hours accepted in a `/time` suffix. Anything
/// larger is rejected by the days offset range anyway, but this keeps the
/// arithmetic small.
const MAX_TRANSITION_HOURS: i32 = 192;

/// Parses an entire POSIX `TZ` string.
pub(crate) fn parse(input: &[u8]) -> Result<TimeZoneInfo, Error> {
    let parser = Parser::new(input);
    let tz = parser
        .parse()
        .with_context(|| E::Invalid { position: parser.pos() })?;
    trace!("parsed POSIX TZ string into {tz:?}");
    Ok(tz)
}

/// Parses a POSIX `TZ` string from the beginning of `input`, and returns
/// the number of bytes parsed along with it.
pub(crate) fn parse_prefix(
    input: &[u8],
) -> Result<(TimeZoneInfo, usize), Error> {
    let parser = Parser::new(input);
    let tz = parser
        .parse_time_zone()
        .with_context(|| E::Invalid { position: parser.pos() })?;
    trace!(
        "parsed POSIX TZ string from first {} of {} bytes into {tz:?}",
        parser.pos(),
        input.len(),
    );
    Ok((tz, parser.pos()))
}

/// A parser for POSIX `TZ` strings.
///
/// Every parsing routine assumes the parser is positioned at the first
/// byte of the thing it parses. Upon success, the parser is positioned
/// immediately after it. Upon failure, the parser is positioned at (or
/// just after) the byte that caused the failure, which is what gets
/// reported as the position of the error.
#[derive(Debug)]
struct Parser<'s> {
    /// The `TZ` string that we're parsing.
    tz: &'s [u8],
    /// The parser's current position in `tz`.
    pos: Cell<usize>,
}

impl<'s> Parser<'s> {
    fn new(tz: &'s [u8]) -> Parser<'s> {
        Parser { tz, pos: Cell::new(0) }
    }

    /// Parses a POSIX time zone and ensures the entire input was consumed.
    fn parse(&self) -> Result<TimeZoneInfo, Error> {
        let tz = self.parse_time_zone()?;
        if let Some(byte) = self.maybe_byte() {
            return Err(E::TrailingInput(byte).into());
        }
        Ok(tz)
    }

    /// Parses `std offset[dst[offset][,rule,rule]]`.
    fn parse_time_zone(&self) -> Result<TimeZoneInfo, Error> {
        let std_abbrev = self
            .parse_abbreviation()
            .context(E::FailedStdAbbreviation)?;
        let offset = self.parse_offset().context(E::FailedStdOffset)?;
        let mut dst_abbrev = ArrayStr::EMPTY;
        let mut dst = DstAdjustment::NONE;
        if self.maybe_byte().map_or(false, is_abbreviation_start) {
            (dst_abbrev, dst) = self.parse_dst(offset)?;
        }
        Ok(TimeZoneInfo::from_parts(offset, dst, std_abbrev, dst_abbrev))
    }

    /// Parses `dst[offset][,rule,rule]`.
    ///
    /// When the offset is absent, DST is one hour ahead of standard time.
    /// When the rules are absent, North American rules are assumed.
    fn parse_dst(
        &self,
        std_offset: Offset,
    ) -> Result<(ArrayStr<7>, DstAdjustment), Error> {
        let abbrev = self
            .parse_abbreviation()
            .context(E::FailedDstAbbreviation)?;
        let mut delta = Offset::HOUR;
        if matches!(self.maybe_byte(), Some(b'+' | b'-' | b'0'..=b'9')) {
            let dst_offset =
                self.parse_offset().context(E::FailedDstOffset)?;
            delta = dst_delta(std_offset, dst_offset)
                .context(E::FailedDstOffset)?;
        }
        let (start, end) = if self.maybe_byte() == Some(b',') {
            if !self.bump() {
                return Err(E::TrailingComma.into());
            }
            self.parse_rules()?
        } else {
            debug!(
                "DST abbreviation {abbrev} has no transition rules, \
                 assuming M3.2.0,M11.1.0",
            );
            (DEFAULT_START, DEFAULT_END)
        };
        Ok((abbrev, DstAdjustment::new(start, end, delta)))
    }

    /// Parses `start[/time],end[/time]`.
    fn parse_rules(&self) -> Result<(TransitionRule, TransitionRule), Error> {
        let start = self.parse_rule().context(E::FailedStartRule)?;
        if self.maybe_byte() != Some(b',') {
            return Err(E::ExpectedEndRule.into());
        }
        if !self.bump() {
            return Err(E::TrailingComma.into());
        }
        let end = self.parse_rule().context(E::FailedEndRule)?;
        Ok((start, end))
    }

    /// Parses a single transition rule with its optional `/time` suffix.
    ///
    /// The time is split into an hour of the day and a number of whole days
    /// to carry into the days offset of the rule.
    fn parse_rule(&self) -> Result<TransitionRule, Error> {
        let mut rule = self.parse_date_spec()?;
        let seconds = if self.maybe_byte() == Some(b'/') {
            if !self.bump() {
                return Err(E::ExpectedTime.into());
            }
            self.parse_hms(3, MAX_TRANSITION_HOURS, E::ExpectedTime)
                .context(E::FailedTransitionTime)?
        } else {
            DEFAULT_TRANSITION_SECONDS
        };
        let hours = seconds.div_euclid(60 * 60);
        if seconds.rem_euclid(60 * 60) != 0 {
            warn!(
                "DST transition time of {seconds} seconds is not a whole \
                 number of hours, truncating to {hours} hours",
            );
        }
        let days = hours.div_euclid(24);
        let min = TransitionRule::MIN_DAYS_OFFSET;
        let max = TransitionRule::MAX_DAYS_OFFSET;
        if !(i32::from(min)..=i32::from(max)).contains(&days) {
            return Err(Error::range("transition days offset", days, min, max)
                .context(E::FailedTransitionTime));
        }
        // Both casts are OK because of the range check above.
        rule.set_transition_time(hours.rem_euclid(24) as i8);
        rule.set_days_offset(days as i8);
        Ok(rule)
    }

    /// Parses `Jn`, `n` or `Mm.w.d`. The rule returned has an hour and a
    /// days offset of zero.
    fn parse_date_spec(&self) -> Result<TransitionRule, Error> {
        let Some(byte) = self.maybe_byte() else {
            return Err(E::ExpectedDateSpec.into());
        };
        match byte {
            b'J' => {
                if !self.bump() {
                    return Err(E::ExpectedJulianDay.into());
                }
                let day = self.parse_number_with_upto_n_digits(3)?;
                if !(1..=365).contains(&day) {
                    return Err(Error::range(
                        "one based Julian day",
                        day,
                        1,
                        365,
                    ));
                }
                // OK because of the range check above.
                let day_of_year = (day - 1) as i16;
                let (month, day) =
                    civil::month_from_day_of_year(day_of_year, false);
                Ok(TransitionRule::date(0, month, day, 0))
            }
            b'0'..=b'9' => {
                let day = self.parse_number_with_upto_n_digits(3)?;
                if !(0..=365).contains(&day) {
                    return Err(Error::range(
                        "zero based day of year",
                        day,
                        0,
                        365,
                    ));
                }
                // OK because of the range check above.
                Ok(TransitionRule::fixed(0, day as i16))
            }
            b'M' => {
                if !self.bump() {
                    return Err(E::ExpectedMonth.into());
                }
                let month = self.parse_number_with_upto_n_digits(2)?;
                if !(1..=12).contains(&month) {
                    return Err(Error::range("month", month, 1, 12));
                }
                self.parse_dot("month")?;
                let week = self.parse_number_with_exactly_n_digits(1)?;
                let week = Week::from_posix(week as i8)
                    .ok_or_else(|| Error::range("week", week, 1, 5))?;
                self.parse_dot("week")?;
                let weekday = self.parse_number_with_exactly_n_digits(1)?;
                let weekday = Weekday::from_sunday_zero_offset(weekday as i8)
                    .ok_or_else(|| Error::range("weekday", weekday, 0, 6))?;
                // OK because of the range check above.
                Ok(TransitionRule::floating(0, month as i8, weekday, week, 0))
            }
            byte => Err(E::InvalidDateSpec(byte).into()),
        }
    }

    /// Parses the `.` separating the fields of an `Mm.w.d` rule.
    fn parse_dot(&self, after: &'static str) -> Result<(), Error> {
        if self.maybe_byte() != Some(b'.') {
            return Err(E::ExpectedDot { after }.into());
        }
        self.bump();
        Ok(())
    }

    /// Parses a UTC offset, flipping its sign from the POSIX convention.
    fn parse_offset(&self) -> Result<Offset, Error> {
        let seconds = self.parse_hms(2, 24, E::ExpectedOffset)?;
        // `EST5` is five hours *behind* UTC.
        Offset::from_seconds(-seconds)
    }

    /// Parses `[+-]h[h...][:[+-]m[m][:[+-]s[s]]]` into a signed number of
    /// seconds.
    ///
    /// The hours have at most `max_digits` digits and are at most
    /// `max_hour`. Minutes and seconds have one or two digits each. Every
    /// component may carry its own sign. A component without one takes the
    /// sign of the hours, so `-5:30` is `-(5h30m)` while `-5:+30` is
    /// `-5h + 30m`.
    ///
    /// `missing` is the error reported when the input ends where the hours
    /// should start.
    fn parse_hms(
        &self,
        max_digits: usize,
        max_hour: i32,
        missing: E,
    ) -> Result<i32, Error> {
        let sign = self.parse_optional_sign()?.unwrap_or(1);
        if self.is_done() {
            return Err(missing.into());
        }
        let hours = self.parse_number_with_upto_n_digits(max_digits)?;
        if hours > max_hour {
            return Err(Error::range("hours", hours, 0, max_hour));
        }
        let mut seconds = sign * hours * 60 * 60;
        if self.maybe_byte() == Some(b':') {
            if !self.bump() {
                return Err(E::ExpectedMinutes.into());
            }
            seconds += self.parse_sub_hour(sign, "minutes")? * 60;
            if self.maybe_byte() == Some(b':') {
                if !self.bump() {
                    return Err(E::ExpectedSeconds.into());
                }
                seconds += self.parse_sub_hour(sign, "seconds")?;
            }
        }
        Ok(seconds)
    }

    /// Parses the minutes or seconds of an offset or time, along with an
    /// optional sign. Without a sign, `hours_sign` is used.
    fn parse_sub_hour(
        &self,
        hours_sign: i32,
        what: &'static str,
    ) -> Result<i32, Error> {
        let sign = self.parse_optional_sign()?.unwrap_or(hours_sign);
        let number = self.parse_number_with_upto_n_digits(2)?;
        if self.maybe_byte().map_or(false, |byte| byte.is_ascii_digit()) {
            return Err(E::TooManyDigits { what, max: 2 }.into());
        }
        if number > 59 {
            return Err(Error::range(what, number, 0, 59));
        }
        Ok(sign * number)
    }

    /// Parses a bare or a `<...>` quoted abbreviation.
    fn parse_abbreviation(&self) -> Result<ArrayStr<7>, Error> {
        match self.maybe_byte() {
            None => Err(E::ExpectedAbbreviation.into()),
            Some(b'<') => self.parse_quoted_abbreviation(),
            Some(_) => self.parse_unquoted_abbreviation(),
        }
    }

    /// Parses 3 to 7 ASCII letters or underscores.
    fn parse_unquoted_abbreviation(&self) -> Result<ArrayStr<7>, Error> {
        let start = self.pos();
        while self.maybe_byte().map_or(false, is_unquoted_byte) {
            self.bump();
        }
        let abbrev = &self.tz[start..self.pos()];
        if abbrev.len() < 3 {
            return Err(E::AbbreviationTooShort { len: abbrev.len() }.into());
        }
        to_abbreviation(abbrev)
    }

    /// Parses `<` followed by 3 to 5 ASCII letters, digits, `+` or `-`,
    /// followed by `>`. The abbreviation returned includes the quotes.
    fn parse_quoted_abbreviation(&self) -> Result<ArrayStr<7>, Error> {
        let start = self.pos();
        self.bump();
        while self.maybe_byte().map_or(false, is_quoted_byte) {
            self.bump();
        }
        let Some(byte) = self.maybe_byte() else {
            return Err(E::UnclosedQuotedAbbreviation.into());
        };
        if byte != b'>' {
            return Err(E::InvalidQuotedAbbreviationByte(byte).into());
        }
        self.bump();
        let abbrev = &self.tz[start..self.pos()];
        let len = abbrev.len() - 2;
        if len < 3 {
            return Err(E::AbbreviationTooShort { len }.into());
        }
        to_abbreviation(abbrev)
    }

    /// Parses a `+` or `-`, returning `1` or `-1` respectively.
    ///
    /// If a sign is found, then the input is guaranteed to continue after
    /// it.
    fn parse_optional_sign(&self) -> Result<Option<i32>, Error> {
        let sign = match self.maybe_byte() {
            Some(b'+') => 1,
            Some(b'-') => -1,
            _ => return Ok(None),
        };
        if !self.bump() {
            return Err(E::ExpectedDigitAfterSign.into());
        }
        Ok(Some(sign))
    }

    /// Parses a number with at least 1 and at most `n` digits.
    ///
    /// `n` must be small enough that the number can't overflow an `i32`.
    fn parse_number_with_upto_n_digits(&self, n: usize) -> Result<i32, Error> {
        let mut number: i32 = 0;
        for i in 0..n {
            let Some(byte) = self.maybe_byte().filter(u8::is_ascii_digit)
            else {
                if i > 0 {
                    break;
                }
                return Err(match self.maybe_byte() {
                    None => E::NoDigits.into(),
                    Some(byte) => E::InvalidDigit(byte).into(),
                });
            };
            number = number * 10 + i32::from(byte - b'0');
            self.bump();
        }
        Ok(number)
    }

    /// Parses a number with exactly `n` digits.
    ///
    /// `n` must be small enough that the number can't overflow an `i32`.
    fn parse_number_with_exactly_n_digits(
        &self,
        n: usize,
    ) -> Result<i32, Error> {
        let mut number: i32 = 0;
        for found in 0..n {
            let Some(byte) = self.maybe_byte() else {
                return Err(E::ExpectedDigits { expected: n, found }.into());
            };
            if !byte.is_ascii_digit() {
                return Err(E::InvalidDigit(byte).into());
            }
            number = number * 10 + i32::from(byte - b'0');
            self.bump();
        }
        Ok(number)
    }
}

/// Helper routines for parsing a POSIX `TZ` string.
impl<'s> Parser<'s> {
    /// Bump the parser to the next byte.
    ///
    /// If the end of the input has been reached, then `false` is returned.
    fn bump(&self) -> bool {
        if self.is_done() {
            return false;
        }
        self.pos.set(self.pos() + 1);
        !self.is_done()
    }

    /// Returns true if the next call to `bump` would return false.
    fn is_done(&self) -> bool {
        self.pos() == self.tz.len()
    }

    /// Return the byte at the current position of the parser. If the TZ
    /// string has been exhausted, then this returns `None`.
    fn maybe_byte(&self) -> Option<u8> {
        self.tz.get(self.pos()).copied()
    }

    /// Return the current byte offset of the parser.
    ///
    /// The offset starts at `0` from the beginning of the TZ string.
    fn pos(&self) -> usize {
        self.pos.get()
    }
}

/// Returns the difference between the DST and standard offsets, which must
/// be in `-08:00..=+07:45`.
fn dst_delta(std_offset: Offset, dst_offset: Offset) -> Result<Offset, Error> {
    let quarters =
        i16::from(dst_offset.quarters()) - i16::from(std_offset.quarters());
    if !(-32..=31).contains(&quarters) {
        return Err(Error::range(
            "DST offset delta quarter hours",
            quarters,
            -32,
            31,
        ));
    }
    // OK because of the range check above.
    Offset::from_quarters(quarters as i8)
}

fn to_abbreviation(bytes: &[u8]) -> Result<ArrayStr<7>, Error> {
    let len = bytes.len();
    let abbrev = core::str::from_utf8(bytes).map_err(|_| E::InvalidUtf8)?;
    ArrayStr::new(abbrev).ok_or_else(|| E::AbbreviationTooLong { len }.into())
}

fn is_abbreviation_start(byte: u8) -> bool {
    byte == b'<' || is_unquoted_byte(byte)
}

fn is_unquoted_byte(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_quoted_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'+' || byte == b'-'
}
