use core::fmt::Write as _;

use crate::{
    error::{fmt::Error as FE, Error},
    fmt::Write,
    tz::{Offset, TimeZoneInfo},
    util::array_str::ArrayStr,
};

/// A single grammar token of a POSIX `TZ` string. The longest one is a
/// rule like `,M12.5.6/-192`.
type Token = ArrayStr<16>;

/// Prints the given time zone as a POSIX `TZ` string.
///
/// Each abbreviation, offset and rule is handed to `wtr` in its own call to
/// `write_str`. Printing stops at the first failing write.
pub(crate) fn print(
    tz: &TimeZoneInfo,
    wtr: &mut dyn Write,
) -> Result<(), Error> {
    let std_quarters = i16::from(tz.offset().quarters());
    let std_abbrev =
        effective_abbreviation(tz.std_abbreviation(), std_quarters);
    wtr.write_str(std_abbrev.as_str())?;
    wtr.write_str(offset_token(std_quarters)?.as_str())?;

    let dst = tz.dst();
    if dst.no_dst() {
        return Ok(());
    }
    let delta = dst.offset();
    let dst_quarters = std_quarters + i16::from(delta.quarters());
    let dst_abbrev =
        effective_abbreviation(tz.dst_abbreviation(), dst_quarters);
    wtr.write_str(dst_abbrev.as_str())?;
    if delta != Offset::HOUR {
        wtr.write_str(offset_token(dst_quarters)?.as_str())?;
    }
    wtr.write_str(token(format_args!(",{}", dst.start()))?.as_str())?;
    wtr.write_str(token(format_args!(",{}", dst.end()))?.as_str())?;
    Ok(())
}

/// Returns the given abbreviation, or when it's empty, one synthesized
/// from the given offset in quarter hours east of UTC. Synthesized
/// abbreviations look like `<+03>` or `<-0930>`.
pub(crate) fn effective_abbreviation(
    literal: &str,
    quarters: i16,
) -> ArrayStr<7> {
    if let Some(abbrev) = ArrayStr::new(literal).filter(|a| !a.is_empty()) {
        return abbrev;
    }
    let sign = if quarters < 0 { '-' } else { '+' };
    let (hours, minutes) = hours_and_minutes(quarters);
    let mut abbrev = ArrayStr::EMPTY;
    // Offsets are under 100 hours, so `<+HHMM>` always fits.
    let _ = if minutes == 0 {
        write!(abbrev, "<{sign}{hours:02}>")
    } else {
        write!(abbrev, "<{sign}{hours:02}{minutes:02}>")
    };
    abbrev
}

/// Formats an offset given in quarter hours east of UTC with the POSIX
/// sign, i.e., positive west of UTC. The `+` sign is never written.
fn offset_token(quarters: i16) -> Result<Token, Error> {
    let sign = if quarters > 0 { "-" } else { "" };
    let (hours, minutes) = hours_and_minutes(quarters);
    if minutes == 0 {
        token(format_args!("{sign}{hours}"))
    } else {
        token(format_args!("{sign}{hours}:{minutes:02}"))
    }
}

fn hours_and_minutes(quarters: i16) -> (u16, u16) {
    let abs = quarters.unsigned_abs();
    (abs / 4, (abs % 4) * 15)
}

fn token(args: core::fmt::Arguments<'_>) -> Result<Token, Error> {
    let mut token = Token::EMPTY;
    token.write_fmt(args).map_err(|_| FE::StdFmtWriteAdapter)?;
    Ok(token)
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::{
        civil::Weekday,
        tz::{DstAdjustment, TransitionRule, Week},
    };

    use super::*;

    fn to_posix(tz: &TimeZoneInfo) -> String {
        let mut out = String::new();
        print(tz, &mut out).unwrap();
        out
    }

    fn roundtrip(input: &str) -> String {
        to_posix(&TimeZoneInfo::parse_posix(input).unwrap())
    }

    #[test]
    fn print_literal_abbreviations() {
        insta::assert_snapshot!(
            roundtrip("CST6CDT,M3.2.0,M11.1.0"),
            @"CST6CDT,M3.2.0/2,M11.1.0/2"
        );
        insta::assert_snapshot!(roundtrip("EST5EDT"), @"EST5EDT,M3.2.0/2,M11.1.0/2");
        insta::assert_snapshot!(roundtrip("<-04>4"), @"<-04>4");
        insta::assert_snapshot!(roundtrip("IST-5:30"), @"IST-5:30");
        insta::assert_snapshot!(roundtrip("UTC+0"), @"UTC0");
        insta::assert_snapshot!(roundtrip("NST3:30"), @"NST3:30");
    }

    #[test]
    fn print_dst_offset_only_when_not_one_hour() {
        insta::assert_snapshot!(
            roundtrip("LHST-10:30LHDT-11,M10.1.0,M4.1.0"),
            @"LHST-10:30LHDT-11,M10.1.0/2,M4.1.0/2"
        );
        insta::assert_snapshot!(
            roundtrip("IST-1GMT0,M10.5.0,M3.5.0/1"),
            @"IST-1GMT0,M10.5.0/2,M3.5.0/1"
        );
        insta::assert_snapshot!(
            roundtrip("CET-1CEST-2,M3.5.0,M10.5.0/3"),
            @"CET-1CEST,M3.5.0/2,M10.5.0/3"
        );
    }

    #[test]
    fn print_rule_forms() {
        insta::assert_snapshot!(
            roundtrip("IST-2IDT,M3.4.4/26,M10.5.0"),
            @"IST-2IDT,M3.4.4/26,M10.5.0/2"
        );
        insta::assert_snapshot!(
            roundtrip("XXX3YYY,M3.5.0/-1,M10.5.0/-25"),
            @"XXX3YYY,M3.5.0/-1,M10.5.0/-25"
        );
        insta::assert_snapshot!(
            roundtrip("EST5EDT,J60/0,300/3"),
            @"EST5EDT,J60/0,300/3"
        );
        insta::assert_snapshot!(
            roundtrip("EST5EDT,0/0,J365/25"),
            @"EST5EDT,0/0,J365/25"
        );
    }

    #[test]
    fn print_synthesized_abbreviations() {
        let tz =
            TimeZoneInfo::new(Offset::constant(3, 0), DstAdjustment::NONE);
        insta::assert_snapshot!(to_posix(&tz), @"<+03>-3");

        let tz =
            TimeZoneInfo::new(Offset::constant(5, 45), DstAdjustment::NONE);
        insta::assert_snapshot!(to_posix(&tz), @"<+0545>-5:45");

        let dst = DstAdjustment::new(
            TransitionRule::floating(0, 9, Weekday::Saturday, Week::First, 1),
            TransitionRule::floating(0, 4, Weekday::Saturday, Week::First, 1),
            Offset::HOUR,
        );
        let tz = TimeZoneInfo::new(Offset::constant(-4, 0), dst);
        insta::assert_snapshot!(
            to_posix(&tz),
            @"<-04>4<-03>,M9.1.6/24,M4.1.6/24"
        );
        let reparsed = TimeZoneInfo::parse_posix(to_posix(&tz)).unwrap();
        assert!(tz.is_equivalent(&reparsed));
    }

    #[test]
    fn effective_abbreviations() {
        assert_eq!(effective_abbreviation("EST", -20), "EST");
        assert_eq!(effective_abbreviation("", 0), "<+00>");
        assert_eq!(effective_abbreviation("", -38), "<-0930>");
        assert_eq!(effective_abbreviation("", 59), "<+1445>");
        assert_eq!(effective_abbreviation("", 90), "<+2230>");
    }

    #[test]
    fn one_write_per_token() {
        struct Tokens(alloc::vec::Vec<String>);

        impl Write for Tokens {
            fn write_str(&mut self, string: &str) -> Result<(), Error> {
                self.0.push(String::from(string));
                Ok(())
            }
        }

        let tz = TimeZoneInfo::parse_posix("LHST-10:30LHDT-11,M10.1.0,M4.1.0")
            .unwrap();
        let mut tokens = Tokens(alloc::vec::Vec::new());
        print(&tz, &mut tokens).unwrap();
        assert_eq!(
            tokens.0,
            ["LHST", "-10:30", "LHDT", "-11", ",M10.1.0/2", ",M4.1.0/2"],
        );
    }
}
