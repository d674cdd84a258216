use quickcheck::TestResult;
use tzrule::{
    civil::{self, Weekday},
    tz::{
        DstAdjustment, Offset, TimeZoneInfo, TransitionRule,
        TransitionRuleType, Week,
    },
};

#[test]
fn north_american_central() {
    let _ = crate::Logger::init();

    let tz = TimeZoneInfo::parse_posix("CST6CDT,M3.2.0,M11.1.0").unwrap();
    assert_eq!(tz.offset().minutes(), -360);
    assert_eq!(tz.offset().minutes() + tz.dst().offset().minutes(), -300);
    assert_eq!(
        tz.dst().start(),
        TransitionRule::floating(2, 3, Weekday::Sunday, Week::Second, 0),
    );
    assert_eq!(
        tz.dst().end(),
        TransitionRule::floating(2, 11, Weekday::Sunday, Week::First, 0),
    );
    assert_eq!(tz.to_string(), "CST6CDT,M3.2.0/2,M11.1.0/2");
    let reparsed = TimeZoneInfo::parse_posix(tz.to_string()).unwrap();
    assert_eq!(tz, reparsed);
}

#[test]
fn fixed_quoted_abbreviation() {
    let _ = crate::Logger::init();

    let tz: TimeZoneInfo = "<-04>4".parse().unwrap();
    assert_eq!(tz.offset(), Offset::constant(-4, 0));
    assert!(tz.dst().no_dst());
    assert_eq!(tz.std_abbreviation(), "<-04>");
    assert_eq!(tz.to_string(), "<-04>4");
}

#[test]
fn failure_reports_position() {
    let _ = crate::Logger::init();

    let err = TimeZoneInfo::parse_posix("XYZ").unwrap_err();
    assert_eq!(err.position(), Some(3));
    let tz = TimeZoneInfo::parse_posix("XYZ").unwrap_or_default();
    assert_eq!(tz, TimeZoneInfo::EMPTY);

    let tests = [
        ("", 0),
        ("E", 1),
        ("EST", 3),
        ("EST5EDT,", 8),
        ("EST5EDT,M3", 10),
        ("EST5EDT,M3.2.0", 14),
        ("EST5EDT,M3.2.0,", 15),
        ("EST5EDT,M3.2.0,M11.1.0/", 23),
        ("EST5EDT,M3.2.0,M11.1.0/2:", 25),
        ("EST5EDT,M3.2.0,M11.1.0,", 22),
        ("<EST", 4),
        ("EST99", 5),
    ];
    for (input, position) in tests {
        let err = TimeZoneInfo::parse_posix(input).unwrap_err();
        assert_eq!(err.position(), Some(position), "{input:?}: {err}");
    }
}

#[test]
fn prefix_stops_at_first_non_grammar_byte() {
    let _ = crate::Logger::init();

    let input = b"EST5EDT,M3.2.0,M11.1.0\0\xFF\xFF";
    let (tz, len) = TimeZoneInfo::parse_posix_prefix(input).unwrap();
    assert_eq!(len, 22);
    assert_eq!(tz.dst_abbreviation(), "EDT");

    let (tz, len) =
        TimeZoneInfo::parse_posix_prefix(b"IST-5:30 extra").unwrap();
    assert_eq!(len, 8);
    assert_eq!(tz.offset(), Offset::constant(5, 30));
}

#[test]
fn whole_year_dst() {
    let _ = crate::Logger::init();

    let tz = TimeZoneInfo::parse_posix("EST5EDT,0/0,J365/25").unwrap();
    let raw = crate::utc(2023, 6, 1, 0, 0);
    assert!(tz.is_dst_at(raw));
    assert_eq!(tz.next_transition(raw), None);
}

/// Builds a time zone from arbitrary packed rules and checks that printing
/// it and parsing the result gives back an equivalent time zone.
fn print_then_parse(
    std_quarters: i8,
    delta_quarters: i8,
    start: u32,
    end: u32,
) -> TestResult {
    let Ok(offset) = Offset::from_quarters(std_quarters) else {
        return TestResult::discard();
    };
    if !(-32..=31).contains(&delta_quarters) {
        return TestResult::discard();
    }
    // The DST offset is written out in full, so it must be a valid offset
    // too.
    let dst_quarters = i16::from(std_quarters) + i16::from(delta_quarters);
    if Offset::from_minutes(i32::from(dst_quarters) * 15).is_err() {
        return TestResult::discard();
    }
    let Ok(delta) = Offset::from_quarters(delta_quarters) else {
        return TestResult::discard();
    };
    let start = TransitionRule::from_packed(start & 0xFF_FFFF);
    let end = TransitionRule::from_packed(end & 0xFF_FFFF);
    // Date rules are printed in the `Jn` form, which can't name February
    // 29th or days past the end of a month.
    for rule in [start, end] {
        if rule.kind() != TransitionRuleType::Date {
            continue;
        }
        let (Some(month), Some(day)) = (rule.month(), rule.day_of_month())
        else {
            return TestResult::discard();
        };
        if day > civil::days_in_month(month, false) {
            return TestResult::discard();
        }
    }
    let tz = TimeZoneInfo::new(offset, DstAdjustment::new(start, end, delta))
        .with_abbreviations("STD", "DST");
    let printed = tz.to_posix_string();
    let reparsed = match TimeZoneInfo::parse_posix(&printed) {
        Ok(reparsed) => reparsed,
        Err(err) => {
            return TestResult::error(format!("{printed}: {err}"));
        }
    };
    if !tz.is_equivalent(&reparsed) {
        return TestResult::error(format!(
            "{printed}: {tz:?} != {reparsed:?}",
        ));
    }
    TestResult::passed()
}

quickcheck::quickcheck! {
    fn prop_print_then_parse(
        std_quarters: i8,
        delta_quarters: i8,
        start: u32,
        end: u32
    ) -> TestResult {
        print_then_parse(std_quarters, delta_quarters, start, end)
    }

    fn prop_parse_never_panics(input: String) -> bool {
        let _ = TimeZoneInfo::parse_posix(&input);
        let _ = TimeZoneInfo::parse_posix_prefix(input.as_bytes());
        true
    }
}

#[test]
fn print_then_parse_all_rule_kinds() {
    let _ = crate::Logger::init();

    // Exercise every rule kind and every days offset directly, since random
    // packed values mostly decode to absent rules.
    let rules = [
        TransitionRule::fixed(0, 0),
        TransitionRule::fixed(23, 365),
        TransitionRule::date(2, 2, 28, 0),
        TransitionRule::date(0, 12, 31, 1),
        TransitionRule::floating(1, 3, Weekday::Sunday, Week::Last, 0),
        TransitionRule::floating(0, 9, Weekday::Saturday, Week::First, 1),
    ];
    let (min, max) =
        (TransitionRule::MIN_DAYS_OFFSET, TransitionRule::MAX_DAYS_OFFSET);
    for start in rules {
        for end in rules {
            for days in min..=max {
                let mut start = start;
                start.set_days_offset(days);
                let (start_bits, end_bits) =
                    (start.to_packed(), end.to_packed());
                let result = print_then_parse(-20, 4, start_bits, end_bits);
                assert!(!result.is_error(), "{start} {end}");
            }
        }
    }
}
