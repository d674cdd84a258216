use tzrule::tz::{regions, TimeZoneInfo};

use crate::utc;

/// Collects every transition of `tz` in 2024 as `(utc, is_dst)`.
fn transitions_in_2024(tz: &TimeZoneInfo) -> Vec<(i64, bool)> {
    let end = utc(2025, 1, 1, 0, 0);
    let mut raw = utc(2024, 1, 1, 0, 0);
    let mut found = vec![];
    while let Some(t) = tz.next_transition(raw) {
        if t.raw() >= end {
            break;
        }
        found.push((t.raw(), t.is_dst()));
        raw = t.raw();
    }
    found
}

#[test]
fn transitions_2024() {
    let _ = crate::Logger::init();

    let eu = vec![
        (utc(2024, 3, 31, 1, 0), true),
        (utc(2024, 10, 27, 1, 0), false),
    ];
    let tests: Vec<(TimeZoneInfo, Vec<(i64, bool)>)> = vec![
        (
            regions::US_EASTERN,
            vec![
                (utc(2024, 3, 10, 7, 0), true),
                (utc(2024, 11, 3, 6, 0), false),
            ],
        ),
        (
            regions::US_CENTRAL,
            vec![
                (utc(2024, 3, 10, 8, 0), true),
                (utc(2024, 11, 3, 7, 0), false),
            ],
        ),
        (
            regions::US_MOUNTAIN,
            vec![
                (utc(2024, 3, 10, 9, 0), true),
                (utc(2024, 11, 3, 8, 0), false),
            ],
        ),
        (
            regions::US_PACIFIC,
            vec![
                (utc(2024, 3, 10, 10, 0), true),
                (utc(2024, 11, 3, 9, 0), false),
            ],
        ),
        (
            regions::US_ALASKA,
            vec![
                (utc(2024, 3, 10, 11, 0), true),
                (utc(2024, 11, 3, 10, 0), false),
            ],
        ),
        (regions::US_ARIZONA, vec![]),
        (regions::US_HAWAII, vec![]),
        (regions::EUROPE_WESTERN, eu.clone()),
        (regions::EUROPE_CENTRAL, eu.clone()),
        (regions::EUROPE_EASTERN, eu),
        (
            regions::ISRAEL,
            vec![
                (utc(2024, 3, 29, 0, 0), true),
                (utc(2024, 10, 26, 23, 0), false),
            ],
        ),
        (
            regions::LEBANON,
            vec![
                (utc(2024, 3, 30, 22, 0), true),
                (utc(2024, 10, 26, 21, 0), false),
            ],
        ),
        (regions::ARABIA, vec![]),
        (
            regions::AUSTRALIA_EASTERN,
            vec![
                (utc(2024, 4, 6, 16, 0), false),
                (utc(2024, 10, 5, 16, 0), true),
            ],
        ),
        (
            regions::AUSTRALIA_CENTRAL,
            vec![
                (utc(2024, 4, 6, 16, 30), false),
                (utc(2024, 10, 5, 16, 30), true),
            ],
        ),
        (
            regions::NEW_ZEALAND,
            vec![
                (utc(2024, 4, 6, 14, 0), false),
                (utc(2024, 9, 28, 14, 0), true),
            ],
        ),
        (
            regions::CHILE,
            vec![
                (utc(2024, 4, 7, 3, 0), false),
                (utc(2024, 9, 8, 4, 0), true),
            ],
        ),
        (regions::INDIA, vec![]),
    ];
    assert_eq!(tests.len(), regions::ALL.len());
    for (tz, expected) in tests {
        assert_eq!(transitions_in_2024(&tz), expected, "{}", tz.key());
    }
}

#[test]
fn offsets_and_abbreviations_by_season() {
    let _ = crate::Logger::init();

    let jan = utc(2024, 1, 15, 12, 0);
    let jul = utc(2024, 7, 15, 12, 0);
    let tests = [
        (regions::US_EASTERN, -300, -240, "EST", "EDT"),
        (regions::US_CENTRAL, -360, -300, "CST", "CDT"),
        (regions::US_MOUNTAIN, -420, -360, "MST", "MDT"),
        (regions::US_PACIFIC, -480, -420, "PST", "PDT"),
        (regions::US_ALASKA, -540, -480, "AKST", "AKDT"),
        (regions::US_ARIZONA, -420, -420, "MST", "MST"),
        (regions::US_HAWAII, -600, -600, "HST", "HST"),
        (regions::EUROPE_WESTERN, 0, 60, "GMT", "BST"),
        (regions::EUROPE_CENTRAL, 60, 120, "CET", "CEST"),
        (regions::EUROPE_EASTERN, 120, 180, "EET", "EEST"),
        (regions::ISRAEL, 120, 180, "IST", "IDT"),
        (regions::LEBANON, 120, 180, "EET", "EEST"),
        (regions::ARABIA, 180, 180, "<+03>", "<+03>"),
        (regions::AUSTRALIA_EASTERN, 660, 600, "AEDT", "AEST"),
        (regions::AUSTRALIA_CENTRAL, 630, 570, "ACDT", "ACST"),
        (regions::NEW_ZEALAND, 780, 720, "NZDT", "NZST"),
        (regions::CHILE, -180, -240, "<-03>", "<-04>"),
        (regions::INDIA, 330, 330, "IST", "IST"),
    ];
    for (tz, jan_mins, jul_mins, jan_abbrev, jul_abbrev) in tests {
        let key = tz.key();
        assert_eq!(tz.offset_at(jan).as_mins(), jan_mins, "{key}");
        assert_eq!(tz.offset_at(jul).as_mins(), jul_mins, "{key}");
        assert_eq!(tz.abbreviation_at(jan), jan_abbrev, "{key}");
        assert_eq!(tz.abbreviation_at(jul), jul_abbrev, "{key}");
        assert_eq!(
            tz.to_local_raw(jul),
            jul + jul_mins * 60_000_000,
            "{key}",
        );
    }
}

/// Every transition reported flips the DST state at exactly that instant,
/// and the direction alternates.
#[test]
fn transitions_flip_dst() {
    let _ = crate::Logger::init();

    for tz in regions::ALL.iter() {
        let mut raw = utc(1990, 6, 1, 0, 0);
        let mut last: Option<bool> = None;
        for _ in 0..100 {
            let Some(t) = tz.next_transition(raw) else {
                assert!(tz.dst().no_dst(), "{}", tz.key());
                break;
            };
            assert!(t.raw() > raw, "{}", tz.key());
            assert_eq!(tz.is_dst_at(t.raw()), t.is_dst(), "{}", tz.key());
            assert_eq!(tz.is_dst_at(t.raw() - 1), !t.is_dst(), "{}", tz.key());
            assert_eq!(tz.offset_at(t.raw()), t.offset(), "{}", tz.key());
            if let Some(last) = last {
                assert_ne!(last, t.is_dst(), "{}", tz.key());
            }
            last = Some(t.is_dst());
            raw = t.raw();
        }
    }
}

#[test]
fn round_trip_through_posix() {
    let _ = crate::Logger::init();

    for tz in regions::ALL.iter() {
        let printed = tz.to_posix_string();
        let reparsed: TimeZoneInfo = printed.parse().unwrap();
        assert!(tz.is_equivalent(&reparsed), "{printed}");
        assert_eq!(reparsed.to_posix_string(), printed);
        assert_eq!(reparsed.std_abbreviation(), tz.std_abbreviation());
        assert_eq!(reparsed.dst().start(), tz.dst().start(), "{printed}");
        assert_eq!(reparsed.dst().end(), tz.dst().end(), "{printed}");
    }
}

#[test]
fn buffer_output_never_overruns() {
    let _ = crate::Logger::init();

    for tz in regions::ALL.iter() {
        let full = tz.to_posix_string();
        for size in 0..=full.len() + 4 {
            let mut data = vec![0xA5u8; size + 8];
            let len = tz.to_posix_buffer(&mut data[..size]);
            assert!(data[size..].iter().all(|&b| b == 0xA5), "{full}");
            if size == 0 {
                assert_eq!(len, 0);
                continue;
            }
            assert!(len < size, "{full}: size {size} gave {len}");
            assert_eq!(data[len], 0, "{full}");
            assert!(full.as_bytes().starts_with(&data[..len]), "{full}");
            if size > full.len() {
                assert_eq!(len, full.len(), "{full}");
            }
        }
    }
}
