/*!
Predefined time zones for a handful of well known regions.

Each region is a `const` [`TimeZoneInfo`] carrying its offset, DST rules,
abbreviations, names and an IANA style key. [`ALL`] lists every one of
them.

The rules are the ones in effect at the time of writing. They are not
updated from any time zone database, so a region that changes its rules in
the future will drift.

# Example

```
use tzrule::tz::regions;

assert_eq!(regions::US_PACIFIC.key(), "America/Los_Angeles");
assert_eq!(
    regions::EUROPE_CENTRAL.to_string(),
    "CET-1CEST,M3.5.0/2,M10.5.0/3",
);
assert!(regions::ALL.iter().any(|tz| tz.key() == "Asia/Kolkata"));
```
*/

use crate::{
    civil::Weekday,
    tz::{DstAdjustment, Offset, TimeZoneInfo, TransitionRule, Week},
};

/// `M3.2.0,M11.1.0`
const US_DST: DstAdjustment = DstAdjustment::new(
    TransitionRule::floating(2, 3, Weekday::Sunday, Week::Second, 0),
    TransitionRule::floating(2, 11, Weekday::Sunday, Week::First, 0),
    Offset::HOUR,
);

/// `M10.1.0,M4.1.0/3`
const AUSTRALIA_DST: DstAdjustment = DstAdjustment::new(
    TransitionRule::floating(2, 10, Weekday::Sunday, Week::First, 0),
    TransitionRule::floating(3, 4, Weekday::Sunday, Week::First, 0),
    Offset::HOUR,
);

/// The last Sunday of March to the last Sunday of October, at the given
/// local hours.
const fn european_dst(start: i8, end: i8) -> DstAdjustment {
    DstAdjustment::new(
        TransitionRule::floating(start, 3, Weekday::Sunday, Week::Last, 0),
        TransitionRule::floating(end, 10, Weekday::Sunday, Week::Last, 0),
        Offset::HOUR,
    )
}

/// `EST5EDT,M3.2.0,M11.1.0`
pub const US_EASTERN: TimeZoneInfo =
    TimeZoneInfo::new(Offset::constant(-5, 0), US_DST)
        .with_abbreviations("EST", "EDT")
        .with_names("Eastern Standard Time", "Eastern Daylight Time")
        .with_key("America/New_York");

/// `CST6CDT,M3.2.0,M11.1.0`
pub const US_CENTRAL: TimeZoneInfo =
    TimeZoneInfo::new(Offset::constant(-6, 0), US_DST)
        .with_abbreviations("CST", "CDT")
        .with_names("Central Standard Time", "Central Daylight Time")
        .with_key("America/Chicago");

/// `MST7MDT,M3.2.0,M11.1.0`
pub const US_MOUNTAIN: TimeZoneInfo =
    TimeZoneInfo::new(Offset::constant(-7, 0), US_DST)
        .with_abbreviations("MST", "MDT")
        .with_names("Mountain Standard Time", "Mountain Daylight Time")
        .with_key("America/Denver");

/// `PST8PDT,M3.2.0,M11.1.0`
pub const US_PACIFIC: TimeZoneInfo =
    TimeZoneInfo::new(Offset::constant(-8, 0), US_DST)
        .with_abbreviations("PST", "PDT")
        .with_names("Pacific Standard Time", "Pacific Daylight Time")
        .with_key("America/Los_Angeles");

/// `AKST9AKDT,M3.2.0,M11.1.0`
pub const US_ALASKA: TimeZoneInfo =
    TimeZoneInfo::new(Offset::constant(-9, 0), US_DST)
        .with_abbreviations("AKST", "AKDT")
        .with_names("Alaska Standard Time", "Alaska Daylight Time")
        .with_key("America/Anchorage");

/// `MST7`
///
/// Most of Arizona does not observe DST.
pub const US_ARIZONA: TimeZoneInfo =
    TimeZoneInfo::new(Offset::constant(-7, 0), DstAdjustment::NONE)
        .with_abbreviations("MST", "")
        .with_names("Mountain Standard Time", "")
        .with_key("America/Phoenix");

/// `HST10`
pub const US_HAWAII: TimeZoneInfo =
    TimeZoneInfo::new(Offset::constant(-10, 0), DstAdjustment::NONE)
        .with_abbreviations("HST", "")
        .with_names("Hawaii-Aleutian Standard Time", "")
        .with_key("Pacific/Honolulu");

/// `GMT0BST,M3.5.0/1,M10.5.0`
pub const EUROPE_WESTERN: TimeZoneInfo =
    TimeZoneInfo::new(Offset::UTC, european_dst(1, 2))
        .with_abbreviations("GMT", "BST")
        .with_names("Greenwich Mean Time", "British Summer Time")
        .with_key("Europe/London");

/// `CET-1CEST,M3.5.0,M10.5.0/3`
pub const EUROPE_CENTRAL: TimeZoneInfo =
    TimeZoneInfo::new(Offset::constant(1, 0), european_dst(2, 3))
        .with_abbreviations("CET", "CEST")
        .with_names(
            "Central European Standard Time",
            "Central European Summer Time",
        )
        .with_key("Europe/Paris");

/// `EET-2EEST,M3.5.0/3,M10.5.0/4`
pub const EUROPE_EASTERN: TimeZoneInfo =
    TimeZoneInfo::new(Offset::constant(2, 0), european_dst(3, 4))
        .with_abbreviations("EET", "EEST")
        .with_names(
            "Eastern European Standard Time",
            "Eastern European Summer Time",
        )
        .with_key("Europe/Helsinki");

/// `IST-2IDT,M3.4.4/26,M10.5.0`
///
/// DST starts on the Friday before the last Sunday of March, which is
/// expressed as the day after the fourth Thursday.
pub const ISRAEL: TimeZoneInfo = TimeZoneInfo::new(
    Offset::constant(2, 0),
    DstAdjustment::new(
        TransitionRule::floating(2, 3, Weekday::Thursday, Week::Fourth, 1),
        TransitionRule::floating(2, 10, Weekday::Sunday, Week::Last, 0),
        Offset::HOUR,
    ),
)
.with_abbreviations("IST", "IDT")
.with_names("Israel Standard Time", "Israel Daylight Time")
.with_key("Asia/Jerusalem");

/// `EET-2EEST,M3.5.0/0,M10.5.0/0`
pub const LEBANON: TimeZoneInfo =
    TimeZoneInfo::new(Offset::constant(2, 0), european_dst(0, 0))
        .with_abbreviations("EET", "EEST")
        .with_names(
            "Eastern European Standard Time",
            "Eastern European Summer Time",
        )
        .with_key("Asia/Beirut");

/// `<+03>-3`
pub const ARABIA: TimeZoneInfo =
    TimeZoneInfo::new(Offset::constant(3, 0), DstAdjustment::NONE)
        .with_abbreviations("<+03>", "")
        .with_names("Arabia Standard Time", "")
        .with_key("Asia/Riyadh");

/// `AEST-10AEDT,M10.1.0,M4.1.0/3`
pub const AUSTRALIA_EASTERN: TimeZoneInfo =
    TimeZoneInfo::new(Offset::constant(10, 0), AUSTRALIA_DST)
        .with_abbreviations("AEST", "AEDT")
        .with_names(
            "Australian Eastern Standard Time",
            "Australian Eastern Daylight Time",
        )
        .with_key("Australia/Sydney");

/// `ACST-9:30ACDT,M10.1.0,M4.1.0/3`
pub const AUSTRALIA_CENTRAL: TimeZoneInfo =
    TimeZoneInfo::new(Offset::constant(9, 30), AUSTRALIA_DST)
        .with_abbreviations("ACST", "ACDT")
        .with_names(
            "Australian Central Standard Time",
            "Australian Central Daylight Time",
        )
        .with_key("Australia/Adelaide");

/// `NZST-12NZDT,M9.5.0,M4.1.0/3`
pub const NEW_ZEALAND: TimeZoneInfo = TimeZoneInfo::new(
    Offset::constant(12, 0),
    DstAdjustment::new(
        TransitionRule::floating(2, 9, Weekday::Sunday, Week::Last, 0),
        TransitionRule::floating(3, 4, Weekday::Sunday, Week::First, 0),
        Offset::HOUR,
    ),
)
.with_abbreviations("NZST", "NZDT")
.with_names("New Zealand Standard Time", "New Zealand Daylight Time")
.with_key("Pacific/Auckland");

/// `<-04>4<-03>,M9.1.6/24,M4.1.6/24`
///
/// Both transitions happen at midnight at the start of the Sunday after the
/// first Saturday of the month.
pub const CHILE: TimeZoneInfo = TimeZoneInfo::new(
    Offset::constant(-4, 0),
    DstAdjustment::new(
        TransitionRule::floating(0, 9, Weekday::Saturday, Week::First, 1),
        TransitionRule::floating(0, 4, Weekday::Saturday, Week::First, 1),
        Offset::HOUR,
    ),
)
.with_abbreviations("<-04>", "<-03>")
.with_names("Chile Standard Time", "Chile Summer Time")
.with_key("America/Santiago");

/// `IST-5:30`
pub const INDIA: TimeZoneInfo =
    TimeZoneInfo::new(Offset::constant(5, 30), DstAdjustment::NONE)
        .with_abbreviations("IST", "")
        .with_names("India Standard Time", "")
        .with_key("Asia/Kolkata");

/// Every predefined region.
pub static ALL: [TimeZoneInfo; 18] = [
    US_EASTERN,
    US_CENTRAL,
    US_MOUNTAIN,
    US_PACIFIC,
    US_ALASKA,
    US_ARIZONA,
    US_HAWAII,
    EUROPE_WESTERN,
    EUROPE_CENTRAL,
    EUROPE_EASTERN,
    ISRAEL,
    LEBANON,
    ARABIA,
    AUSTRALIA_EASTERN,
    AUSTRALIA_CENTRAL,
    NEW_ZEALAND,
    CHILE,
    INDIA,
];
