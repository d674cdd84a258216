/*!
Daylight saving time rules and time zones built from them.

The building blocks, from smallest to largest:

* [`Offset`] is a fixed UTC offset in quarter hours.
* [`TransitionRule`] picks one moment per year, like "the second Sunday in
  March at 02:00".
* [`DstAdjustment`] pairs a start and an end rule with the DST delta, and
  answers whether DST is in effect and when it next changes.
* [`TimeZoneInfo`] adds a standard offset, abbreviations and names, and
  converts to and from POSIX `TZ` strings.

A set of ready made time zones lives in [`regions`].

# Example

```
use tzrule::{civil, tz::regions};

let tz = regions::EUROPE_CENTRAL;
// 2024-03-31T01:00:00Z is when Central Europe springs forward.
let raw = civil::raw_from_days(civil::days_from_date(2024, 3, 31))
    + 3_600_000_000;
assert!(!tz.is_dst_at(raw - 1));
assert!(tz.is_dst_at(raw));
assert_eq!(tz.abbreviation_at(raw), "CEST");
```
*/

pub use self::{
    dst::{DstAdjustment, DstTransition},
    info::{TimeZoneInfo, Transition},
    offset::Offset,
    rule::{TransitionRule, TransitionRuleType, Week},
};

mod dst;
mod info;
mod offset;
mod posix;
pub mod regions;
mod rule;
