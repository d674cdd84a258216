/*!
Compact daylight saving time rules and a codec for POSIX `TZ` strings.

This crate answers two questions about a location with a fixed standard
offset and an optional yearly daylight saving time (DST) cycle:

* Is DST in effect at a given instant?
* When is the next DST transition, and does DST begin or end there?

It also converts between its in-memory rule representation and the POSIX
`TZ` environment variable grammar, e.g., `CST6CDT,M3.2.0,M11.1.0`.

# Instants

Every instant handled by this crate is a *raw* instant: a signed 64-bit
count of microseconds since `0001-01-01T00:00:00` in the proleptic
Gregorian calendar. There is no year zero: the year `-1` is immediately
followed by the year `1`. The [`civil`] module provides the calendar
arithmetic used to go between raw instants and calendar fields.

# Example

```
use tzrule::tz::TimeZoneInfo;

let tz: TimeZoneInfo = "CST6CDT,M3.2.0,M11.1.0".parse()?;
assert_eq!(tz.offset().minutes(), -360);
assert_eq!(tz.dst().offset().minutes(), 60);
assert_eq!(tz.to_string(), "CST6CDT,M3.2.0/2,M11.1.0/2");

# Ok::<(), Box<dyn std::error::Error>>(())
```

Parsing failures report where things went wrong. Callers that want the
"empty" time zone on failure can ask for it explicitly:

```
use tzrule::tz::TimeZoneInfo;

let err = TimeZoneInfo::parse_posix("XYZ").unwrap_err();
assert_eq!(err.position(), Some(3));
let tz = TimeZoneInfo::parse_posix("XYZ").unwrap_or_default();
assert_eq!(tz, TimeZoneInfo::EMPTY);
```

# Crate features

* **std** (enabled by default) - When enabled, [`Error`] implements
  `std::error::Error`.
* **logging** - When enabled, the `log` crate is used to emit messages
  about how POSIX strings and packed rules were interpreted.
* **serde** - When enabled, [`tz::TimeZoneInfo`] implements
  `serde::Serialize` and `serde::Deserialize` via its POSIX string form.
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Errors carry an `Arc`'d cause chain and `TimeZoneInfo` can be printed to
// a `String`, so a heap is assumed everywhere.
extern crate alloc;

pub use crate::{duration::Duration, error::Error};

#[macro_use]
mod logging;

pub mod civil;
mod duration;
mod error;
pub mod fmt;
pub mod tz;
mod util;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::tz::{regions, TimeZoneInfo};

    #[test]
    fn public_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<crate::Error>();
        assert_send_sync::<crate::Duration>();
        assert_send_sync::<TimeZoneInfo>();
        assert_send_sync::<crate::tz::DstAdjustment>();
        assert_send_sync::<crate::tz::TransitionRule>();
    }

    #[test]
    fn regions_survive_a_round_trip_through_text() {
        let _ = env_logger::try_init();

        for tz in regions::ALL.iter() {
            let printed = tz.to_string();
            let reparsed = TimeZoneInfo::parse_posix(&printed).unwrap();
            assert!(
                tz.is_equivalent(&reparsed),
                "{printed} did not round trip: {tz:?} != {reparsed:?}",
            );
        }
    }
}
