use alloc::string::String;

use crate::{
    error::{tz::info::Error as E, Error},
    fmt::{buffer::NulTerminated, StdFmtWrite, Write},
    tz::{posix, DstAdjustment, Offset},
    util::{array_str::ArrayStr, constant::unwrap},
    Duration,
};

/// A location's fixed standard offset along with its yearly daylight saving
/// time rules, names and abbreviations.
///
/// This is the unit the POSIX `TZ` codec works with. Parsing fills in the
/// offset, the DST adjustment and the two abbreviations. The names and key
/// are not part of the grammar and are only ever set by callers (or by the
/// predefined [`regions`](crate::tz::regions)).
///
/// Every field has a fixed capacity so that a `TimeZoneInfo` is `Copy` and
/// can be built in a `const` context:
///
/// * standard and daylight names: 32 bytes each,
/// * key: 40 bytes,
/// * standard and daylight abbreviations: 7 bytes each. A quoted
///   abbreviation like `<-04>` is stored with its brackets.
///
/// # Example
///
/// ```
/// use tzrule::tz::{Offset, TimeZoneInfo};
///
/// let tz = TimeZoneInfo::parse_posix("CST6CDT,M3.2.0,M11.1.0")?;
/// assert_eq!(tz.offset(), Offset::constant(-6, 0));
/// assert_eq!(tz.std_abbreviation(), "CST");
/// assert_eq!(tz.dst_abbreviation(), "CDT");
/// assert_eq!(tz.to_string(), "CST6CDT,M3.2.0/2,M11.1.0/2");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Queries
///
/// The query methods take raw instants in UTC. (Unlike the methods on
/// [`DstAdjustment`], which work in local standard time.)
///
/// ```
/// use tzrule::{civil, tz::TimeZoneInfo};
///
/// let tz = TimeZoneInfo::parse_posix("CST6CDT,M3.2.0,M11.1.0")?;
/// // 2024-07-01T12:00:00Z
/// let raw = civil::raw_from_days(civil::days_from_date(2024, 7, 1))
///     + 12 * 3_600_000_000;
/// assert!(tz.is_dst_at(raw));
/// assert_eq!(tz.offset_at(raw).as_hours(), -5);
/// assert_eq!(tz.abbreviation_at(raw), "CDT");
///
/// let next = tz.next_transition(raw).unwrap();
/// assert!(!next.is_dst());
/// assert_eq!(next.offset().as_hours(), -6);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TimeZoneInfo {
    offset: Offset,
    dst: DstAdjustment,
    std_name: ArrayStr<32>,
    dst_name: ArrayStr<32>,
    key: ArrayStr<40>,
    std_abbrev: ArrayStr<7>,
    dst_abbrev: ArrayStr<7>,
}

impl TimeZoneInfo {
    /// UTC with no DST, no names and no abbreviations. This is what
    /// `Default` returns, and the conventional result of a failed parse.
    pub const EMPTY: TimeZoneInfo =
        TimeZoneInfo::new(Offset::UTC, DstAdjustment::NONE);

    pub const fn new(offset: Offset, dst: DstAdjustment) -> TimeZoneInfo {
        TimeZoneInfo {
            offset,
            dst,
            std_name: ArrayStr::EMPTY,
            dst_name: ArrayStr::EMPTY,
            key: ArrayStr::EMPTY,
            std_abbrev: ArrayStr::EMPTY,
            dst_abbrev: ArrayStr::EMPTY,
        }
    }

    /// Sets both abbreviations in a `const` context.
    ///
    /// # Panics
    ///
    /// When either abbreviation is longer than 7 bytes.
    pub const fn with_abbreviations(
        self,
        std: &str,
        dst: &str,
    ) -> TimeZoneInfo {
        TimeZoneInfo {
            std_abbrev: unwrap!(
                ArrayStr::new(std),
                "standard abbreviation is longer than 7 bytes",
            ),
            dst_abbrev: unwrap!(
                ArrayStr::new(dst),
                "daylight abbreviation is longer than 7 bytes",
            ),
            ..self
        }
    }

    /// Sets both names in a `const` context.
    ///
    /// # Panics
    ///
    /// When either name is longer than 32 bytes.
    pub const fn with_names(self, std: &str, dst: &str) -> TimeZoneInfo {
        TimeZoneInfo {
            std_name: unwrap!(
                ArrayStr::new(std),
                "standard name is longer than 32 bytes",
            ),
            dst_name: unwrap!(
                ArrayStr::new(dst),
                "daylight name is longer than 32 bytes",
            ),
            ..self
        }
    }

    /// Sets the key in a `const` context.
    ///
    /// # Panics
    ///
    /// When the key is longer than 40 bytes.
    pub const fn with_key(self, key: &str) -> TimeZoneInfo {
        TimeZoneInfo {
            key: unwrap!(ArrayStr::new(key), "key is longer than 40 bytes"),
            ..self
        }
    }

    pub(crate) const fn from_parts(
        offset: Offset,
        dst: DstAdjustment,
        std_abbrev: ArrayStr<7>,
        dst_abbrev: ArrayStr<7>,
    ) -> TimeZoneInfo {
        let tz = TimeZoneInfo::new(offset, dst);
        TimeZoneInfo { std_abbrev, dst_abbrev, ..tz }
    }

    /// Returns the standard offset from UTC.
    pub const fn offset(&self) -> Offset {
        self.offset
    }

    pub const fn dst(&self) -> DstAdjustment {
        self.dst
    }

    pub fn std_name(&self) -> &str {
        self.std_name.as_str()
    }

    pub fn dst_name(&self) -> &str {
        self.dst_name.as_str()
    }

    /// Returns the key identifying this time zone, e.g. `America/Chicago`.
    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    /// Returns the standard abbreviation as stored. This is empty when none
    /// was given, in which case printing synthesizes one from the offset.
    pub fn std_abbreviation(&self) -> &str {
        self.std_abbrev.as_str()
    }

    /// Returns the daylight abbreviation as stored. See
    /// [`TimeZoneInfo::std_abbreviation`].
    pub fn dst_abbreviation(&self) -> &str {
        self.dst_abbrev.as_str()
    }

    pub fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
    }

    pub fn set_dst(&mut self, dst: DstAdjustment) {
        self.dst = dst;
    }

    pub fn set_std_name(&mut self, name: &str) -> Result<(), Error> {
        self.std_name = fit("standard name", name)?;
        Ok(())
    }

    pub fn set_dst_name(&mut self, name: &str) -> Result<(), Error> {
        self.dst_name = fit("daylight name", name)?;
        Ok(())
    }

    pub fn set_key(&mut self, key: &str) -> Result<(), Error> {
        self.key = fit("key", key)?;
        Ok(())
    }

    /// Sets the standard abbreviation.
    ///
    /// The abbreviation isn't validated against the POSIX grammar. One
    /// that can't be parsed back (like `A1`) makes the printed form of this
    /// time zone unparseable.
    pub fn set_std_abbreviation(&mut self, abbrev: &str) -> Result<(), Error> {
        self.std_abbrev = fit("standard abbreviation", abbrev)?;
        Ok(())
    }

    /// Sets the daylight abbreviation. See
    /// [`TimeZoneInfo::set_std_abbreviation`].
    pub fn set_dst_abbreviation(&mut self, abbrev: &str) -> Result<(), Error> {
        self.dst_abbrev = fit("daylight abbreviation", abbrev)?;
        Ok(())
    }

    /// Returns true when DST is in effect at the given raw instant in UTC.
    pub fn is_dst_at(&self, raw_utc: i64) -> bool {
        self.dst.check_dst_region(self.to_local_std_raw(raw_utc))
    }

    /// Returns the total offset from UTC, DST included, in effect at the
    /// given raw instant in UTC.
    pub fn offset_at(&self, raw_utc: i64) -> Duration {
        let offset = self.offset.to_duration();
        if self.is_dst_at(raw_utc) {
            offset + self.dst.offset_duration()
        } else {
            offset
        }
    }

    /// Returns the abbreviation in effect at the given raw instant in UTC.
    ///
    /// This may be empty. See [`TimeZoneInfo::std_abbreviation`].
    pub fn abbreviation_at(&self, raw_utc: i64) -> &str {
        if self.is_dst_at(raw_utc) {
            self.dst_abbreviation()
        } else {
            self.std_abbreviation()
        }
    }

    /// Converts a raw instant in UTC to local wall clock time, DST included.
    pub fn to_local_raw(&self, raw_utc: i64) -> i64 {
        raw_utc.saturating_add(self.offset_at(raw_utc).as_micros())
    }

    /// Returns the first DST transition strictly after the given raw instant
    /// in UTC.
    ///
    /// This returns `None` when this time zone never transitions, or when
    /// DST is in effect for the entire year.
    pub fn next_transition(&self, raw_utc: i64) -> Option<Transition> {
        let local = self.to_local_std_raw(raw_utc);
        let next = self.dst.next_transition_raw(local)?;
        let std = self.offset.to_duration();
        let offset =
            if next.is_dst() { std + self.dst.offset_duration() } else { std };
        Some(Transition {
            raw: next.raw().saturating_sub(std.as_micros()),
            is_dst: next.is_dst(),
            offset,
        })
    }

    fn to_local_std_raw(&self, raw_utc: i64) -> i64 {
        raw_utc.saturating_add(self.offset.to_duration().as_micros())
    }

    /// Returns true when this time zone behaves the same as `other`.
    ///
    /// That is, both have the same standard offset and standard
    /// abbreviation, and either neither observes DST or both observe it
    /// with the same rules, delta and daylight abbreviation. Names, keys
    /// and the informational DST flag are ignored. Abbreviations are
    /// compared after synthesizing missing ones, so an empty abbreviation
    /// is equivalent to `<+03>` on a `+03:00` offset.
    ///
    /// This is the sense in which the POSIX codec round trips.
    ///
    /// # Example
    ///
    /// ```
    /// use tzrule::tz::{regions, TimeZoneInfo};
    ///
    /// let tz = regions::US_CENTRAL;
    /// let reparsed = TimeZoneInfo::parse_posix(tz.to_string())?;
    /// assert_ne!(tz, reparsed);
    /// assert!(tz.is_equivalent(&reparsed));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn is_equivalent(&self, other: &TimeZoneInfo) -> bool {
        let std_quarters = i16::from(self.offset.quarters());
        let std_abbrev = |tz: &TimeZoneInfo| {
            posix::effective_abbreviation(tz.std_abbreviation(), std_quarters)
        };
        if self.offset != other.offset || std_abbrev(self) != std_abbrev(other)
        {
            return false;
        }
        match (self.dst.no_dst(), other.dst.no_dst()) {
            (true, true) => true,
            (false, false) => {
                let (d1, d2) = (self.dst, other.dst);
                let dst_quarters =
                    std_quarters + i16::from(d1.offset().quarters());
                d1.start() == d2.start()
                    && d1.end() == d2.end()
                    && d1.offset() == d2.offset()
                    && posix::effective_abbreviation(
                        self.dst_abbreviation(),
                        dst_quarters,
                    ) == posix::effective_abbreviation(
                        other.dst_abbreviation(),
                        dst_quarters,
                    )
            }
            _ => false,
        }
    }

    /// Parses a POSIX `TZ` string. The entire input must be consumed.
    ///
    /// The names and key of the time zone returned are empty.
    ///
    /// # Errors
    ///
    /// When the input doesn't match the grammar or a value is out of range.
    /// The error reports the byte offset at which parsing failed via
    /// [`Error::position`].
    ///
    /// # Example
    ///
    /// ```
    /// use tzrule::tz::TimeZoneInfo;
    ///
    /// let tz = TimeZoneInfo::parse_posix("<-04>4")?;
    /// assert!(tz.dst().no_dst());
    /// assert_eq!(tz.std_abbreviation(), "<-04>");
    ///
    /// let err = TimeZoneInfo::parse_posix("EST5EDT,M3.2.0").unwrap_err();
    /// assert_eq!(err.position(), Some(14));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse_posix(
        input: impl AsRef<[u8]>,
    ) -> Result<TimeZoneInfo, Error> {
        posix::parse(input.as_ref())
    }

    /// Parses a POSIX `TZ` string from the start of `input`, returning the
    /// number of bytes parsed along with the time zone. Trailing input is
    /// left alone.
    ///
    /// # Example
    ///
    /// ```
    /// use tzrule::tz::TimeZoneInfo;
    ///
    /// let input = b"EST5EDT,M3.2.0,M11.1.0\0garbage";
    /// let (tz, len) = TimeZoneInfo::parse_posix_prefix(input)?;
    /// assert_eq!(len, 22);
    /// assert_eq!(tz.std_abbreviation(), "EST");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse_posix_prefix(
        input: &[u8],
    ) -> Result<(TimeZoneInfo, usize), Error> {
        posix::parse_prefix(input)
    }

    /// Prints this time zone as a POSIX `TZ` string to the given sink.
    ///
    /// Each grammar token is written with its own call to
    /// [`Write::write_str`].
    pub fn write_posix(&self, wtr: &mut dyn Write) -> Result<(), Error> {
        posix::print(self, wtr)
    }

    /// Returns this time zone as a POSIX `TZ` string.
    pub fn to_posix_string(&self) -> String {
        let mut out = String::new();
        // Writing to a `String` can't fail.
        let _ = self.write_posix(&mut out);
        out
    }

    /// Prints this time zone as a NUL terminated POSIX `TZ` string into
    /// the given buffer, and returns the index of the terminator.
    ///
    /// Nothing is ever written past the end of `buf`. When the string
    /// doesn't fit, it is cut after the last abbreviation, offset or rule
    /// that fits whole. An empty `buf` is left untouched and `0` is
    /// returned.
    ///
    /// # Example
    ///
    /// ```
    /// use tzrule::tz::regions;
    ///
    /// let mut buf = [0xFF; 32];
    /// let len = regions::US_CENTRAL.to_posix_buffer(&mut buf);
    /// assert_eq!(&buf[..=len], b"CST6CDT,M3.2.0/2,M11.1.0/2\0");
    ///
    /// let mut buf = [0xFF; 20];
    /// let len = regions::US_CENTRAL.to_posix_buffer(&mut buf);
    /// assert_eq!(&buf[..=len], b"CST6CDT,M3.2.0/2\0");
    /// ```
    pub fn to_posix_buffer(&self, buf: &mut [u8]) -> usize {
        let mut wtr = NulTerminated::new(buf);
        if let Err(_err) = self.write_posix(&mut wtr) {
            debug!(
                "POSIX TZ string truncated to {} bytes: {_err}",
                wtr.filled().len(),
            );
        }
        wtr.finish()
    }
}

impl Default for TimeZoneInfo {
    fn default() -> TimeZoneInfo {
        TimeZoneInfo::EMPTY
    }
}

impl core::fmt::Display for TimeZoneInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        self.write_posix(&mut StdFmtWrite(f)).map_err(|_| core::fmt::Error)
    }
}

impl core::str::FromStr for TimeZoneInfo {
    type Err = Error;

    fn from_str(s: &str) -> Result<TimeZoneInfo, Error> {
        TimeZoneInfo::parse_posix(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeZoneInfo {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeZoneInfo {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<TimeZoneInfo, D::Error> {
        use serde::de;

        struct TimeZoneInfoVisitor;

        impl<'de> de::Visitor<'de> for TimeZoneInfoVisitor {
            type Value = TimeZoneInfo;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a POSIX TZ string")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<TimeZoneInfo, E> {
                TimeZoneInfo::parse_posix(value).map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<TimeZoneInfo, E> {
                self.visit_bytes(value.as_bytes())
            }
        }

        deserializer.deserialize_str(TimeZoneInfoVisitor)
    }
}

/// A DST transition found by [`TimeZoneInfo::next_transition`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Transition {
    raw: i64,
    is_dst: bool,
    offset: Duration,
}

impl Transition {
    /// The raw instant of the transition, in UTC.
    pub const fn raw(&self) -> i64 {
        self.raw
    }

    /// Whether DST begins (`true`) or ends (`false`) at this transition.
    pub const fn is_dst(&self) -> bool {
        self.is_dst
    }

    /// The total offset from UTC in effect starting at this transition.
    pub const fn offset(&self) -> Duration {
        self.offset
    }
}

fn fit<const N: usize>(
    what: &'static str,
    value: &str,
) -> Result<ArrayStr<N>, Error> {
    ArrayStr::new(value).ok_or_else(|| {
        E::TooLong { what, len: value.len(), max: ArrayStr::<N>::capacity() }
            .into()
    })
}
