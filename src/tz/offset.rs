use crate::{
    error::{tz::offset::Error as E, Error},
    Duration,
};

const SECONDS_PER_QUARTER: i32 = 15 * 60;

/// A fixed UTC offset with 15 minute granularity.
///
/// Offsets are stored as a signed count of quarter hours. Positive offsets
/// are east of UTC. (Which is the opposite of the sign used in POSIX `TZ`
/// strings.)
///
/// The supported range is `-14:45..=+14:45`, i.e., strictly less than 15
/// hours (900 minutes) in either direction. This covers every offset in use
/// today along with the daylight saving deltas between two offsets.
///
/// # Example
///
/// ```
/// use tzrule::tz::Offset;
///
/// let offset = Offset::constant(5, 30);
/// assert_eq!(offset.minutes(), 330);
/// assert_eq!(offset.to_string(), "+05:30");
///
/// let offset = Offset::from_minutes(-210)?;
/// assert_eq!(offset, Offset::constant(-3, -30));
/// assert_eq!(offset.to_string(), "-03:30");
///
/// assert!(Offset::from_minutes(20).is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Offset {
    quarters: i8,
}

impl Offset {
    /// The offset of UTC itself.
    pub const UTC: Offset = Offset { quarters: 0 };

    /// The smallest possible offset, `-14:45`.
    pub const MIN: Offset = Offset { quarters: -59 };

    /// The largest possible offset, `+14:45`.
    pub const MAX: Offset = Offset { quarters: 59 };

    /// One hour east of UTC. Also the default daylight saving delta.
    pub const HOUR: Offset = Offset { quarters: 4 };

    /// Creates an offset from hours and minutes in a `const` context.
    ///
    /// Both values must have the same sign (or be zero), the minutes must be
    /// a multiple of 15 and the result must be in range.
    ///
    /// # Panics
    ///
    /// When any of the above doesn't hold. In a `const` context, this is a
    /// compile error.
    pub const fn constant(hours: i8, minutes: i8) -> Offset {
        if (hours > 0 && minutes < 0) || (hours < 0 && minutes > 0) {
            panic!("hours and minutes of an offset must have the same sign");
        }
        if minutes % 15 != 0 || minutes <= -60 || minutes >= 60 {
            panic!("minutes of an offset must be a multiple of 15 below 60");
        }
        let quarters = hours as i16 * 4 + minutes as i16 / 15;
        if quarters < Offset::MIN.quarters as i16
            || quarters > Offset::MAX.quarters as i16
        {
            panic!("offset is out of range");
        }
        Offset { quarters: quarters as i8 }
    }

    /// Creates an offset from a signed count of quarter hours.
    pub fn from_quarters(quarters: i8) -> Result<Offset, Error> {
        if !(Offset::MIN.quarters..=Offset::MAX.quarters).contains(&quarters) {
            return Err(Error::range(
                "offset quarter hours",
                quarters,
                Offset::MIN.quarters,
                Offset::MAX.quarters,
            ));
        }
        Ok(Offset { quarters })
    }

    /// Creates an offset from a signed count of minutes.
    ///
    /// This fails when the minutes aren't a multiple of 15 or when the
    /// offset is out of range.
    pub fn from_minutes(minutes: i32) -> Result<Offset, Error> {
        Offset::from_seconds(minutes.saturating_mul(60))
    }

    /// Creates an offset from a signed count of seconds.
    ///
    /// This fails when the seconds aren't a multiple of 900 or when the
    /// offset is out of range.
    pub fn from_seconds(seconds: i32) -> Result<Offset, Error> {
        if seconds % SECONDS_PER_QUARTER != 0 {
            return Err(E::NotQuarterHour { seconds }.into());
        }
        let quarters = seconds / SECONDS_PER_QUARTER;
        let min = i32::from(Offset::MIN.quarters);
        let max = i32::from(Offset::MAX.quarters);
        if !(min..=max).contains(&quarters) {
            return Err(Error::range(
                "offset quarter hours",
                quarters,
                min,
                max,
            ));
        }
        // OK because of the range check above.
        Ok(Offset { quarters: quarters as i8 })
    }

    pub const fn quarters(self) -> i8 {
        self.quarters
    }

    pub const fn minutes(self) -> i32 {
        self.quarters as i32 * 15
    }

    pub const fn seconds(self) -> i32 {
        self.quarters as i32 * SECONDS_PER_QUARTER
    }

    pub const fn to_duration(self) -> Duration {
        Duration::from_secs(self.seconds() as i64)
    }

    pub const fn is_negative(self) -> bool {
        self.quarters < 0
    }

    pub const fn is_zero(self) -> bool {
        self.quarters == 0
    }

    /// Returns the absolute hours component of this offset.
    pub(crate) const fn part_hours(self) -> u8 {
        self.quarters.unsigned_abs() / 4
    }

    /// Returns the absolute minutes component of this offset, in `0..=45`.
    pub(crate) const fn part_minutes(self) -> u8 {
        (self.quarters.unsigned_abs() % 4) * 15
    }
}

impl core::fmt::Display for Offset {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let sign = if self.is_negative() { '-' } else { '+' };
        write!(
            f,
            "{sign}{hours:02}:{minutes:02}",
            hours = self.part_hours(),
            minutes = self.part_minutes(),
        )
    }
}
