const MICROS_PER_MILLI: i64 = 1_000;
const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_MINUTE: i64 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: i64 = 60 * MICROS_PER_MINUTE;
const MICROS_PER_DAY: i64 = 24 * MICROS_PER_HOUR;

/// A signed span of time with microsecond precision.
///
/// This is the same unit as a raw instant, so the difference between two
/// raw instants is a `Duration` and a raw instant plus a `Duration` is a raw
/// instant.
///
/// Construction and arithmetic saturate at the limits of `i64` instead of
/// panicking or wrapping.
///
/// # Example
///
/// ```
/// use tzrule::Duration;
///
/// let dur = Duration::from_hours(26) + Duration::from_mins(3);
/// assert_eq!(dur.as_hours(), 26);
/// assert_eq!(dur.as_mins(), 26 * 60 + 3);
///
/// let parts = (-dur).parts();
/// assert!(parts.negative);
/// assert_eq!((parts.days, parts.hours, parts.minutes), (1, 2, 3));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Duration {
    micros: i64,
}

impl Duration {
    /// A duration of zero time.
    pub const ZERO: Duration = Duration { micros: 0 };

    /// The smallest possible duration.
    pub const MIN: Duration = Duration { micros: i64::MIN };

    /// The largest possible duration.
    pub const MAX: Duration = Duration { micros: i64::MAX };

    pub const fn from_micros(micros: i64) -> Duration {
        Duration { micros }
    }

    pub const fn from_millis(millis: i64) -> Duration {
        Duration::from_micros(millis.saturating_mul(MICROS_PER_MILLI))
    }

    pub const fn from_secs(secs: i64) -> Duration {
        Duration::from_micros(secs.saturating_mul(MICROS_PER_SECOND))
    }

    pub const fn from_mins(mins: i64) -> Duration {
        Duration::from_micros(mins.saturating_mul(MICROS_PER_MINUTE))
    }

    pub const fn from_hours(hours: i64) -> Duration {
        Duration::from_micros(hours.saturating_mul(MICROS_PER_HOUR))
    }

    pub const fn from_days(days: i64) -> Duration {
        Duration::from_micros(days.saturating_mul(MICROS_PER_DAY))
    }

    pub const fn as_micros(self) -> i64 {
        self.micros
    }

    /// Returns the number of whole milliseconds, truncating toward zero.
    pub const fn as_millis(self) -> i64 {
        self.micros / MICROS_PER_MILLI
    }

    /// Returns the number of whole seconds, truncating toward zero.
    pub const fn as_secs(self) -> i64 {
        self.micros / MICROS_PER_SECOND
    }

    /// Returns the number of whole minutes, truncating toward zero.
    pub const fn as_mins(self) -> i64 {
        self.micros / MICROS_PER_MINUTE
    }

    /// Returns the number of whole hours, truncating toward zero.
    pub const fn as_hours(self) -> i64 {
        self.micros / MICROS_PER_HOUR
    }

    /// Returns the number of whole days, truncating toward zero.
    pub const fn as_days(self) -> i64 {
        self.micros / MICROS_PER_DAY
    }

    pub const fn is_zero(self) -> bool {
        self.micros == 0
    }

    pub const fn is_negative(self) -> bool {
        self.micros < 0
    }

    /// Returns `-1`, `0` or `1` depending on the sign of this duration.
    pub const fn signum(self) -> i8 {
        self.micros.signum() as i8
    }

    /// Returns the absolute value of this duration.
    ///
    /// `Duration::MIN.abs()` saturates to `Duration::MAX`.
    pub const fn abs(self) -> Duration {
        Duration { micros: self.micros.saturating_abs() }
    }

    pub const fn checked_add(self, rhs: Duration) -> Option<Duration> {
        match self.micros.checked_add(rhs.micros) {
            Some(micros) => Some(Duration { micros }),
            None => None,
        }
    }

    pub const fn checked_sub(self, rhs: Duration) -> Option<Duration> {
        match self.micros.checked_sub(rhs.micros) {
            Some(micros) => Some(Duration { micros }),
            None => None,
        }
    }

    pub const fn saturating_add(self, rhs: Duration) -> Duration {
        Duration { micros: self.micros.saturating_add(rhs.micros) }
    }

    pub const fn saturating_sub(self, rhs: Duration) -> Duration {
        Duration { micros: self.micros.saturating_sub(rhs.micros) }
    }

    /// Splits this duration into its sign and unsigned calendar-free
    /// components, for use by a formatter.
    pub const fn parts(self) -> DurationParts {
        let negative = self.micros < 0;
        let mut rem = self.micros.unsigned_abs();
        let days = rem / MICROS_PER_DAY as u64;
        rem %= MICROS_PER_DAY as u64;
        let hours = (rem / MICROS_PER_HOUR as u64) as u8;
        rem %= MICROS_PER_HOUR as u64;
        let minutes = (rem / MICROS_PER_MINUTE as u64) as u8;
        rem %= MICROS_PER_MINUTE as u64;
        let seconds = (rem / MICROS_PER_SECOND as u64) as u8;
        let micros = (rem % MICROS_PER_SECOND as u64) as u32;
        DurationParts { negative, days, hours, minutes, seconds, micros }
    }
}

impl core::ops::Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        self.saturating_add(rhs)
    }
}

impl core::ops::AddAssign for Duration {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl core::ops::Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        self.saturating_sub(rhs)
    }
}

impl core::ops::SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

impl core::ops::Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration { micros: self.micros.saturating_neg() }
    }
}

impl core::ops::Mul<i64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: i64) -> Duration {
        Duration { micros: self.micros.saturating_mul(rhs) }
    }
}

/// The components of a [`Duration`].
///
/// Every field other than `days` is bounded by the next larger unit, e.g.,
/// `hours` is always in `0..=23`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DurationParts {
    pub negative: bool,
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub micros: u32,
}
