/// A day of the week.
///
/// POSIX `Mm.w.d` rules number weekdays from Sunday (`0`) through Saturday
/// (`6`), while the packed form of a transition rule numbers them from
/// Sunday (`1`) through Saturday (`7`). Conversions for both are provided.
///
/// # Example
///
/// ```
/// use tzrule::civil::Weekday;
///
/// assert_eq!(Weekday::from_sunday_zero_offset(0), Some(Weekday::Sunday));
/// assert_eq!(Weekday::Saturday.to_sunday_one_offset(), 7);
/// assert_eq!(Weekday::Friday.days_since(Weekday::Sunday), 5);
/// assert_eq!(Weekday::Sunday.days_since(Weekday::Friday), 2);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Converts a Sunday based offset in `0..=6` to a weekday.
    ///
    /// Returns `None` for anything outside that range.
    pub const fn from_sunday_zero_offset(offset: i8) -> Option<Weekday> {
        if offset < 0 || offset > 6 {
            return None;
        }
        Some(Weekday::from_days_since_sunday(offset as i64))
    }

    /// Converts a Sunday based offset in `1..=7` to a weekday.
    ///
    /// Returns `None` for anything outside that range.
    pub const fn from_sunday_one_offset(offset: i8) -> Option<Weekday> {
        if offset < 1 || offset > 7 {
            return None;
        }
        Weekday::from_sunday_zero_offset(offset - 1)
    }

    /// Returns this weekday as an offset from Sunday in `0..=6`.
    pub const fn to_sunday_zero_offset(self) -> i8 {
        self as i8
    }

    /// Returns this weekday as an offset from Sunday in `1..=7`.
    pub const fn to_sunday_one_offset(self) -> i8 {
        self.to_sunday_zero_offset() + 1
    }

    /// Returns the number of days (`0..=6`) from `other` forward to `self`.
    pub const fn days_since(self, other: Weekday) -> i8 {
        (self.to_sunday_zero_offset() - other.to_sunday_zero_offset())
            .rem_euclid(7)
    }

    /// Any number of days, counted from some Sunday, to a weekday.
    pub(crate) const fn from_days_since_sunday(days: i64) -> Weekday {
        match days.rem_euclid(7) {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }
}
