use crate::{
    civil::{self, MICROS_PER_HOUR},
    tz::{Offset, TransitionRule},
    Duration,
};

/// A pair of transition rules along with the offset applied while daylight
/// saving time is in effect.
///
/// The start rule is the transition from standard time into DST, expressed
/// in local standard time. The end rule is the transition from DST back to
/// standard time, expressed in local DST wall clock time. That is, an end
/// rule of `M11.1.0/2` with a one hour DST offset fires at 01:00 standard
/// time.
///
/// The offset is the DST delta, i.e., the amount added to the standard
/// offset while DST is in effect. It is usually one hour, but can be any
/// multiple of 15 minutes in the range `-08:00..=+07:45`.
///
/// An adjustment with either rule absent or with a zero offset never
/// transitions. See [`DstAdjustment::no_dst`].
///
/// # Example
///
/// ```
/// use tzrule::{
///     civil::{self, Weekday},
///     tz::{DstAdjustment, Offset, TransitionRule, Week},
/// };
///
/// let dst = DstAdjustment::new(
///     TransitionRule::floating(2, 3, Weekday::Sunday, Week::Second, 0),
///     TransitionRule::floating(2, 11, Weekday::Sunday, Week::First, 0),
///     Offset::HOUR,
/// );
/// let raw = civil::raw_from_days(civil::days_from_date(2024, 7, 1));
/// assert!(dst.check_dst_region(raw));
///
/// let next = dst.next_transition_raw(raw).unwrap();
/// assert!(!next.is_dst());
/// assert_eq!(
///     civil::date_from_days(civil::days_from_raw(next.raw())),
///     (2024, 11, 3),
/// );
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DstAdjustment {
    start: TransitionRule,
    end: TransitionRule,
    offset: Offset,
    is_dst: bool,
}

impl DstAdjustment {
    /// An adjustment that never transitions.
    pub const NONE: DstAdjustment = DstAdjustment {
        start: TransitionRule::NO_DST,
        end: TransitionRule::NO_DST,
        offset: Offset::UTC,
        is_dst: false,
    };

    pub const fn new(
        start: TransitionRule,
        end: TransitionRule,
        offset: Offset,
    ) -> DstAdjustment {
        DstAdjustment { start, end, offset, is_dst: false }
    }

    pub const fn start(&self) -> TransitionRule {
        self.start
    }

    pub const fn end(&self) -> TransitionRule {
        self.end
    }

    /// Returns the DST delta.
    pub const fn offset(&self) -> Offset {
        self.offset
    }

    /// Returns the DST delta as a duration.
    pub const fn offset_duration(&self) -> Duration {
        self.offset.to_duration()
    }

    /// Returns the informational "DST is currently observed" flag.
    ///
    /// Nothing in this crate reads this flag. It is carried for callers
    /// that want to cache the last known state alongside the rules.
    pub const fn is_dst(&self) -> bool {
        self.is_dst
    }

    pub fn set_start(&mut self, rule: TransitionRule) {
        self.start = rule;
    }

    pub fn set_end(&mut self, rule: TransitionRule) {
        self.end = rule;
    }

    pub fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
    }

    pub fn set_is_dst(&mut self, yes: bool) {
        self.is_dst = yes;
    }

    /// Returns true when this adjustment never transitions. This is the
    /// case when either rule is absent or when the DST delta is zero.
    pub const fn no_dst(&self) -> bool {
        self.start.is_no_dst() || self.end.is_no_dst() || self.offset.is_zero()
    }

    /// Returns true when DST is in effect at the given raw instant, which is
    /// in local standard time (i.e., without DST applied).
    ///
    /// When the start rule comes earlier in the year than the end rule (the
    /// northern hemisphere pattern), DST is in effect between them.
    /// Otherwise DST wraps around the end of the year and is in effect
    /// outside of them. An end rule is compared in DST wall clock time, so
    /// an end of DST at `J1/0` happens on December 31st in standard time,
    /// and this returns `false` from that instant on.
    ///
    /// The answer always agrees with
    /// [`DstAdjustment::next_transition_raw`]: DST flips at exactly the
    /// instants it reports.
    pub fn check_dst_region(&self, raw: i64) -> bool {
        if self.no_dst() {
            return false;
        }
        self.transitions_around(civil::year_from_raw(raw))
            .map_or(false, |transitions| state_at(&transitions, raw))
    }

    /// Returns the first transition strictly after the given raw instant,
    /// which is in local standard time.
    ///
    /// The instant of the transition returned is also in local standard
    /// time, so the end of DST is reported at its DST wall clock time minus
    /// the DST delta. When the end of DST in one year coincides with the
    /// start in the next, nothing changes there and no transition is
    /// reported.
    ///
    /// This returns `None` when this adjustment never transitions, or when
    /// DST covers entire years (e.g., `EST5EDT,0/0,J365/25`).
    pub fn next_transition_raw(&self, raw: i64) -> Option<DstTransition> {
        if self.no_dst() {
            return None;
        }
        let before = self.check_dst_region(raw);
        let mut year = civil::year_from_raw(raw);
        // Leap years are at most 8 years apart, so this sees every pattern
        // the rules can produce.
        for _ in 0..10 {
            let transitions = self.transitions_around(year)?;
            let found = transitions
                .iter()
                .filter(|t| t.raw > raw && civil::year_from_raw(t.raw) == year)
                .find(|t| state_at(&transitions, t.raw) != before);
            if let Some(t) = found {
                return Some(DstTransition { raw: t.raw, is_dst: !before });
            }
            year = civil::next_year(year);
        }
        trace!(
            "DST never changes in the 10 years after {raw} \
             (in effect: {before}), so there is no next transition",
        );
        None
    }

    fn delta(&self) -> i64 {
        self.offset_duration().as_micros()
    }

    /// Returns the transitions of `year` and of the two years on either
    /// side of it, ordered by when they happen.
    ///
    /// Transitions at the same instant stay in the order the rules produce
    /// them, so the last one at any instant gives the state after it. This
    /// is what makes an end of DST that lands on the next start a no-op.
    ///
    /// Only the state at instants within `year` is sure to be complete.
    fn transitions_around(&self, year: i32) -> Option<[DstTransition; 10]> {
        let previous = civil::previous_year(year);
        let next = civil::next_year(year);
        let years = [
            civil::previous_year(previous),
            previous,
            year,
            next,
            civil::next_year(next),
        ];
        let unset = DstTransition { raw: 0, is_dst: false };
        let mut ordered = [(unset, 0u8); 10];
        for (i, &year) in years.iter().enumerate() {
            let days_until = civil::days_until_year(year);
            let is_leap = civil::is_leap_year(year);
            let start = DstTransition {
                raw: resolve(&self.start, days_until, is_leap)?,
                is_dst: true,
            };
            let end = DstTransition {
                raw: resolve(&self.end, days_until, is_leap)?
                    .saturating_sub(self.delta()),
                is_dst: false,
            };
            let pair =
                if start.raw <= end.raw { [start, end] } else { [end, start] };
            for (j, t) in pair.into_iter().enumerate() {
                let order = 2 * i + j;
                // OK because there are only 10 transitions.
                ordered[order] = (t, order as u8);
            }
        }
        ordered.sort_unstable_by_key(|&(t, order)| (t.raw, order));
        Some(ordered.map(|(t, _)| t))
    }
}

impl Default for DstAdjustment {
    fn default() -> DstAdjustment {
        DstAdjustment::NONE
    }
}

/// A transition found by [`DstAdjustment::next_transition_raw`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DstTransition {
    raw: i64,
    is_dst: bool,
}

impl DstTransition {
    /// The raw instant of the transition, in local standard time.
    pub const fn raw(&self) -> i64 {
        self.raw
    }

    /// Whether DST begins (`true`) or ends (`false`) at this transition.
    pub const fn is_dst(&self) -> bool {
        self.is_dst
    }
}

/// Returns whether DST is in effect after the last of the given ordered
/// transitions that happens at or before `raw`.
fn state_at(transitions: &[DstTransition], raw: i64) -> bool {
    transitions
        .iter()
        .take_while(|t| t.raw <= raw)
        .last()
        .map_or(false, |t| t.is_dst)
}

/// Resolves a rule in a year to a raw instant in the rule's own wall clock
/// time.
fn resolve(
    rule: &TransitionRule,
    days_until: i64,
    is_leap: bool,
) -> Option<i64> {
    let day_of_year =
        rule.day_of_year_of_transition_helper(days_until, is_leap)?;
    let raw = civil::raw_from_days(days_until + i64::from(day_of_year))
        .saturating_add(i64::from(rule.transition_time()) * MICROS_PER_HOUR);
    Some(raw)
}
