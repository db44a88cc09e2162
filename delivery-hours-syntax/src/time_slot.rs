use std::cmp::{max, min};
use std::fmt::Display;

use crate::error::{Error, Result};
use crate::time_of_day::TimeOfDay;

/// A contiguous open interval `[open, close)` within a single day.
///
/// Opening is always strictly before closing: slots can't be empty and can't
/// span over midnight.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeSlot {
    open: TimeOfDay,
    close: TimeOfDay,
}

impl TimeSlot {
    /// Create a new slot, returns `None` if it would be empty.
    ///
    /// ```
    /// use delivery_hours_syntax::{TimeOfDay, TimeSlot};
    ///
    /// let nine = TimeOfDay::new(9, 0).unwrap();
    /// let five = TimeOfDay::new(17, 0).unwrap();
    /// assert!(TimeSlot::new(nine, five).is_some());
    /// assert!(TimeSlot::new(five, nine).is_none());
    /// assert!(TimeSlot::new(nine, nine).is_none());
    /// ```
    #[inline]
    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Option<Self> {
        (open < close).then_some(Self { open, close })
    }

    /// Same as [`TimeSlot::new`] but reports empty slots as an error.
    #[inline]
    pub fn try_new(open: TimeOfDay, close: TimeOfDay) -> Result<Self> {
        Self::new(open, close).ok_or(Error::EmptySlot { open, close })
    }

    /// Build a slot from its raw `HH:MM` bounds.
    ///
    /// ```
    /// use delivery_hours_syntax::TimeSlot;
    ///
    /// assert!(TimeSlot::parse("09:00", "17:00").is_ok());
    /// assert!(TimeSlot::parse("17:00", "09:00").is_err());
    /// assert!(TimeSlot::parse("9am", "17:00").is_err());
    /// ```
    pub fn parse(open: &str, close: &str) -> Result<Self> {
        Self::try_new(open.parse()?, close.parse()?)
    }

    #[inline]
    pub fn open(self) -> TimeOfDay {
        self.open
    }

    #[inline]
    pub fn close(self) -> TimeOfDay {
        self.close
    }

    /// Check if a time is inside of the slot, closing time excluded.
    #[inline]
    pub fn contains(self, time: TimeOfDay) -> bool {
        self.open <= time && time < self.close
    }

    /// Check if two slots share some time. Slots that only touch each other
    /// don't overlap.
    ///
    /// ```
    /// use delivery_hours_syntax::TimeSlot;
    ///
    /// let morning = TimeSlot::parse("08:00", "12:00").unwrap();
    /// let noon = TimeSlot::parse("11:00", "14:00").unwrap();
    /// let afternoon = TimeSlot::parse("12:00", "18:00").unwrap();
    /// assert!(morning.overlaps(noon));
    /// assert!(!morning.overlaps(afternoon));
    /// ```
    #[inline]
    pub fn overlaps(self, other: Self) -> bool {
        self.open < other.close && other.open < self.close
    }

    /// Get the common part of two slots, if any.
    ///
    /// ```
    /// use delivery_hours_syntax::TimeSlot;
    ///
    /// let store = TimeSlot::parse("09:00", "20:00").unwrap();
    /// let driver = TimeSlot::parse("10:00", "22:00").unwrap();
    /// assert_eq!(store.intersection(driver), TimeSlot::parse("10:00", "20:00").ok());
    /// ```
    #[inline]
    pub fn intersection(self, other: Self) -> Option<Self> {
        Self::new(max(self.open, other.open), min(self.close, other.close))
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.open, self.close)
    }
}

/// Merge a set of slots into the minimal sequence of disjoint slots covering
/// them, sorted by opening time. Touching slots are merged together.
///
/// ```
/// use delivery_hours_syntax::{slots_union, TimeSlot};
///
/// let slots = [
///     TimeSlot::parse("13:00", "18:00").unwrap(),
///     TimeSlot::parse("10:00", "14:00").unwrap(),
///     TimeSlot::parse("20:00", "22:00").unwrap(),
/// ];
///
/// assert_eq!(
///     slots_union(slots),
///     [
///         TimeSlot::parse("10:00", "18:00").unwrap(),
///         TimeSlot::parse("20:00", "22:00").unwrap(),
///     ],
/// );
/// ```
pub fn slots_union(slots: impl IntoIterator<Item = TimeSlot>) -> Vec<TimeSlot> {
    let mut slots: Vec<_> = slots.into_iter().collect();
    slots.sort_unstable();
    let mut merged: Vec<TimeSlot> = Vec::with_capacity(slots.len());

    for slot in slots {
        match merged.last_mut() {
            Some(last) if slot.open <= last.close => last.close = max(last.close, slot.close),
            _ => merged.push(slot),
        }
    }

    merged
}
