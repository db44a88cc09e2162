use std::fmt::Display;
use std::ops::Index;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::time_of_day::TimeOfDay;
use crate::time_slot::TimeSlot;

// Reexport Weekday from chrono as part of the public type.
pub use chrono::Weekday;

/// Days of the week in storage order, starting on Sunday.
pub const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

pub(crate) fn wday_str(wday: Weekday) -> &'static str {
    match wday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

// DayHours

/// Hours of a single day in a weekly schedule: at most one open slot.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum DayHours {
    #[default]
    Closed,
    Open(TimeSlot),
}

impl DayHours {
    #[inline]
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }

    #[inline]
    pub fn slot(self) -> Option<TimeSlot> {
        match self {
            Self::Closed => None,
            Self::Open(slot) => Some(slot),
        }
    }

    /// Check if the day is open at given time.
    #[inline]
    pub fn contains(self, time: TimeOfDay) -> bool {
        self.slot().is_some_and(|slot| slot.contains(time))
    }

    /// Restrict these hours to the ones of another day, closing the day if
    /// they don't overlap.
    ///
    /// ```
    /// use delivery_hours_syntax::{DayHours, TimeSlot};
    ///
    /// let store = DayHours::Open(TimeSlot::parse("09:00", "12:00").unwrap());
    /// let driver = DayHours::Open(TimeSlot::parse("14:00", "18:00").unwrap());
    /// assert_eq!(store.intersection(driver), DayHours::Closed);
    /// assert_eq!(store.intersection(DayHours::Closed), DayHours::Closed);
    /// ```
    #[inline]
    pub fn intersection(self, other: Self) -> Self {
        match (self, other) {
            (Self::Open(x), Self::Open(y)) => x.intersection(y).into(),
            _ => Self::Closed,
        }
    }
}

impl From<TimeSlot> for DayHours {
    #[inline]
    fn from(slot: TimeSlot) -> Self {
        Self::Open(slot)
    }
}

impl From<Option<TimeSlot>> for DayHours {
    #[inline]
    fn from(slot: Option<TimeSlot>) -> Self {
        slot.map(Self::Open).unwrap_or_default()
    }
}

impl Display for DayHours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "off"),
            Self::Open(slot) => write!(f, "{slot}"),
        }
    }
}

// WeeklySchedule

/// Recurring hours for each day of the week, with a single slot per day.
///
/// All seven days always have an entry: a day that was never configured is
/// closed.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct WeeklySchedule {
    /// Indexed by the number of days from Sunday.
    days: [DayHours; 7],
}

impl WeeklySchedule {
    /// A schedule closed every day of the week.
    ///
    /// ```
    /// use delivery_hours_syntax::WeeklySchedule;
    ///
    /// assert!(WeeklySchedule::closed().is_always_closed());
    /// ```
    #[inline]
    pub fn closed() -> Self {
        Self::default()
    }

    /// A schedule that is open with the same slot every day.
    #[inline]
    pub fn every_day(slot: TimeSlot) -> Self {
        Self { days: [DayHours::Open(slot); 7] }
    }

    /// Build a schedule from the hours of each day.
    #[inline]
    pub fn from_fn(f: impl FnMut(Weekday) -> DayHours) -> Self {
        Self { days: WEEK.map(f) }
    }

    /// Parse the compact notation of a schedule.
    ///
    /// ```
    /// use delivery_hours_syntax::{DayHours, TimeSlot, Weekday, WeeklySchedule};
    ///
    /// let schedule = WeeklySchedule::parse("Mo-Fr 09:00-17:00; Sa 10:00-14:00").unwrap();
    /// assert_eq!(schedule[Weekday::Tue], TimeSlot::parse("09:00", "17:00").unwrap().into());
    /// assert_eq!(schedule[Weekday::Sun], DayHours::Closed);
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        crate::parser::parse(raw)
    }

    /// Replace the hours of a given day.
    #[inline]
    pub fn with_day(mut self, day: Weekday, hours: impl Into<DayHours>) -> Self {
        self.set(day, hours);
        self
    }

    #[inline]
    pub fn set(&mut self, day: Weekday, hours: impl Into<DayHours>) {
        self.days[day.num_days_from_sunday() as usize] = hours.into();
    }

    #[inline]
    pub fn get(&self, day: Weekday) -> DayHours {
        self.days[day.num_days_from_sunday() as usize]
    }

    /// Iterate over the hours of the week, starting on Sunday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, DayHours)> + '_ {
        WEEK.into_iter().zip(self.days.iter().copied())
    }

    /// Iterate over days with an open slot, starting on Sunday.
    pub fn open_days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.iter()
            .filter(|(_, hours)| !hours.is_closed())
            .map(|(day, _)| day)
    }

    #[inline]
    pub fn is_always_closed(&self) -> bool {
        self.days.iter().all(|hours| hours.is_closed())
    }
}

impl Index<Weekday> for WeeklySchedule {
    type Output = DayHours;

    #[inline]
    fn index(&self, day: Weekday) -> &Self::Output {
        &self.days[day.num_days_from_sunday() as usize]
    }
}

impl FromStr for WeeklySchedule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
