use std::iter::FusedIterator;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use delivery_hours_syntax::{TimeOfDay, TimeSlot, Weekday};

use crate::effective::EffectiveSchedule;
use crate::localization::{Localize, NoLocation};
use crate::schedule::Schedule;

/// Which bound of a slot the lead time is measured against.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum LeadTimeBoundary {
    /// A slot is offered if it opens at least the lead time after now, this
    /// is the "order N hours before the window starts" policy.
    #[default]
    SlotOpen,
    /// A slot is offered if it closes at least the lead time after now, which
    /// keeps slots that are already running.
    SlotClose,
}

impl LeadTimeBoundary {
    fn of(self, slot: TimeSlot) -> TimeOfDay {
        match self {
            Self::SlotOpen => slot.open(),
            Self::SlotClose => slot.close(),
        }
    }
}

/// A calendar date with some delivery slots left.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct AvailableDeliveryDate {
    pub date: NaiveDate,
    /// Slots of the day that can still be ordered for
    pub slots: Schedule,
    pub is_today: bool,
    pub is_tomorrow: bool,
}

impl AvailableDeliveryDate {
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// The date formatted as `YYYY-MM-DD`.
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Projects an effective weekly schedule on the calendar.
///
/// ```
/// use chrono::NaiveDateTime;
/// use delivery_hours::{DateProjector, EffectiveSchedule, LeadTimeBoundary};
/// use delivery_hours::syntax::WeeklySchedule;
///
/// let hours: WeeklySchedule = "Mo-Fr 09:00-17:00".parse().unwrap();
/// let effective = EffectiveSchedule::from(hours);
///
/// // Monday 2025-10-20 at 10:00
/// let now = NaiveDateTime::parse_from_str("2025-10-20 10:00", "%Y-%m-%d %H:%M").unwrap();
///
/// let checkout = DateProjector::new(7, 24);
/// let first = checkout.project(&effective, now).next().unwrap();
/// assert_eq!(first.iso_date(), "2025-10-22");
///
/// let list_view = DateProjector::new(7, 0).with_boundary(LeadTimeBoundary::SlotClose);
/// let first = list_view.project(&effective, now).next().unwrap();
/// assert!(first.is_today);
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct DateProjector {
    lookahead_days: u32,
    min_lead: TimeDelta,
    boundary: LeadTimeBoundary,
}

impl DateProjector {
    /// Two weeks of dates, today included.
    pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 14;

    /// Consider `lookahead_days` calendar days starting today and only offer
    /// slots that are at least `min_lead_hours` away.
    pub fn new(lookahead_days: u32, min_lead_hours: u32) -> Self {
        Self {
            lookahead_days,
            min_lead: TimeDelta::hours(min_lead_hours.into()),
            boundary: LeadTimeBoundary::default(),
        }
    }

    /// Set which bound of the slots is compared against the lead time.
    pub fn with_boundary(self, boundary: LeadTimeBoundary) -> Self {
        Self { boundary, ..self }
    }

    /// Set a lead time with a finer precision than hours.
    pub fn with_min_lead(self, min_lead: TimeDelta) -> Self {
        Self { min_lead, ..self }
    }

    pub fn lookahead_days(&self) -> u32 {
        self.lookahead_days
    }

    pub fn min_lead(&self) -> TimeDelta {
        self.min_lead
    }

    pub fn boundary(&self) -> LeadTimeBoundary {
        self.boundary
    }

    /// Iterate over dates within the horizon that have slots left, by
    /// increasing date.
    ///
    /// The result only depends on the input: calling this again with the
    /// same schedule and the same `now` yields the same dates.
    pub fn project<'s>(
        &self,
        schedule: &'s EffectiveSchedule,
        now: NaiveDateTime,
    ) -> ProjectionIter<'s> {
        self.project_localized(schedule, now, NoLocation)
    }

    /// Same as [`DateProjector::project`] for a store in a given location.
    ///
    /// Dates and slots follow the wall-clock time of the store while the lead
    /// time is measured in actual elapsed time, which differs around DST
    /// transitions.
    ///
    /// ```
    /// use chrono::TimeZone;
    /// use delivery_hours::{DateProjector, EffectiveSchedule};
    /// use delivery_hours::localization::TzLocation;
    /// use delivery_hours::syntax::WeeklySchedule;
    ///
    /// let tz = chrono_tz::Europe::Madrid;
    /// let hours: WeeklySchedule = "Su 10:30-12:00".parse().unwrap();
    /// let effective = EffectiveSchedule::from(hours);
    ///
    /// // Clocks move forward during the night before Sunday, 2025-03-30
    /// let now = tz.with_ymd_and_hms(2025, 3, 29, 10, 0, 0).unwrap();
    /// let dates = DateProjector::new(2, 24).project_localized(&effective, now, TzLocation::new(tz));
    /// assert_eq!(dates.count(), 0);
    /// ```
    pub fn project_localized<'s, L: Localize>(
        &self,
        schedule: &'s EffectiveSchedule,
        now: L::DateTime,
        locale: L,
    ) -> ProjectionIter<'s, L> {
        let cutoff = locale.naive_utc(&now).checked_add_signed(self.min_lead);

        ProjectionIter {
            projector: *self,
            schedule,
            today: locale.naive(now).date(),
            cutoff,
            locale,
            offset: 0,
        }
    }

    /// Slots of a day that satisfy the lead time.
    fn offered_slots<L: Localize>(
        &self,
        day: &Schedule,
        date: NaiveDate,
        cutoff: NaiveDateTime,
        locale: &L,
    ) -> Schedule {
        // Filtering keeps slots sorted and disjoint.
        Schedule {
            inner: day
                .iter()
                .copied()
                .filter(|slot| {
                    slot_instant(date, self.boundary.of(*slot))
                        .map(|instant| locale.naive_utc(&locale.datetime(instant)))
                        .is_some_and(|instant| instant >= cutoff)
                })
                .collect(),
        }
    }
}

impl Default for DateProjector {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LOOKAHEAD_DAYS, 0)
    }
}

/// Wall-clock time of a time of day, *24:00* being the following midnight.
pub(crate) fn slot_instant(date: NaiveDate, time: TimeOfDay) -> Option<NaiveDateTime> {
    date.and_time(NaiveTime::MIN)
        .checked_add_signed(TimeDelta::minutes(time.mins_from_midnight().into()))
}

/// Return value for [`DateProjector::project`].
#[derive(Clone, Debug)]
pub struct ProjectionIter<'s, L: Localize = NoLocation> {
    projector: DateProjector,
    schedule: &'s EffectiveSchedule,
    locale: L,
    /// Date of `now` in the store's wall-clock time
    today: NaiveDate,
    /// Earliest instant a slot bound may be at, `None` when out of range
    cutoff: Option<NaiveDateTime>,
    /// Number of days from today of the next date to consider
    offset: u32,
}

impl<L: Localize> Iterator for ProjectionIter<'_, L> {
    type Item = AvailableDeliveryDate;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(cutoff) = self.cutoff else {
            self.offset = self.projector.lookahead_days;
            return None;
        };

        while self.offset < self.projector.lookahead_days {
            let offset = self.offset;
            self.offset += 1;

            let Some(date) = self.today.checked_add_days(Days::new(offset.into())) else {
                // Reached the end of supported dates
                self.offset = self.projector.lookahead_days;
                return None;
            };

            let slots = self.projector.offered_slots(
                &self.schedule[date.weekday()],
                date,
                cutoff,
                &self.locale,
            );

            if !slots.is_empty() {
                return Some(AvailableDeliveryDate {
                    date,
                    slots,
                    is_today: offset == 0,
                    is_tomorrow: offset == 1,
                });
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.projector.lookahead_days - self.offset;
        (0, usize::try_from(remaining).ok())
    }
}

impl<L: Localize> FusedIterator for ProjectionIter<'_, L> {}
