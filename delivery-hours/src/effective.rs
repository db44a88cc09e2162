use std::ops::Index;

use delivery_hours_syntax::{DayHours, Weekday, WeeklySchedule, WEEK};

use crate::schedule::Schedule;

/// Slots during which a store can actually deliver, for each day of the week.
///
/// This is the intersection of the store hours with the union of the
/// availability of all active drivers. It only reflects the snapshot of
/// store and drivers it was computed from: drivers go online and offline,
/// so it must be computed again from fresh inputs instead of being kept
/// around.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct EffectiveSchedule {
    /// Indexed by the number of days from Sunday.
    days: [Schedule; 7],
}

impl EffectiveSchedule {
    /// Intersect store hours with the union of the availability of active
    /// drivers.
    ///
    /// A store without any active driver can't deliver, whatever its hours.
    ///
    /// ```
    /// use delivery_hours::EffectiveSchedule;
    /// use delivery_hours::syntax::{Weekday, WeeklySchedule};
    ///
    /// let store: WeeklySchedule = "Mo-Sa 09:00-20:00".parse().unwrap();
    /// let alice: WeeklySchedule = "Tu 10:00-14:00".parse().unwrap();
    /// let bob: WeeklySchedule = "Tu 13:00-22:00".parse().unwrap();
    ///
    /// let effective = EffectiveSchedule::compute(&store, [&alice, &bob]);
    /// assert_eq!(effective[Weekday::Tue].to_string(), "10:00-20:00");
    /// assert!(effective[Weekday::Mon].is_empty());
    ///
    /// let no_driver = EffectiveSchedule::compute(&store, []);
    /// assert!(no_driver.is_always_closed());
    /// ```
    pub fn compute<'d>(
        store: &WeeklySchedule,
        active_drivers: impl IntoIterator<Item = &'d WeeklySchedule>,
    ) -> Self {
        let drivers: Vec<_> = active_drivers.into_iter().collect();

        if drivers.is_empty() {
            #[cfg(feature = "log")]
            log::debug!("No active driver, delivery is closed all week");

            return Self::default();
        }

        Self {
            days: WEEK.map(|day| {
                effective_day(store.get(day), drivers.iter().map(|driver| driver.get(day)))
            }),
        }
    }

    #[inline]
    pub fn get(&self, day: Weekday) -> &Schedule {
        &self.days[day.num_days_from_sunday() as usize]
    }

    /// Iterate over the schedule of each day, starting on Sunday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &Schedule)> + '_ {
        WEEK.into_iter().zip(self.days.iter())
    }

    /// Iterate over days with at least one slot, starting on Sunday.
    pub fn open_days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.iter()
            .filter(|(_, schedule)| !schedule.is_empty())
            .map(|(day, _)| day)
    }

    pub fn is_always_closed(&self) -> bool {
        self.days.iter().all(Schedule::is_empty)
    }

    /// Convert back to a schedule with a single slot per day.
    ///
    /// When drivers availability leaves several disjoint windows in a day,
    /// only the earliest one is kept.
    ///
    /// ```
    /// use delivery_hours::EffectiveSchedule;
    /// use delivery_hours::syntax::{Weekday, WeeklySchedule};
    ///
    /// let store: WeeklySchedule = "We 07:00-22:00".parse().unwrap();
    /// let alice: WeeklySchedule = "We 08:00-10:00".parse().unwrap();
    /// let bob: WeeklySchedule = "We 18:00-20:00".parse().unwrap();
    ///
    /// let effective = EffectiveSchedule::compute(&store, [&alice, &bob]);
    /// assert_eq!(effective[Weekday::Wed].slots().len(), 2);
    /// assert_eq!(effective.to_weekly_schedule().to_string(), "Su-Tu off; We 08:00-10:00; Th-Sa off");
    /// ```
    pub fn to_weekly_schedule(&self) -> WeeklySchedule {
        WeeklySchedule::from_fn(|day| self.get(day).first().into())
    }
}

/// Hours of a store for one day once restricted to its drivers.
fn effective_day(store: DayHours, drivers: impl Iterator<Item = DayHours>) -> Schedule {
    let DayHours::Open(store_slot) = store else {
        return Schedule::new();
    };

    Schedule::from_slots(drivers.filter_map(DayHours::slot)).restrict(store_slot)
}

impl From<&WeeklySchedule> for EffectiveSchedule {
    /// Use plain weekly hours as if drivers were always available.
    fn from(schedule: &WeeklySchedule) -> Self {
        Self {
            days: WEEK.map(|day| schedule.get(day).into()),
        }
    }
}

impl From<WeeklySchedule> for EffectiveSchedule {
    fn from(schedule: WeeklySchedule) -> Self {
        Self::from(&schedule)
    }
}

impl Index<Weekday> for EffectiveSchedule {
    type Output = Schedule;

    #[inline]
    fn index(&self, day: Weekday) -> &Self::Output {
        self.get(day)
    }
}
