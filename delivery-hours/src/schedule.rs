use std::fmt::Display;

use delivery_hours_syntax::{slots_union, DayHours, TimeOfDay, TimeSlot};

/// Describe the open slots of a single day.
///
/// Slots are always kept as a sequence of increasing slots that neither
/// overlap nor touch each other. An empty schedule is closed all day.
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct Schedule {
    pub(crate) inner: Vec<TimeSlot>,
}

impl Schedule {
    /// Creates a new empty schedule, which represents an always closed day.
    ///
    /// ```
    /// use delivery_hours::schedule::Schedule;
    ///
    /// assert!(Schedule::new().is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new schedule from a list of slots, merging slots that
    /// overlap or touch.
    ///
    /// ```
    /// use delivery_hours::schedule::Schedule;
    /// use delivery_hours::syntax::TimeSlot;
    ///
    /// let sch1 = Schedule::from_slots([
    ///     TimeSlot::parse("10:00", "14:00").unwrap(),
    ///     TimeSlot::parse("12:00", "16:00").unwrap(),
    /// ]);
    ///
    /// let sch2 = Schedule::from_slots([TimeSlot::parse("10:00", "16:00").unwrap()]);
    /// assert_eq!(sch1, sch2);
    /// ```
    pub fn from_slots(slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        Self { inner: slots_union(slots) }
    }

    /// Check if a schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.inner
    }

    /// Earliest slot of the day.
    pub fn first(&self) -> Option<TimeSlot> {
        self.inner.first().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeSlot> {
        self.inner.iter()
    }

    /// Check if the schedule is open at given time.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.inner.iter().any(|slot| slot.contains(time))
    }

    /// Merge two schedules together.
    pub fn addition(self, other: Self) -> Self {
        Self::from_slots(self.inner.into_iter().chain(other.inner))
    }

    /// Keep the parts of the schedule that are also covered by a slot.
    ///
    /// ```
    /// use delivery_hours::schedule;
    /// use delivery_hours::syntax::TimeSlot;
    ///
    /// let drivers = schedule! { 8,00 => 12,00; 16,00 => 23,00 };
    /// let store = TimeSlot::parse("10:00", "20:00").unwrap();
    /// assert_eq!(drivers.restrict(store), schedule! { 10,00 => 12,00; 16,00 => 20,00 });
    /// ```
    pub fn restrict(&self, slot: TimeSlot) -> Self {
        Self {
            inner: self
                .inner
                .iter()
                .filter_map(|curr| curr.intersection(slot))
                .collect(),
        }
    }

    /// Keep the parts of the schedule that are covered by both schedules.
    pub fn intersection(&self, other: &Self) -> Self {
        Self::from_slots(
            self.inner
                .iter()
                .flat_map(|slot| other.restrict(*slot).inner),
        )
    }
}

impl From<DayHours> for Schedule {
    fn from(hours: DayHours) -> Self {
        Self { inner: hours.slot().into_iter().collect() }
    }
}

impl From<TimeSlot> for Schedule {
    fn from(slot: TimeSlot) -> Self {
        Self { inner: vec![slot] }
    }
}

impl IntoIterator for Schedule {
    type Item = TimeSlot;
    type IntoIter = std::vec::IntoIter<TimeSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'s> IntoIterator for &'s Schedule {
    type Item = &'s TimeSlot;
    type IntoIter = std::slice::Iter<'s, TimeSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "off");
        }

        for (idx, slot) in self.inner.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{slot}")?;
        }

        Ok(())
    }
}

/// Macro that allows to quickly create a schedule.
///
/// ## Syntax
///
/// Slots are separated with semicolons and written as follows :
///
/// ```plain
/// {hour_open},{minutes_open} => {hour_close},{minutes_close}
/// ```
///
/// ```
/// use delivery_hours::syntax::TimeOfDay;
///
/// let lunch_and_dinner = delivery_hours::schedule! {
///     11,30 => 14,00;
///     18,30 => 22,00;
/// };
///
/// assert_eq!(lunch_and_dinner.slots().len(), 2);
/// assert!(lunch_and_dinner.contains(TimeOfDay::new(19, 0).unwrap()));
/// ```
#[macro_export]
macro_rules! schedule {
    (
        $( $hh1:expr,$mm1:expr => $hh2:expr,$mm2:expr );+
        $( ; )?
    ) => {{
        use $crate::schedule::Schedule;
        use $crate::syntax::{TimeOfDay, TimeSlot};

        Schedule::from_slots([
            $(
                TimeSlot::new(
                    TimeOfDay::new($hh1, $mm1).expect("Invalid slot start"),
                    TimeOfDay::new($hh2, $mm2).expect("Invalid slot end"),
                )
                .expect("Empty slot"),
            )+
        ])
    }};
}
