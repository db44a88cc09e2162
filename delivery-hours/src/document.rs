//! Schedule records as they are stored in the document database.
//!
//! Records are edited by hand through admin forms and may be incomplete or
//! malformed. Loading them never fails: a day that can't be read is closed
//! and the issue is logged and reported to the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use delivery_hours_syntax::{DayHours, TimeSlot, Weekday, WeeklySchedule, WEEK};

use crate::error::{Error, ParserError};
use crate::localization::Language;

/// Hours of a single day.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHoursDocument {
    #[serde(default)]
    pub open: String,
    #[serde(default)]
    pub close: String,
    #[serde(default)]
    pub closed: bool,
}

impl DayHoursDocument {
    /// Read the hours of this day, `open` and `close` are ignored for a
    /// closed day.
    pub fn to_day_hours(&self) -> Result<DayHours, ParserError> {
        if self.closed {
            return Ok(DayHours::Closed);
        }

        TimeSlot::parse(&self.open, &self.close).map(DayHours::Open)
    }
}

impl From<DayHours> for DayHoursDocument {
    fn from(hours: DayHours) -> Self {
        match hours {
            DayHours::Closed => Self { closed: true, ..Default::default() },
            DayHours::Open(slot) => Self {
                open: slot.open().to_string(),
                close: slot.close().to_string(),
                closed: false,
            },
        }
    }
}

/// Weekly hours keyed by full English day names, from `"Sunday"` to
/// `"Saturday"`.
pub type WeeklyScheduleDocument = BTreeMap<String, DayHoursDocument>;

/// Read a weekly schedule, closing days that are missing or malformed.
///
/// ```
/// use delivery_hours::document::{load_weekly_schedule, WeeklyScheduleDocument};
/// use delivery_hours::syntax::Weekday;
///
/// let doc: WeeklyScheduleDocument = serde_json::from_str(r#"{
///     "Monday": { "open": "09:00", "close": "17:00", "closed": false },
///     "Tuesday": { "open": "nine", "close": "17:00", "closed": false }
/// }"#).unwrap();
///
/// let (schedule, errors) = load_weekly_schedule(&doc);
/// assert!(!schedule[Weekday::Mon].is_closed());
/// assert!(schedule[Weekday::Tue].is_closed());
/// assert_eq!(errors.len(), 1);
/// ```
pub fn load_weekly_schedule(doc: &WeeklyScheduleDocument) -> (WeeklySchedule, Vec<Error>) {
    let mut schedule = WeeklySchedule::closed();
    let mut errors = Vec::new();

    for (name, day_doc) in doc {
        let Some(day) = parse_day_name(name) else {
            errors.push(Error::UnknownDayName(name.clone()));
            continue;
        };

        match day_doc.to_day_hours() {
            Ok(hours) => schedule.set(day, hours),
            Err(source) => errors.push(Error::MalformedDay { day, source }),
        }
    }

    (schedule, errors)
}

/// Serialize a weekly schedule with an entry for each day.
pub fn weekly_schedule_document(schedule: &WeeklySchedule) -> WeeklyScheduleDocument {
    schedule
        .iter()
        .map(|(day, hours)| (day_name(day).to_string(), hours.into()))
        .collect()
}

fn day_name(day: Weekday) -> &'static str {
    Language::En.weekday_name(day, false)
}

/// Case-sensitive lookup of a full English day name.
fn parse_day_name(name: &str) -> Option<Weekday> {
    WEEK.into_iter().find(|day| day_name(*day) == name)
}

// Stores

/// Hours of a store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreHoursDocument {
    #[serde(default)]
    pub store_id: String,
    pub delivery_hours: Option<WeeklyScheduleDocument>,
    pub business_hours: Option<WeeklyScheduleDocument>,
}

impl StoreHoursDocument {
    /// Load the delivery hours of the store, falling back to its business
    /// hours when no specific delivery hours are configured.
    pub fn load(&self) -> WeeklySchedule {
        let Some(doc) = self.delivery_hours.as_ref().or(self.business_hours.as_ref()) else {
            #[cfg(feature = "log")]
            log::warn!(store_id = self.store_id.as_str(); "Store has no configured hours");

            return WeeklySchedule::closed();
        };

        let (schedule, _errors) = load_weekly_schedule(doc);

        #[cfg(feature = "log")]
        for err in _errors {
            log::warn!(store_id = self.store_id.as_str(); "Invalid store hours: {err}");
        }

        schedule
    }
}

// Drivers

/// Availability status of a driver, only active drivers can deliver.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverStatus {
    Active,
    #[default]
    #[serde(other)]
    Inactive,
}

/// A driver and its weekly availability.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDocument {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: DriverStatus,
    #[serde(default)]
    pub availability: WeeklyScheduleDocument,
}

impl DriverDocument {
    pub fn is_active(&self) -> bool {
        self.status == DriverStatus::Active
    }

    /// Load the availability of this driver.
    pub fn load(&self) -> WeeklySchedule {
        let (schedule, _errors) = load_weekly_schedule(&self.availability);

        #[cfg(feature = "log")]
        for err in _errors {
            log::warn!(driver_id = self.id.as_str(); "Invalid driver availability: {err}");
        }

        schedule
    }
}

/// Load availability of active drivers, ignoring others.
pub fn active_driver_schedules<'d>(
    drivers: impl IntoIterator<Item = &'d DriverDocument>,
) -> Vec<WeeklySchedule> {
    drivers
        .into_iter()
        .filter(|driver| driver.is_active())
        .map(DriverDocument::load)
        .collect()
}
