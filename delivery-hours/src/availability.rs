//! Read-only queries over an effective schedule, as displayed by the cart
//! banner, the checkout and store pages.

use chrono::{Datelike, NaiveDateTime};

use delivery_hours_syntax::{Weekday, WEEK};

use crate::effective::EffectiveSchedule;
use crate::localization::Language;

/// The first day of the week with delivery slots, starting from today.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct NextAvailableDay {
    pub day: Weekday,
    /// Number of days from today, from 0 to 6
    pub days_ahead: u8,
    pub is_today: bool,
    pub is_tomorrow: bool,
}

/// Check if a delivery slot is running at given time.
///
/// ```
/// use chrono::NaiveDateTime;
/// use delivery_hours::EffectiveSchedule;
/// use delivery_hours::availability::is_delivery_available_at;
/// use delivery_hours::syntax::WeeklySchedule;
///
/// let effective = EffectiveSchedule::from("Mo 09:00-17:00".parse::<WeeklySchedule>().unwrap());
/// let monday = |time: &str| NaiveDateTime::parse_from_str(&format!("2025-10-20 {time}"), "%Y-%m-%d %H:%M").unwrap();
///
/// assert!(is_delivery_available_at(&effective, monday("09:00")));
/// assert!(!is_delivery_available_at(&effective, monday("17:00")));
/// ```
pub fn is_delivery_available_at(schedule: &EffectiveSchedule, now: NaiveDateTime) -> bool {
    schedule[now.weekday()].contains(now.time().into())
}

/// Hours of a day formatted for display, eg. `9:00 AM - 5:00 PM`, or a
/// placeholder if the day is closed.
pub fn effective_hours_label(
    schedule: &EffectiveSchedule,
    day: Weekday,
    language: Language,
) -> String {
    let day_schedule = &schedule[day];

    if day_schedule.is_empty() {
        return language.closed().to_string();
    }

    day_schedule
        .iter()
        .map(|slot| language.format_slot(*slot))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Same as [`effective_hours_label`] for the day of `now`.
pub fn today_effective_hours(
    schedule: &EffectiveSchedule,
    now: NaiveDateTime,
    language: Language,
) -> String {
    effective_hours_label(schedule, now.weekday(), language)
}

/// Names of the days with delivery slots, in week order starting on Sunday.
///
/// ```
/// use delivery_hours::EffectiveSchedule;
/// use delivery_hours::availability::available_days_summary;
/// use delivery_hours::localization::Language;
/// use delivery_hours::syntax::WeeklySchedule;
///
/// let hours: WeeklySchedule = "Fr-Mo 18:00-23:00".parse().unwrap();
/// let effective = EffectiveSchedule::from(hours);
///
/// assert_eq!(
///     available_days_summary(&effective, true, Language::En),
///     ["Sun", "Mon", "Fri", "Sat"],
/// );
/// ```
pub fn available_days_summary(
    schedule: &EffectiveSchedule,
    abbreviated: bool,
    language: Language,
) -> Vec<&'static str> {
    schedule
        .open_days()
        .map(|day| language.weekday_name(day, abbreviated))
        .collect()
}

/// Find the first day with delivery slots, starting from `today` and
/// wrapping over the end of the week. Returns `None` if all days are closed.
///
/// ```
/// use delivery_hours::EffectiveSchedule;
/// use delivery_hours::availability::next_available_day;
/// use delivery_hours::syntax::{Weekday, WeeklySchedule};
///
/// let hours: WeeklySchedule = "Sa 10:00-14:00".parse().unwrap();
/// let effective = EffectiveSchedule::from(hours);
///
/// let next = next_available_day(&effective, Weekday::Sun).unwrap();
/// assert_eq!(next.day, Weekday::Sat);
/// assert_eq!(next.days_ahead, 6);
///
/// assert!(next_available_day(&EffectiveSchedule::default(), Weekday::Sun).is_none());
/// ```
pub fn next_available_day(schedule: &EffectiveSchedule, today: Weekday) -> Option<NextAvailableDay> {
    let start = today.num_days_from_sunday() as usize;

    (0..WEEK.len())
        .map(|days_ahead| (days_ahead, WEEK[(start + days_ahead) % WEEK.len()]))
        .find(|(_, day)| !schedule[*day].is_empty())
        .map(|(days_ahead, day)| NextAvailableDay {
            day,
            days_ahead: days_ahead as u8,
            is_today: days_ahead == 0,
            is_tomorrow: days_ahead == 1,
        })
}
