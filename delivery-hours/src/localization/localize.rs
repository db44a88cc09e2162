use std::fmt::Debug;

use chrono::{NaiveDateTime, TimeDelta, TimeZone, Timelike};

/// Longest span of wall-clock time a DST transition may skip.
const MAX_GAP: TimeDelta = TimeDelta::days(1);

/// Specifies how dates given by the caller relate to the local wall-clock
/// time of a store.
pub trait Localize: Clone + Send + Sync {
    /// The type for localized date & time
    type DateTime: Clone + Debug;

    /// Convert a localized time to the naive wall-clock time of the store.
    fn naive(&self, dt: Self::DateTime) -> NaiveDateTime;

    /// Convert the wall-clock time of the store back to a localized time.
    fn datetime(&self, naive: NaiveDateTime) -> Self::DateTime;

    /// Instant of a localized time, used to measure actual durations.
    fn naive_utc(&self, dt: &Self::DateTime) -> NaiveDateTime;
}

/// No time zone information: dates are already expressed as the wall-clock
/// time of the store.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct NoLocation;

impl Localize for NoLocation {
    type DateTime = NaiveDateTime;

    fn naive(&self, dt: Self::DateTime) -> NaiveDateTime {
        dt
    }

    fn datetime(&self, naive: NaiveDateTime) -> Self::DateTime {
        naive
    }

    fn naive_utc(&self, dt: &Self::DateTime) -> NaiveDateTime {
        *dt
    }
}

/// The store is in a known time zone.
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use delivery_hours::localization::{Localize, TzLocation};
///
/// let madrid = TzLocation::new(chrono_tz::Europe::Madrid);
/// let utc_midnight = Utc.with_ymd_and_hms(2025, 6, 2, 23, 30, 0).unwrap();
///
/// assert_eq!(
///     madrid.naive(utc_midnight.with_timezone(&chrono_tz::Europe::Madrid)),
///     NaiveDate::from_ymd_opt(2025, 6, 3).unwrap().and_hms_opt(1, 30, 0).unwrap(),
/// );
/// ```
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct TzLocation<Tz>
where
    Tz: TimeZone + Send + Sync,
{
    tz: Tz,
}

impl<Tz> TzLocation<Tz>
where
    Tz: TimeZone + Send + Sync,
{
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl<Tz> Localize for TzLocation<Tz>
where
    Tz: TimeZone + Send + Sync,
{
    type DateTime = chrono::DateTime<Tz>;

    fn naive(&self, dt: Self::DateTime) -> NaiveDateTime {
        dt.with_timezone(&self.tz).naive_local()
    }

    /// Wall-clock times skipped by a DST transition resolve to the instant
    /// of the transition, ambiguous ones to the earliest instant.
    fn datetime(&self, naive: NaiveDateTime) -> Self::DateTime {
        if let Some(dt) = self.tz.from_local_datetime(&naive).earliest() {
            return dt;
        }

        // Transitions happen on a round minute
        let start = naive
            .with_second(0)
            .and_then(|dt| dt.with_nanosecond(0))
            .unwrap_or(naive);

        (1..=MAX_GAP.num_minutes())
            .map_while(|mins| start.checked_add_signed(TimeDelta::minutes(mins)))
            .find_map(|local| self.tz.from_local_datetime(&local).earliest())
            .unwrap_or_else(|| self.tz.from_utc_datetime(&naive))
    }

    fn naive_utc(&self, dt: &Self::DateTime) -> NaiveDateTime {
        dt.naive_utc()
    }
}
