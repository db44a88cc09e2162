use std::fmt::{Debug, Display};
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

use crate::error::{Error, Result};

/// An hour+minute struct that covers a single day, from *00:00* to *24:00*.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// First minute of a day.
    pub const MIDNIGHT_00: Self = Self { hour: 0, minute: 0 };

    /// End of a day, only meaningful as a closing time.
    pub const MIDNIGHT_24: Self = Self { hour: 24, minute: 0 };

    /// Create a new time of day, this may return `None` if input values are
    /// out of range.
    ///
    /// ```
    /// use delivery_hours_syntax::TimeOfDay;
    ///
    /// assert!(TimeOfDay::new(23, 59).is_some());
    /// assert!(TimeOfDay::new(24, 0).is_some());
    /// assert!(TimeOfDay::new(24, 1).is_none()); // past the end of the day
    /// assert!(TimeOfDay::new(12, 60).is_none()); // minutes are out of bound
    /// ```
    #[inline]
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 24 || minute > 59 || (hour == 24 && minute > 0) {
            None
        } else {
            Some(Self { hour, minute })
        }
    }

    /// Get the number of full hours in this time.
    #[inline]
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Get the number of remaining minutes in this time.
    #[inline]
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Get the total number of minutes from *00:00*.
    ///
    /// ```
    /// use delivery_hours_syntax::TimeOfDay;
    ///
    /// let time = TimeOfDay::new(13, 15).unwrap();
    /// assert_eq!(time.mins_from_midnight(), 13 * 60 + 15);
    /// ```
    #[inline]
    pub fn mins_from_midnight(self) -> u16 {
        u16::from(self.minute) + 60 * u16::from(self.hour)
    }

    /// Format this time on a 12-hour clock.
    ///
    /// ```
    /// use delivery_hours_syntax::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::new(9, 5).unwrap().format_12h(), "9:05 AM");
    /// assert_eq!(TimeOfDay::new(12, 0).unwrap().format_12h(), "12:00 PM");
    /// assert_eq!(TimeOfDay::new(17, 30).unwrap().format_12h(), "5:30 PM");
    /// assert_eq!(TimeOfDay::MIDNIGHT_24.format_12h(), "12:00 AM");
    /// ```
    pub fn format_12h(self) -> String {
        let hour = self.hour % 24;
        let meridiem = if hour < 12 { "AM" } else { "PM" };

        let hour = match hour % 12 {
            0 => 12,
            h => h,
        };

        format!("{}:{:02} {}", hour, self.minute, meridiem)
    }
}

/// Parse a `HH:MM` string into a number of minutes since midnight.
///
/// ```
/// use delivery_hours_syntax::parse_time;
///
/// assert_eq!(parse_time("09:30").unwrap(), 570);
/// assert_eq!(parse_time("24:00").unwrap(), 1440);
/// assert!(parse_time("9h30").is_err());
/// assert!(parse_time("25:00").is_err());
/// ```
pub fn parse_time(raw: &str) -> Result<u16> {
    Ok(raw.parse::<TimeOfDay>()?.mins_from_midnight())
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidTimeFormat(s.to_string());
        let (hh, mm) = s.split_once(':').ok_or_else(invalid)?;

        let well_formed = (1..=2).contains(&hh.len())
            && mm.len() == 2
            && hh.bytes().chain(mm.bytes()).all(|c| c.is_ascii_digit());

        if !well_formed {
            return Err(invalid());
        }

        let hour = hh.parse().map_err(|_| invalid())?;
        let minute = mm.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).ok_or_else(invalid)
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Debug for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        write!(f, "{self}")
    }
}

impl TryFrom<TimeOfDay> for NaiveTime {
    type Error = ();

    #[inline]
    fn try_from(time: TimeOfDay) -> std::result::Result<Self, Self::Error> {
        NaiveTime::from_hms_opt(time.hour.into(), time.minute.into(), 0).ok_or(())
    }
}

impl From<NaiveTime> for TimeOfDay {
    #[inline]
    fn from(time: NaiveTime) -> TimeOfDay {
        // Chrono keeps hours below 24 and minutes below 60.
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}
