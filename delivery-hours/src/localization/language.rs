use std::fmt::Display;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use delivery_hours_syntax::{TimeOfDay, TimeSlot, Weekday};

/// Display language of labels built from a schedule.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    /// Name of a day of the week, capitalized.
    ///
    /// ```
    /// use delivery_hours::localization::Language;
    /// use delivery_hours::syntax::Weekday;
    ///
    /// assert_eq!(Language::En.weekday_name(Weekday::Wed, false), "Wednesday");
    /// assert_eq!(Language::En.weekday_name(Weekday::Wed, true), "Wed");
    /// assert_eq!(Language::Es.weekday_name(Weekday::Wed, false), "Miércoles");
    /// assert_eq!(Language::Es.weekday_name(Weekday::Wed, true), "Mié");
    /// ```
    pub fn weekday_name(self, day: Weekday, abbreviated: bool) -> &'static str {
        let (full, short) = match (self, day) {
            (Self::En, Weekday::Sun) => ("Sunday", "Sun"),
            (Self::En, Weekday::Mon) => ("Monday", "Mon"),
            (Self::En, Weekday::Tue) => ("Tuesday", "Tue"),
            (Self::En, Weekday::Wed) => ("Wednesday", "Wed"),
            (Self::En, Weekday::Thu) => ("Thursday", "Thu"),
            (Self::En, Weekday::Fri) => ("Friday", "Fri"),
            (Self::En, Weekday::Sat) => ("Saturday", "Sat"),
            (Self::Es, Weekday::Sun) => ("Domingo", "Dom"),
            (Self::Es, Weekday::Mon) => ("Lunes", "Lun"),
            (Self::Es, Weekday::Tue) => ("Martes", "Mar"),
            (Self::Es, Weekday::Wed) => ("Miércoles", "Mié"),
            (Self::Es, Weekday::Thu) => ("Jueves", "Jue"),
            (Self::Es, Weekday::Fri) => ("Viernes", "Vie"),
            (Self::Es, Weekday::Sat) => ("Sábado", "Sáb"),
        };

        if abbreviated {
            short
        } else {
            full
        }
    }

    /// Full name of a month, `month` ranging from 1 to 12.
    fn month_name(self, month: u32) -> &'static str {
        const EN: [&str; 12] = [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ];

        const ES: [&str; 12] = [
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
            "septiembre", "octubre", "noviembre", "diciembre",
        ];

        let names = match self {
            Self::En => &EN,
            Self::Es => &ES,
        };

        names[(month.clamp(1, 12) - 1) as usize]
    }

    pub fn today(self) -> &'static str {
        match self {
            Self::En => "Today",
            Self::Es => "Hoy",
        }
    }

    pub fn tomorrow(self) -> &'static str {
        match self {
            Self::En => "Tomorrow",
            Self::Es => "Mañana",
        }
    }

    /// Placeholder for a day without any slot.
    pub fn closed(self) -> &'static str {
        match self {
            Self::En => "Closed",
            Self::Es => "Cerrado",
        }
    }

    /// Long form of a date, without its year.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use delivery_hours::localization::Language;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 10, 22).unwrap();
    /// assert_eq!(Language::En.format_date(date), "Wednesday, October 22");
    /// assert_eq!(Language::Es.format_date(date), "miércoles, 22 de octubre");
    /// ```
    pub fn format_date(self, date: NaiveDate) -> String {
        let weekday = self.weekday_name(date.weekday(), false);
        let month = self.month_name(date.month());

        match self {
            Self::En => format!("{weekday}, {month} {}", date.day()),
            Self::Es => format!("{}, {} de {month}", weekday.to_lowercase(), date.day()),
        }
    }

    /// Closing time of a slot that lasts until the end of the day.
    pub fn midnight(self) -> &'static str {
        match self {
            Self::En => "Midnight",
            Self::Es => "Medianoche",
        }
    }

    /// Label of a slot covering the whole day.
    pub fn all_day(self) -> &'static str {
        match self {
            Self::En => "Open 24 hours",
            Self::Es => "Abierto 24 horas",
        }
    }

    /// Format a slot on a 12-hour clock, eg. `9:00 AM - 5:00 PM`.
    ///
    /// ```
    /// use delivery_hours::localization::Language;
    /// use delivery_hours::syntax::TimeSlot;
    ///
    /// let evening = TimeSlot::parse("20:00", "24:00").unwrap();
    /// assert_eq!(Language::En.format_slot(evening), "8:00 PM - Midnight");
    ///
    /// let whole_day = TimeSlot::parse("00:00", "24:00").unwrap();
    /// assert_eq!(Language::Es.format_slot(whole_day), "Abierto 24 horas");
    /// ```
    pub fn format_slot(self, slot: TimeSlot) -> String {
        let (open, close) = (slot.open(), slot.close());

        if close != TimeOfDay::MIDNIGHT_24 {
            return format!("{} - {}", open.format_12h(), close.format_12h());
        }

        if open == TimeOfDay::MIDNIGHT_00 {
            return self.all_day().to_string();
        }

        format!("{} - {}", open.format_12h(), self.midnight())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Parse a language tag, region subtags such as in `es-MX` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s.split(['-', '_']).next().unwrap_or_default();

        match primary.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Es => write!(f, "es"),
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnknownLanguage(pub String);

impl Display for UnknownLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown language tag `{}`", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}
