use std::fmt::Display;

use delivery_hours_syntax::Weekday;

pub use delivery_hours_syntax::Error as ParserError;

/// A schedule record that could not be loaded as is.
#[derive(Clone, Debug)]
pub enum Error {
    /// Hours of a day are malformed, the day is considered closed.
    MalformedDay { day: Weekday, source: ParserError },
    /// A key of the record is not the full English name of a day.
    UnknownDayName(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedDay { day, source } => {
                write!(f, "malformed hours for {day}: {source}")
            }
            Self::UnknownDayName(name) => write!(f, "unknown day name `{name}`"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedDay { source, .. } => Some(source),
            Self::UnknownDayName(_) => None,
        }
    }
}
