use std::fmt;

use crate::parser::Rule;
use crate::time_of_day::TimeOfDay;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug)]
pub enum Error {
    Parser(pest::error::Error<Rule>),
    InvalidTimeFormat(String),
    EmptySlot { open: TimeOfDay, close: TimeOfDay },
}

impl From<pest::error::Error<Rule>> for Error {
    fn from(pest_err: pest::error::Error<Rule>) -> Self {
        Self::Parser(pest_err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parser(pest_err) => write!(f, "{}", pest_err),
            Self::InvalidTimeFormat(value) => {
                write!(f, "invalid time `{}`: expected HH:MM", value)
            }
            Self::EmptySlot { open, close } => {
                write!(f, "empty slot {}-{}: opening must be before closing", open, close)
            }
        }
    }
}

impl std::error::Error for Error {}
