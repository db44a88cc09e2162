#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod time_of_day;
pub mod time_slot;
pub mod weekly;

mod display;
mod parser;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use parser::parse;
pub use time_of_day::{parse_time, TimeOfDay};
pub use time_slot::{slots_union, TimeSlot};
pub use weekly::{DayHours, Weekday, WeeklySchedule, WEEK};
