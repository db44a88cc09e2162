use std::fmt::Display;

use crate::weekly::{wday_str, WeeklySchedule};

impl Display for WeeklySchedule {
    /// Write the compact notation of the schedule, grouping consecutive days
    /// that share the same hours.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let days: Vec<_> = self.iter().collect();
        let mut is_first = true;
        let mut start = 0;

        while start < days.len() {
            let (first_day, hours) = days[start];
            let mut end = start;

            while end + 1 < days.len() && days[end + 1].1 == hours {
                end += 1;
            }

            if !is_first {
                write!(f, "; ")?;
            }

            write!(f, "{}", wday_str(first_day))?;

            if end > start {
                write!(f, "-{}", wday_str(days[end].0))?;
            }

            write!(f, " {hours}")?;
            is_first = false;
            start = end + 1;
        }

        Ok(())
    }
}
