mod delivery;
mod effective;
mod projector;

use delivery_hours_syntax::WeeklySchedule;

/// Parse a list of weekly schedules.
fn weekly<'a>(
    exprs: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<WeeklySchedule>, delivery_hours_syntax::Error> {
    exprs.into_iter().map(WeeklySchedule::parse).collect()
}

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

#[macro_export]
macro_rules! datetime {
    ( $date: expr ) => {{
        use chrono::NaiveDateTime;
        NaiveDateTime::parse_from_str($date, "%Y-%m-%d %H:%M").expect("invalid datetime literal")
    }};
    ( $date: expr, $tz: expr ) => {{
        use chrono::TimeZone;

        $tz.from_local_datetime(&datetime!($date))
            .single()
            .expect("ambiguous input datetime")
    }};
}
