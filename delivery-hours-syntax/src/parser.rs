use pest::iterators::Pair;
use pest::Parser;

use crate::error::{Error, Result};
use crate::time_of_day::TimeOfDay;
use crate::time_slot::TimeSlot;
use crate::weekly::{DayHours, Weekday, WeeklySchedule};

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct WeeklyScheduleParser;

pub fn parse(data: &str) -> Result<WeeklySchedule> {
    let schedule_pair = WeeklyScheduleParser::parse(Rule::input_schedule, data)
        .map_err(Error::from)?
        .next()
        .expect("grammar error: no schedule found");

    build_schedule(schedule_pair)
}

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

// ---
// --- Schedule
// ---

fn build_schedule(pair: Pair<Rule>) -> Result<WeeklySchedule> {
    assert_eq!(pair.as_rule(), Rule::schedule);
    let mut schedule = WeeklySchedule::closed();
    let mut configured = [false; 7];

    for pair in pair.into_inner() {
        match pair.as_rule() {
            Rule::rule => {
                let (days, hours) = build_rule(pair)?;

                for day in days {
                    let idx = day.num_days_from_sunday() as usize;

                    #[cfg(feature = "log")]
                    if configured[idx] && schedule.get(day) != hours {
                        log::debug!("Hours of {day} are overridden by a later rule");
                    }

                    configured[idx] = true;
                    schedule.set(day, hours);
                }
            }
            other => unexpected_token(other, Rule::schedule),
        }
    }

    Ok(schedule)
}

fn build_rule(pair: Pair<Rule>) -> Result<(Vec<Weekday>, DayHours)> {
    assert_eq!(pair.as_rule(), Rule::rule);
    let mut pairs = pair.into_inner();
    let days = build_weekday_selector(pairs.next().expect("grammar error: empty rule"));
    let hours = build_rule_body(pairs.next().expect("grammar error: rule without hours"))?;
    Ok((days, hours))
}

fn build_rule_body(pair: Pair<Rule>) -> Result<DayHours> {
    assert_eq!(pair.as_rule(), Rule::rule_body);
    let pair = pair.into_inner().next().expect("grammar error: empty hours");

    match pair.as_rule() {
        Rule::closed_keyword => Ok(DayHours::Closed),
        Rule::time_span => Ok(DayHours::Open(build_time_span(pair)?)),
        other => unexpected_token(other, Rule::rule_body),
    }
}

// ---
// --- Weekdays
// ---

fn build_weekday_selector(pair: Pair<Rule>) -> Vec<Weekday> {
    assert_eq!(pair.as_rule(), Rule::weekday_selector);
    pair.into_inner().flat_map(build_weekday_range).collect()
}

fn build_weekday_range(pair: Pair<Rule>) -> Vec<Weekday> {
    assert_eq!(pair.as_rule(), Rule::weekday_range);
    let mut pairs = pair.into_inner();
    let start = build_wday(pairs.next().expect("grammar error: empty weekday range"));
    let end = pairs.next().map(build_wday).unwrap_or(start);

    // Ranges such as `Fr-Mo` wrap over the end of the week.
    let mut days = vec![start];
    let mut curr = start;

    while curr != end {
        curr = curr.succ();
        days.push(curr);
    }

    days
}

fn build_wday(pair: Pair<Rule>) -> Weekday {
    assert_eq!(pair.as_rule(), Rule::wday);
    let pair = pair.into_inner().next().expect("grammar error: empty weekday");

    match pair.as_rule() {
        Rule::sunday => Weekday::Sun,
        Rule::monday => Weekday::Mon,
        Rule::tuesday => Weekday::Tue,
        Rule::wednesday => Weekday::Wed,
        Rule::thursday => Weekday::Thu,
        Rule::friday => Weekday::Fri,
        Rule::saturday => Weekday::Sat,
        other => unexpected_token(other, Rule::wday),
    }
}

// ---
// --- Time
// ---

fn build_time_span(pair: Pair<Rule>) -> Result<TimeSlot> {
    assert_eq!(pair.as_rule(), Rule::time_span);
    let mut pairs = pair.into_inner();
    let open = build_time(pairs.next().expect("grammar error: missing opening time"))?;
    let close = build_time(pairs.next().expect("grammar error: missing closing time"))?;
    TimeSlot::try_new(open, close)
}

fn build_time(pair: Pair<Rule>) -> Result<TimeOfDay> {
    assert_eq!(pair.as_rule(), Rule::time);
    pair.as_str().parse()
}
