use chrono::{Datelike, TimeDelta};

use delivery_hours_syntax::{Error, Weekday, WeeklySchedule};

use crate::{date, datetime, schedule};
use crate::{DateProjector, EffectiveSchedule, LeadTimeBoundary};

fn effective(expr: &str) -> Result<EffectiveSchedule, Error> {
    Ok(WeeklySchedule::parse(expr)?.into())
}

#[test]
fn lead_time_on_slot_open() -> Result<(), Error> {
    let schedule = effective("Mo-Su 09:00-17:00")?;
    let projector = DateProjector::new(14, 24);
    let dates: Vec<_> = projector.project(&schedule, datetime!("2025-10-20 10:00")).collect();

    // Tuesday opens at 09:00, less than 24 hours after now.
    assert_eq!(dates[0].date, date!("2025-10-22"));
    assert!(!dates[0].is_today);
    assert!(!dates[0].is_tomorrow);
    assert_eq!(dates.len(), 12);
    Ok(())
}

#[test]
fn lead_time_on_slot_close() -> Result<(), Error> {
    let schedule = effective("Mo-Su 09:00-17:00")?;
    let projector = DateProjector::new(14, 24).with_boundary(LeadTimeBoundary::SlotClose);
    let dates: Vec<_> = projector.project(&schedule, datetime!("2025-10-20 10:00")).collect();

    assert_eq!(dates[0].date, date!("2025-10-21"));
    assert!(dates[0].is_tomorrow);
    assert_eq!(dates[0].slots, schedule! { 9,00 => 17,00 });
    assert_eq!(dates.len(), 13);
    Ok(())
}

#[test]
fn no_lead_time() -> Result<(), Error> {
    let schedule = effective("Mo-Fr 09:00-17:00")?;
    let now = datetime!("2025-10-20 10:00");

    let running = DateProjector::new(7, 0)
        .with_boundary(LeadTimeBoundary::SlotClose)
        .project(&schedule, now)
        .next()
        .unwrap();

    assert_eq!(running.date, date!("2025-10-20"));
    assert!(running.is_today);

    let upcoming = DateProjector::new(7, 0).project(&schedule, now).next().unwrap();
    assert_eq!(upcoming.date, date!("2025-10-21"));
    assert!(upcoming.is_tomorrow);

    let exact = DateProjector::new(7, 0)
        .project(&schedule, datetime!("2025-10-20 09:00"))
        .next()
        .unwrap();

    assert!(exact.is_today);
    Ok(())
}

#[test]
fn finer_lead_time() -> Result<(), Error> {
    let schedule = effective("Mo 12:00-14:00")?;
    let projector = DateProjector::new(7, 0).with_min_lead(TimeDelta::minutes(30));

    let first = projector.project(&schedule, datetime!("2025-10-20 11:30")).next();
    assert_eq!(first.map(|d| d.date), Some(date!("2025-10-20")));

    let first = projector.project(&schedule, datetime!("2025-10-20 11:31")).next();
    assert_eq!(first.map(|d| d.date), None);
    Ok(())
}

#[test]
fn only_keeps_remaining_slots() -> Result<(), Error> {
    let store = WeeklySchedule::parse("Mo 07:00-22:00")?;
    let drivers = [
        WeeklySchedule::parse("Mo 08:00-10:00")?,
        WeeklySchedule::parse("Mo 18:00-20:00")?,
    ];

    let schedule = EffectiveSchedule::compute(&store, &drivers);
    let projector = DateProjector::new(7, 0);

    let today = projector.project(&schedule, datetime!("2025-10-20 12:00")).next().unwrap();
    assert!(today.is_today);
    assert_eq!(today.slots, schedule! { 18,00 => 20,00 });

    let early = projector.project(&schedule, datetime!("2025-10-20 07:00")).next().unwrap();
    assert_eq!(early.slots, schedule! { 8,00 => 10,00; 18,00 => 20,00 });
    Ok(())
}

#[test]
fn closes_at_midnight() -> Result<(), Error> {
    let schedule = effective("Mo 20:00-24:00")?;
    let now = datetime!("2025-10-20 23:00");
    let close = DateProjector::new(14, 0).with_boundary(LeadTimeBoundary::SlotClose);

    let dates: Vec<_> = close.with_min_lead(TimeDelta::hours(1)).project(&schedule, now).collect();
    assert_eq!(dates[0].date, date!("2025-10-20"));

    let dates: Vec<_> = close.with_min_lead(TimeDelta::hours(2)).project(&schedule, now).collect();
    assert_eq!(dates[0].date, date!("2025-10-27"));
    assert_eq!(dates.len(), 1);
    Ok(())
}

#[test]
fn dates_are_ascending() -> Result<(), Error> {
    let schedule = effective("Sa 10:00-12:00; We 10:00-12:00; Mo 08:00-09:00; Su 23:00-24:00")?;
    let projector = DateProjector::new(60, 5).with_boundary(LeadTimeBoundary::SlotClose);
    let dates: Vec<_> = projector.project(&schedule, datetime!("2025-12-28 22:00")).collect();

    assert!(!dates.is_empty());
    assert!(dates.windows(2).all(|pair| pair[0].date < pair[1].date));

    assert!(dates.iter().all(|d| {
        matches!(d.weekday(), Weekday::Sat | Weekday::Wed | Weekday::Mon | Weekday::Sun)
    }));

    // Crosses the end of the year
    assert!(dates.iter().any(|d| d.date.year() == 2026));
    Ok(())
}

#[test]
fn same_snapshot_same_dates() -> Result<(), Error> {
    let schedule = effective("Mo-Fr 09:00-17:00; Sa 10:00-13:00")?;
    let projector = DateProjector::new(21, 24);
    let now = datetime!("2025-10-23 16:45");

    let first: Vec<_> = projector.project(&schedule, now).collect();
    let second: Vec<_> = projector.project(&schedule, now).collect();
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn always_closed() {
    let schedule = EffectiveSchedule::default();
    let mut dates = DateProjector::new(365, 0).project(&schedule, datetime!("2025-10-20 10:00"));
    assert!(dates.next().is_none());
    assert!(dates.next().is_none());
}

#[test]
fn lookahead_horizon() -> Result<(), Error> {
    let schedule = effective("Mo-Su 00:00-24:00")?;
    let now = datetime!("2025-10-20 00:00");

    assert_eq!(DateProjector::new(0, 0).project(&schedule, now).count(), 0);
    assert_eq!(DateProjector::new(1, 0).project(&schedule, now).count(), 1);

    let week: Vec<_> = DateProjector::new(7, 0).project(&schedule, now).collect();
    assert_eq!(week.len(), 7);
    assert_eq!(week.last().unwrap().date, date!("2025-10-26"));

    let default: Vec<_> = DateProjector::default().project(&schedule, now).collect();
    assert_eq!(default.len(), DateProjector::DEFAULT_LOOKAHEAD_DAYS as usize);
    Ok(())
}

#[test]
fn size_hint_is_bounded() -> Result<(), Error> {
    let schedule = effective("Mo-Su 00:00-24:00")?;
    let mut dates = DateProjector::new(3, 0).project(&schedule, datetime!("2025-10-20 00:00"));

    assert_eq!(dates.size_hint(), (0, Some(3)));
    dates.next();
    assert_eq!(dates.size_hint(), (0, Some(2)));
    assert_eq!(dates.by_ref().count(), 2);
    assert!(dates.next().is_none());
    Ok(())
}

#[test]
fn end_of_supported_dates() -> Result<(), Error> {
    let schedule = effective("Mo-Su 00:00-24:00")?;
    let last = chrono::NaiveDate::MAX.and_hms_opt(12, 0, 0).unwrap();
    let dates: Vec<_> = DateProjector::new(14, 0).project(&schedule, last).collect();
    assert!(dates.len() <= 1);
    Ok(())
}

#[test]
fn iso_date() -> Result<(), Error> {
    let schedule = effective("Fr 09:00-17:00")?;
    let first = DateProjector::default()
        .project(&schedule, datetime!("2025-10-20 10:00"))
        .next()
        .unwrap();

    assert_eq!(first.iso_date(), "2025-10-24");
    assert_eq!(first.weekday(), Weekday::Fri);
    Ok(())
}
