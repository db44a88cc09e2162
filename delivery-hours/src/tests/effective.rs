use delivery_hours_syntax::{Error, TimeSlot, Weekday, WeeklySchedule, WEEK};

use crate::effective::EffectiveSchedule;
use crate::schedule;

use super::weekly;

#[test]
fn no_driver_closes_every_day() -> Result<(), Error> {
    let store = WeeklySchedule::parse("Mo 09:00-17:00")?;
    let effective = EffectiveSchedule::compute(&store, []);

    for day in WEEK {
        assert!(effective[day].is_empty(), "{day} should be closed");
    }

    let always_open = WeeklySchedule::every_day(TimeSlot::parse("00:00", "24:00")?);
    assert!(EffectiveSchedule::compute(&always_open, []).is_always_closed());
    Ok(())
}

#[test]
fn overlapping_drivers_are_merged() -> Result<(), Error> {
    let store = WeeklySchedule::parse("Tu 00:00-24:00")?;
    let drivers = weekly(["Tu 10:00-14:00", "Tu 13:00-18:00"])?;
    let effective = EffectiveSchedule::compute(&store, &drivers);

    assert_eq!(effective[Weekday::Tue], schedule! { 10,00 => 18,00 });
    assert_eq!(effective[Weekday::Tue].slots().len(), 1);
    Ok(())
}

#[test]
fn store_hours_bound_drivers() -> Result<(), Error> {
    let store = WeeklySchedule::parse("Tu 09:00-20:00")?;
    let drivers = weekly(["Tu 10:00-14:00", "Tu 13:00-18:00"])?;
    let effective = EffectiveSchedule::compute(&store, &drivers);
    assert_eq!(effective[Weekday::Tue], schedule! { 10,00 => 18,00 });

    let drivers = weekly(["Tu 07:00-12:00", "Tu 19:00-23:00"])?;
    let effective = EffectiveSchedule::compute(&store, &drivers);

    assert_eq!(
        effective[Weekday::Tue],
        schedule! { 9,00 => 12,00; 19,00 => 20,00 },
    );

    Ok(())
}

#[test]
fn disjoint_drivers_keep_both_windows() -> Result<(), Error> {
    let store = WeeklySchedule::parse("We 07:00-22:00")?;
    let drivers = weekly(["We 08:00-10:00", "We 18:00-20:00"])?;
    let effective = EffectiveSchedule::compute(&store, &drivers);

    assert_eq!(
        effective[Weekday::Wed],
        schedule! { 8,00 => 10,00; 18,00 => 20,00 },
    );

    // Back to a single slot per day, only the earliest window remains.
    assert_eq!(
        effective.to_weekly_schedule(),
        WeeklySchedule::parse("We 08:00-10:00")?,
    );

    Ok(())
}

#[test]
fn adjacent_drivers_are_merged() -> Result<(), Error> {
    let store = WeeklySchedule::parse("Mo-Su 06:00-23:00")?;
    let drivers = weekly(["Th 08:00-12:00", "Th 12:00-16:00"])?;
    let effective = EffectiveSchedule::compute(&store, &drivers);
    assert_eq!(effective[Weekday::Thu], schedule! { 8,00 => 16,00 });
    assert_eq!(effective.open_days().collect::<Vec<_>>(), [Weekday::Thu]);
    Ok(())
}

#[test]
fn closed_store_day_ignores_drivers() -> Result<(), Error> {
    let store = WeeklySchedule::parse("Mo-Sa 09:00-20:00; Su off")?;
    let drivers = weekly(["Mo-Su 00:00-24:00"])?;
    let effective = EffectiveSchedule::compute(&store, &drivers);

    assert!(effective[Weekday::Sun].is_empty());
    assert_eq!(effective[Weekday::Sat], schedule! { 9,00 => 20,00 });
    Ok(())
}

#[test]
fn driver_outside_store_hours() -> Result<(), Error> {
    let store = WeeklySchedule::parse("Fr 09:00-12:00")?;
    let drivers = weekly(["Fr 12:00-18:00", "Fr 06:00-09:00"])?;
    let effective = EffectiveSchedule::compute(&store, &drivers);
    assert!(effective.is_always_closed());
    Ok(())
}

#[test]
fn many_drivers_any_order() -> Result<(), Error> {
    let store = WeeklySchedule::parse("Mo-Fr 08:00-22:00")?;

    let mut drivers = weekly([
        "Mo 17:00-21:00",
        "Mo 09:00-11:00",
        "Mo 10:30-12:00",
        "Mo 20:00-23:00",
    ])?;

    let forward = EffectiveSchedule::compute(&store, &drivers);
    drivers.reverse();
    let backward = EffectiveSchedule::compute(&store, &drivers);

    assert_eq!(forward, backward);
    assert_eq!(
        forward[Weekday::Mon],
        schedule! { 9,00 => 12,00; 17,00 => 22,00 },
    );

    Ok(())
}

#[test]
fn plain_weekly_schedule() -> Result<(), Error> {
    let hours = WeeklySchedule::parse("Mo-Fr 09:00-17:00; Sa 10:00-14:00")?;
    let effective = EffectiveSchedule::from(&hours);
    assert_eq!(effective.to_weekly_schedule(), hours);
    assert_eq!(effective.open_days().count(), 6);
    Ok(())
}
