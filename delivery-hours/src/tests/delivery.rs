use delivery_hours_syntax::{Error, Weekday, WeeklySchedule};

use crate::{date, datetime, schedule};
use crate::{DateProjector, DeliveryAvailability, EffectiveSchedule, LeadTimeBoundary};

use super::weekly;

fn sample() -> Result<DeliveryAvailability, Error> {
    let store = WeeklySchedule::parse("Mo-Sa 09:00-20:00; Su off")?;
    let drivers = weekly(["Mo-Fr 10:00-14:00", "Tu-Sa 13:00-18:00"])?;
    Ok(DeliveryAvailability::new(&store, &drivers))
}

#[test]
fn store_page() -> Result<(), Error> {
    let availability = sample()?;
    let now = datetime!("2025-10-20 12:00");

    assert!(availability.is_available(now));
    assert!(!availability.is_available(datetime!("2025-10-20 14:00")));
    assert_eq!(availability.today_hours(now), "10:00 AM - 2:00 PM");
    assert_eq!(availability.today_hours(datetime!("2025-10-26 12:00")), "Closed");

    assert_eq!(
        availability.available_days(true),
        ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    );

    Ok(())
}

#[test]
fn next_day() -> Result<(), Error> {
    let availability = sample()?;

    let next = availability.next_available_day(datetime!("2025-10-26 12:00")).unwrap();
    assert_eq!(next.day, Weekday::Mon);
    assert!(next.is_tomorrow);

    // Still today even after today's slots are over
    let next = availability.next_available_day(datetime!("2025-10-20 23:00")).unwrap();
    assert!(next.is_today);
    Ok(())
}

#[test]
fn checkout_and_list_view() -> Result<(), Error> {
    let availability = sample()?;
    let now = datetime!("2025-10-20 12:00");

    let list_view = DateProjector::new(7, 0).with_boundary(LeadTimeBoundary::SlotClose);
    let dates = availability.dates(now, &list_view);
    assert_eq!(dates.len(), 6);
    assert_eq!(dates[0].date, date!("2025-10-20"));
    assert_eq!(dates[0].slots, schedule! { 10,00 => 14,00 });
    assert_eq!(dates[5].slots, schedule! { 13,00 => 18,00 });

    let checkout = DateProjector::new(7, 24);
    let dates = availability.dates(now, &checkout);
    assert_eq!(dates[0].date, date!("2025-10-22"));
    assert_eq!(dates[0].slots, schedule! { 10,00 => 18,00 });

    let options = availability.date_options(now, &checkout, 2);
    assert_eq!(options[0].label, "Wednesday, October 22");
    assert_eq!(options[1].value, "2025-10-23");
    Ok(())
}

#[test]
fn next_slot_until_midnight() -> Result<(), Error> {
    let hours = WeeklySchedule::parse("Sa 20:00-24:00")?;
    let availability = DeliveryAvailability::from_schedule(hours.into());

    let slot = availability
        .next_slot(datetime!("2025-10-20 12:00"), &DateProjector::default())
        .unwrap();

    assert_eq!(slot, datetime!("2025-10-25 20:00")..datetime!("2025-10-26 00:00"));
    Ok(())
}

#[test]
fn no_slot() {
    let availability = DeliveryAvailability::from_schedule(EffectiveSchedule::default());
    let now = datetime!("2025-10-20 12:00");

    assert!(!availability.is_available(now));
    assert!(availability.next_available_day(now).is_none());
    assert!(availability.next_slot(now, &DateProjector::default()).is_none());
    assert!(availability.dates(now, &DateProjector::default()).is_empty());
}

#[test]
fn shared_schedule() -> Result<(), Error> {
    let availability = sample()?;
    let copy = availability.clone();
    assert!(std::ptr::eq(availability.schedule(), copy.schedule()));
    assert_eq!(availability, copy);
    Ok(())
}
