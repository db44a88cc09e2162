use std::env;

use chrono::Local;

use delivery_hours::availability::{effective_hours_label, NextAvailableDay};
use delivery_hours::localization::Language;
use delivery_hours::syntax::WeeklySchedule;
use delivery_hours::{DateProjector, DeliveryAvailability, LeadTimeBoundary};

const LOOKAHEAD_DAYS: u32 = 7;
const CHECKOUT_LEAD_HOURS: u32 = 24;

fn parse_schedule(raw: &str) -> WeeklySchedule {
    match raw.parse() {
        Ok(val) => val,
        Err(err) => {
            panic!("invalid schedule `{raw}`: {err}");
        }
    }
}

fn main() {
    let mut args = env::args().skip(1);
    let store = args.next().expect("Usage: ./schedule <STORE HOURS> [DRIVER HOURS]...");
    let store = parse_schedule(&store);
    let drivers: Vec<_> = args.map(|raw| parse_schedule(&raw)).collect();
    let now = Local::now().naive_local();
    let availability = DeliveryAvailability::new(&store, &drivers);

    println!(" - store: {store}");
    println!(" - active drivers: {}", drivers.len());
    println!(" - now: {now}");
    println!(" - available now: {}", availability.is_available(now));
    println!(" - today: {}", availability.today_hours(now));

    match availability.next_available_day(now) {
        Some(NextAvailableDay { day, days_ahead, .. }) => {
            println!(" - next available day: {day} (in {days_ahead} days)")
        }
        None => println!(" - next available day: none"),
    }

    println!("---");
    println!("effective schedule:");

    for (day, schedule) in availability.schedule().iter() {
        println!(
            " - {day}: {} ({})",
            schedule,
            effective_hours_label(availability.schedule(), day, Language::En),
        );
    }

    let projections = [
        (
            "list view",
            DateProjector::new(LOOKAHEAD_DAYS, 0).with_boundary(LeadTimeBoundary::SlotClose),
        ),
        (
            "checkout",
            DateProjector::new(LOOKAHEAD_DAYS, CHECKOUT_LEAD_HOURS),
        ),
    ];

    for (name, projector) in &projections {
        println!("---");
        println!("{name} ({}h lead time):", projector.min_lead().num_hours());

        let options = availability.date_options(now, projector, LOOKAHEAD_DAYS as usize);

        if options.is_empty() {
            println!(" (empty)");
        }

        for option in options {
            println!(" - {} [{}]: {}", option.label, option.value, option.date.slots);
        }
    }
}
