//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.

use arbitrary::Arbitrary;
use chrono::{DateTime, Datelike, NaiveDateTime, NaiveTime, TimeDelta};

use std::fmt::Debug;

use delivery_hours::syntax::{TimeSlot, WeeklySchedule, WEEK};
use delivery_hours::{DateProjector, EffectiveSchedule, LeadTimeBoundary};

/// A fuzzing example
#[derive(Arbitrary, Clone)]
pub struct Data {
    pub date_secs: i64,
    pub store: String,
    pub drivers: Vec<String>,
    pub projection: Projection,
}

/// Parameters of the date projection
#[derive(Arbitrary, Clone, Debug)]
pub struct Projection {
    pub lookahead_days: u8,
    pub min_lead_hours: u8,
    pub on_close: bool,
}

impl Projection {
    fn projector(&self) -> DateProjector {
        let boundary = {
            if self.on_close {
                LeadTimeBoundary::SlotClose
            } else {
                LeadTimeBoundary::SlotOpen
            }
        };

        DateProjector::new(self.lookahead_days.into(), self.min_lead_hours.into())
            .with_boundary(boundary)
    }
}

impl Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Data");

        if let Some(date) = DateTime::from_timestamp(self.date_secs, 0) {
            debug.field("date", &date.naive_utc());
        }

        debug.field("store", &self.store);
        debug.field("drivers", &self.drivers);
        debug.field("projection", &self.projection);
        debug.finish()
    }
}

fn parse_or_reprint(raw: &str) -> Option<WeeklySchedule> {
    let schedule: WeeklySchedule = raw.parse().ok()?;

    let reparsed: WeeklySchedule = schedule.to_string().parse().unwrap_or_else(|err| {
        eprintln!("[ERR] Initial Expression: {raw}");
        eprintln!("[ERR] Invalid stringified Expression: {schedule}");
        panic!("{err}")
    });

    assert_eq!(schedule, reparsed);
    Some(schedule)
}

fn slot_bounds(date: chrono::NaiveDate, slot: TimeSlot) -> (NaiveDateTime, NaiveDateTime) {
    let at = |mins: u16| date.and_time(NaiveTime::MIN) + TimeDelta::minutes(mins.into());

    (
        at(slot.open().mins_from_midnight()),
        at(slot.close().mins_from_midnight()),
    )
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_delivery(data: Data) -> bool {
    let Some(date) = DateTime::from_timestamp(data.date_secs, 0) else {
        return false;
    };

    let now = date.naive_utc();

    if now.year() < 1900 || now.year() > 9999 {
        return false;
    }

    let Some(store) = parse_or_reprint(&data.store) else {
        return false;
    };

    let drivers: Vec<_> = data
        .drivers
        .iter()
        .filter_map(|raw| parse_or_reprint(raw))
        .collect();

    let effective = EffectiveSchedule::compute(&store, &drivers);

    if drivers.is_empty() {
        assert!(effective.is_always_closed());
    }

    for day in WEEK {
        let slots = effective[day].slots();

        assert!(slots.windows(2).all(|pair| pair[0].close() < pair[1].open()));

        for slot in slots {
            let store_slot = store[day].slot().expect("effective slot on a closed store day");
            assert_eq!(slot.intersection(store_slot), Some(*slot));

            assert!(drivers
                .iter()
                .filter_map(|driver| driver[day].slot())
                .any(|driver_slot| driver_slot.overlaps(*slot)));
        }
    }

    let projector = data.projection.projector();
    let dates: Vec<_> = projector.project(&effective, now).collect();
    let cutoff = now + projector.min_lead();

    assert!(dates.len() <= data.projection.lookahead_days.into());
    assert!(dates.windows(2).all(|pair| pair[0].date < pair[1].date));
    assert_eq!(dates, projector.project(&effective, now).collect::<Vec<_>>());

    for date in &dates {
        assert!(!date.slots.is_empty());

        for slot in &date.slots {
            assert!(effective[date.weekday()].slots().contains(slot));
            let (open, close) = slot_bounds(date.date, *slot);

            let boundary = match projector.boundary() {
                LeadTimeBoundary::SlotOpen => open,
                LeadTimeBoundary::SlotClose => close,
            };

            assert!(boundary >= cutoff);
        }
    }

    true
}
