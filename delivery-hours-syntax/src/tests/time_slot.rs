use crate::error::Error;
use crate::slot;
use crate::time_of_day::{parse_time, TimeOfDay};
use crate::time_slot::{slots_union, TimeSlot};

#[test]
fn parse_time_formats() {
    assert_eq!(parse_time("00:00").unwrap(), 0);
    assert_eq!(parse_time("7:05").unwrap(), 425);
    assert_eq!(parse_time("23:59").unwrap(), 1439);

    for raw in ["", "12", "12:5", "123:00", "ab:cd", "-1:00", "12:00:00", "24:01", " 9:00"] {
        assert!(
            matches!(parse_time(raw), Err(Error::InvalidTimeFormat(ref value)) if value == raw),
            "`{raw}` should be rejected",
        );
    }
}

#[test]
fn time_ordering_matches_minutes() {
    let early: TimeOfDay = "9:00".parse().unwrap();
    let late: TimeOfDay = "10:00".parse().unwrap();
    assert!(early < late);
    assert!(late < TimeOfDay::MIDNIGHT_24);
}

#[test]
fn intersection() {
    assert_eq!(
        slot!("09:00", "20:00").intersection(slot!("10:00", "18:00")),
        Some(slot!("10:00", "18:00")),
    );

    assert_eq!(
        slot!("09:00", "12:00").intersection(slot!("11:00", "15:00")),
        Some(slot!("11:00", "12:00")),
    );

    // Touching slots have an empty intersection
    assert_eq!(slot!("09:00", "12:00").intersection(slot!("12:00", "15:00")), None);
    assert_eq!(slot!("08:00", "10:00").intersection(slot!("18:00", "20:00")), None);
}

#[test]
fn contains_excludes_close() {
    let slot = slot!("09:00", "17:00");
    assert!(slot.contains("09:00".parse().unwrap()));
    assert!(slot.contains("16:59".parse().unwrap()));
    assert!(!slot.contains("17:00".parse().unwrap()));
    assert!(!slot.contains("08:59".parse().unwrap()));
}

#[test]
fn union_merges_overlapping() {
    assert_eq!(
        slots_union([slot!("10:00", "14:00"), slot!("13:00", "18:00")]),
        [slot!("10:00", "18:00")],
    );
}

#[test]
fn union_merges_touching() {
    assert_eq!(
        slots_union([slot!("12:00", "15:00"), slot!("09:00", "12:00")]),
        [slot!("09:00", "15:00")],
    );
}

#[test]
fn union_keeps_disjoint() {
    assert_eq!(
        slots_union([slot!("18:00", "20:00"), slot!("08:00", "10:00")]),
        [slot!("08:00", "10:00"), slot!("18:00", "20:00")],
    );
}

#[test]
fn union_of_nested_and_empty() {
    assert!(slots_union(Vec::<TimeSlot>::new()).is_empty());

    assert_eq!(
        slots_union([
            slot!("08:00", "22:00"),
            slot!("10:00", "11:00"),
            slot!("21:00", "22:00"),
            slot!("08:00", "09:00"),
        ]),
        [slot!("08:00", "22:00")],
    );
}
