mod time_slot;

#[macro_export]
macro_rules! slot {
    ( $open: expr, $close: expr ) => {{
        $crate::time_slot::TimeSlot::parse($open, $close).expect("invalid slot literal")
    }};
}
