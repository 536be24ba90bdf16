pub mod colouring;
pub mod cycle_detector;
pub mod escape_time;
pub mod formula;
pub mod listener;
