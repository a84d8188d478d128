//! Shift aggregate
//!
//! Scheduled shifts and the clock-in / clock-out state machine.

pub mod model;

pub use model::{ShiftSchedule, ShiftStatus};
