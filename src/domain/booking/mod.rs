//! Booking aggregate

pub mod model;

pub use model::{Booking, BookingStatus, CreateBookingDto};
