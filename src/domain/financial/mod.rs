//! Financial aggregate

pub mod model;

pub use model::{Charge, Money, RevenueSource};
