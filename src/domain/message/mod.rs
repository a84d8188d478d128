//! Communications aggregate

pub mod model;

pub use model::{Message, Priority, Recipient};
