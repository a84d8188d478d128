//! Task aggregate

pub mod model;

pub use model::{Task, TaskStatus};
