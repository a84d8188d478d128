//! Repository contracts for the domain layer
//!
//! Contains:
//! - `Record`: what an entity must expose to live in a store
//! - `DomainResult`: standard result type for domain operations

use uuid::Uuid;

pub use crate::shared::errors::{DomainError, DomainResult};

/// An entity held in an in-memory store.
pub trait Record: Clone {
    /// Entity name used in `NotFound` errors and log lines
    const ENTITY: &'static str;

    fn id(&self) -> Uuid;
}
