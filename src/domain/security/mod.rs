//! Security aggregate
//!
//! Audit trail and restricted-area access grants.

pub mod model;

pub use model::{AccessGrant, SecurityEventKind, SecurityLog, Severity};
