//! # Hotel Ops
//!
//! Property-management core for a hotel operations dashboard.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Entities, value types and the rules that need no I/O
//!   (currency conversion, time zones, role access, shift transitions)
//! - **application**: Services, module navigation and the [`Dashboard`]
//!   that owns all state for one running front end
//! - **infrastructure**: Copy-on-write record stores and key-value persistence
//! - **shared**: Error types, pagination and validation helpers
//! - **config**: TOML configuration
//! - **telemetry**: Tracing subscriber setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;
pub mod telemetry;

pub use application::Dashboard;
pub use config::{default_config_path, AppConfig};
pub use shared::{AppError, AppResult, DomainError, DomainResult};
pub use telemetry::init_tracing;
