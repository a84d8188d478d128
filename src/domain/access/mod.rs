//! Access control
//!
//! Single source of truth for which role may open which module.

pub mod model;

pub use model::{Module, ModuleAccessTable, Role};
