//! User aggregate
//!
//! Contains the User entity, its embedded shift record, and DTOs.

pub mod model;

mod dto_create;
mod dto_get;
mod dto_update;

// Re-export model types
pub use model::{Department, ShiftRecord, ShiftType, User};

// Re-export DTOs
pub use dto_create::CreateUserDto;
pub use dto_get::GetUserDto;
pub use dto_update::UpdateUserDto;
