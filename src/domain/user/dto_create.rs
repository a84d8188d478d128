use serde::Deserialize;
use validator::Validate;

use super::{Department, ShiftType};
use crate::domain::access::Role;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 3, max = 50, message = "username must be 3–50 characters"))]
    pub username: String,
    pub role: Role,
    pub department: Department,
    pub shift_type: ShiftType,
}
