use serde::Deserialize;
use validator::Validate;

use super::Department;

/// Editable user fields. The role is deliberately absent.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 100, message = "name must not be empty"))]
    pub name: Option<String>,
    pub department: Option<Department>,
    pub is_active: Option<bool>,
}
