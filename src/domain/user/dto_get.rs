use super::Department;
use crate::domain::access::Role;

#[derive(Debug, Clone, Default)]
pub struct GetUserDto {
    /// Case-insensitive match on name or username
    pub search: Option<String>,
    pub role: Option<Role>,
    pub department: Option<Department>,
    pub active_only: bool,
}
