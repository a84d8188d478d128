use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{
    CreateUserDto, Department, DomainError, DomainResult, GetUserDto, UpdateUserDto, User,
};
use crate::infrastructure::storage::Store;
use crate::shared::describe_validation_errors;

pub type UserStore = Store<User>;

impl Store<User> {
    pub fn create_user(&mut self, dto: CreateUserDto) -> DomainResult<User> {
        dto.validate()
            .map_err(|e| DomainError::Validation(describe_validation_errors(&e)))?;

        if self.find_by_username(&dto.username).is_some() {
            return Err(DomainError::Conflict(format!(
                "Username {} already exists",
                dto.username
            )));
        }

        let user = User::new(dto.name, dto.username, dto.role, dto.department, dto.shift_type);
        let user = self.insert(user)?;
        info!(user_id = %user.id, username = %user.username, role = %user.role(), "User created");
        Ok(user)
    }

    pub fn update_user(&mut self, id: Uuid, dto: UpdateUserDto) -> DomainResult<User> {
        dto.validate()
            .map_err(|e| DomainError::Validation(describe_validation_errors(&e)))?;

        self.update(id, |user| {
            if let Some(name) = dto.name {
                user.name = name;
            }
            if let Some(department) = dto.department {
                user.department = department;
            }
            if let Some(is_active) = dto.is_active {
                user.is_active = is_active;
            }
            Ok(())
        })
    }

    pub fn toggle_active(&mut self, id: Uuid) -> DomainResult<User> {
        let user = self.update(id, |user| {
            user.is_active = !user.is_active;
            Ok(())
        })?;
        info!(user_id = %id, is_active = user.is_active, "User active flag toggled");
        Ok(user)
    }

    pub fn delete_user(&mut self, id: Uuid) -> DomainResult<User> {
        let user = self.remove(id)?;
        info!(user_id = %id, "User deleted");
        Ok(user)
    }

    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.iter()
            .find(|u| u.username.eq_ignore_ascii_case(username))
    }

    pub fn list_users(&self, dto: &GetUserDto) -> Vec<User> {
        let search = dto.search.as_ref().map(|s| s.to_lowercase());
        let mut users = self.filter(|u| {
            search.as_ref().map_or(true, |s| {
                u.name.to_lowercase().contains(s) || u.username.to_lowercase().contains(s)
            }) && dto.role.map_or(true, |r| u.role() == r)
                && dto.department.map_or(true, |d| u.department == d)
                && (!dto.active_only || u.is_active)
        });
        users.sort_by(|a, b| a.name.cmp(&b.name));
        users
    }

    pub fn by_department(&self, department: Department) -> Vec<User> {
        self.filter(|u| u.department == department)
    }

    pub fn active_on_shift(&self) -> Vec<User> {
        self.filter(|u| u.current_shift.is_on_shift())
    }

    pub fn record_login(&mut self, id: Uuid, at: DateTime<Utc>) -> DomainResult<User> {
        self.update(id, |user| {
            user.last_login = Some(at);
            Ok(())
        })
    }

    pub fn set_on_shift(&mut self, id: Uuid, clocked_in_at: Option<NaiveDateTime>) -> DomainResult<User> {
        self.update(id, |user| {
            match clocked_in_at {
                Some(at) => user.current_shift.clock_in(at),
                None => user.current_shift.clock_out(),
            }
            Ok(())
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────
