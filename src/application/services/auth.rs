//! Demo-level sign-in: username lookup, no credentials
//!
//! The signed-in user id is kept under [`STORAGE_KEY_CURRENT_USER`] so a
//! restarted dashboard can resume the session.

use tracing::{info, warn};
use uuid::Uuid;

use crate::application::services::Clock;
use crate::domain::{DomainError, SecurityEventKind, SecurityLog, Severity, User};
use crate::infrastructure::storage::{KeyValueStorage, STORAGE_KEY_CURRENT_USER};
use crate::infrastructure::{SecurityLogStore, UserStore};
use crate::shared::AppResult;

pub struct AuthService<'a> {
    clock: &'a dyn Clock,
}

impl<'a> AuthService<'a> {
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }

    /// Sign in by username. Failures are audited before they are returned.
    pub fn login(
        &self,
        users: &mut UserStore,
        logs: &mut SecurityLogStore,
        storage: &mut dyn KeyValueStorage,
        username: &str,
    ) -> AppResult<User> {
        let now = self.clock.now();

        let Some(user) = users.find_by_username(username).cloned() else {
            logs.record(SecurityLog::new(
                None,
                SecurityEventKind::Login,
                Severity::Warning,
                format!("Unknown username {:?}", username),
                now,
            ))?;
            return Err(DomainError::Unauthorized("Invalid credentials".into()).into());
        };

        if !user.is_active {
            logs.record(SecurityLog::new(
                Some(user.id),
                SecurityEventKind::Login,
                Severity::Warning,
                format!("Disabled account {} tried to sign in", user.username),
                now,
            ))?;
            return Err(DomainError::Unauthorized("Account is disabled".into()).into());
        }

        let user = users.record_login(user.id, now)?;
        storage.set(STORAGE_KEY_CURRENT_USER, &user.id.to_string())?;
        logs.record(SecurityLog::new(
            Some(user.id),
            SecurityEventKind::Login,
            Severity::Info,
            format!("{} signed in as {}", user.username, user.role()),
            now,
        ))?;

        info!(user_id = %user.id, username = %user.username, "User logged in");
        Ok(user)
    }

    /// Resume the persisted session. A stale or unreadable handle is
    /// cleared and treated as signed out.
    pub fn restore_session(&self, users: &UserStore, storage: &mut dyn KeyValueStorage) -> AppResult<Option<User>> {
        let Some(raw) = storage.get(STORAGE_KEY_CURRENT_USER)? else {
            return Ok(None);
        };

        let user = Uuid::parse_str(raw.trim())
            .ok()
            .and_then(|id| users.get(id))
            .filter(|u| u.is_active)
            .cloned();

        if user.is_none() {
            warn!(handle = %raw.trim(), "Discarding stale session handle");
            storage.remove(STORAGE_KEY_CURRENT_USER)?;
        }
        Ok(user)
    }

    pub fn logout(&self, logs: &mut SecurityLogStore, storage: &mut dyn KeyValueStorage, user: &User) -> AppResult<()> {
        storage.remove(STORAGE_KEY_CURRENT_USER)?;
        logs.record(SecurityLog::new(
            Some(user.id),
            SecurityEventKind::Logout,
            Severity::Info,
            format!("{} signed out", user.username),
            self.clock.now(),
        ))?;
        info!(user_id = %user.id, "User logged out");
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::FixedClock;
    use crate::domain::{Department, Role, ShiftType};
    use crate::infrastructure::MemoryKeyValueStorage;
    use crate::shared::AppError;

    fn users() -> (UserStore, Uuid) {
        let mut users = UserStore::new();
        let u = users
            .insert(User::new("Raj", "raj", Role::FrontDesk, Department::FrontOffice, ShiftType::Morning))
            .unwrap();
        (users, u.id)
    }

    #[test]
    fn login_persists_handle_and_audits() {
        let clock = FixedClock::at(2024, 2, 1, 8, 0, 0);
        let auth = AuthService::new(&clock);
        let (mut users, id) = users();
        let mut logs = SecurityLogStore::new();
        let mut kv = MemoryKeyValueStorage::new();

        let user = auth.login(&mut users, &mut logs, &mut kv, "RAJ").unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.last_login, Some(clock.now()));
        assert_eq!(kv.get(STORAGE_KEY_CURRENT_USER).unwrap(), Some(id.to_string()));
        assert_eq!(logs.by_user(id).len(), 1);

        let restored = auth.restore_session(&users, &mut kv).unwrap();
        assert_eq!(restored.map(|u| u.id), Some(id));

        auth.logout(&mut logs, &mut kv, &user).unwrap();
        assert_eq!(kv.get(STORAGE_KEY_CURRENT_USER).unwrap(), None);
        assert_eq!(logs.by_user(id).len(), 2);
    }

    #[test]
    fn unknown_and_disabled_users_are_refused() {
        let clock = FixedClock::at(2024, 2, 1, 8, 0, 0);
        let auth = AuthService::new(&clock);
        let (mut users, id) = users();
        let mut logs = SecurityLogStore::new();
        let mut kv = MemoryKeyValueStorage::new();

        let err = auth.login(&mut users, &mut logs, &mut kv, "nobody").unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::Unauthorized(_))));

        users.toggle_active(id).unwrap();
        assert!(auth.login(&mut users, &mut logs, &mut kv, "raj").is_err());
        assert_eq!(logs.by_severity(Severity::Warning).len(), 2);
        assert_eq!(kv.get(STORAGE_KEY_CURRENT_USER).unwrap(), None);
    }

    #[test]
    fn stale_handle_is_cleared() {
        let clock = FixedClock::at(2024, 2, 1, 8, 0, 0);
        let auth = AuthService::new(&clock);
        let (users, _) = users();
        let mut kv = MemoryKeyValueStorage::new();
        kv.set(STORAGE_KEY_CURRENT_USER, "not-a-uuid").unwrap();

        assert!(auth.restore_session(&users, &mut kv).unwrap().is_none());
        assert_eq!(kv.get(STORAGE_KEY_CURRENT_USER).unwrap(), None);
    }
}
