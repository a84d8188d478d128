//! Role-gated module navigation
//!
//! Every change of the current module, whatever triggered it, passes
//! through [`Navigator::guard`]. A module outside the session role's set
//! sends the user back to the dashboard and leaves an audit entry.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{
    Module, ModuleAccessTable, Role, SecurityEventKind, SecurityLog, Severity, User,
};
use crate::infrastructure::SecurityLogStore;

/// How a module change ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Allowed(Module),
    Redirected { requested: String, to: Module },
}

impl Navigation {
    pub fn module(&self) -> Module {
        match self {
            Self::Allowed(module) => *module,
            Self::Redirected { to, .. } => *to,
        }
    }

    pub fn was_redirected(&self) -> bool {
        matches!(self, Self::Redirected { .. })
    }
}

/// Session role plus the module on screen
#[derive(Debug, Clone)]
pub struct Navigator {
    user_id: Option<Uuid>,
    role: Role,
    current: Module,
}

impl Navigator {
    pub fn new(role: Role, user_id: Option<Uuid>) -> Self {
        Self {
            user_id,
            role,
            current: Module::Dashboard,
        }
    }

    pub fn for_user(user: &User) -> Self {
        Self::new(user.role(), Some(user.id))
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn current(&self) -> Module {
        self.current
    }

    /// Menu entries for the session role, in menu order.
    pub fn allowed_modules(&self) -> &'static [Module] {
        ModuleAccessTable::modules_for(self.role)
    }

    pub fn navigate(&mut self, module: Module, audit: &mut SecurityLogStore, at: DateTime<Utc>) -> Navigation {
        self.guard(Some(module), module.as_str(), audit, at)
    }

    /// Module id from a URL or bookmark. Unknown ids land on the dashboard.
    pub fn deep_link(&mut self, raw: &str, audit: &mut SecurityLogStore, at: DateTime<Utc>) -> Navigation {
        let raw = raw.trim().trim_start_matches('/');
        self.guard(raw.parse().ok(), raw, audit, at)
    }

    /// Module id persisted by an earlier session.
    pub fn restore(&mut self, raw: &str, audit: &mut SecurityLogStore, at: DateTime<Utc>) -> Navigation {
        let raw = raw.trim();
        self.guard(raw.parse().ok(), raw, audit, at)
    }

    /// Change the session role and re-check the module on screen.
    pub fn switch_role(&mut self, role: Role, audit: &mut SecurityLogStore, at: DateTime<Utc>) -> Navigation {
        debug!(from = %self.role, to = %role, "Session role switched");
        self.role = role;
        let current = self.current;
        self.guard(Some(current), current.as_str(), audit, at)
    }

    fn guard(
        &mut self,
        requested: Option<Module>,
        raw: &str,
        audit: &mut SecurityLogStore,
        at: DateTime<Utc>,
    ) -> Navigation {
        if let Some(module) = requested.filter(|m| ModuleAccessTable::can_access(self.role, *m)) {
            self.current = module;
            return Navigation::Allowed(module);
        }

        warn!(role = %self.role, requested = raw, "Module not allowed, redirecting to dashboard");
        let entry = SecurityLog::new(
            self.user_id,
            SecurityEventKind::AccessDenied,
            Severity::Warning,
            format!("{} redirected from {:?} to {}", self.role, raw, Module::Dashboard),
            at,
        );
        if let Err(e) = audit.record(entry) {
            warn!("Access denial not recorded: {}", e);
        }

        self.current = Module::Dashboard;
        Navigation::Redirected {
            requested: raw.to_string(),
            to: Module::Dashboard,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn housekeeping_cannot_open_financial() {
        let mut audit = SecurityLogStore::new();
        let mut nav = Navigator::new(Role::Housekeeping, None);

        let outcome = nav.navigate(Module::Financial, &mut audit, now());
        assert!(outcome.was_redirected());
        assert_eq!(nav.current(), Module::Dashboard);
        assert_eq!(audit.len(), 1);
        assert_eq!(audit.iter().next().unwrap().kind, SecurityEventKind::AccessDenied);

        assert_eq!(nav.navigate(Module::Housekeeping, &mut audit, now()), Navigation::Allowed(Module::Housekeeping));
        assert_eq!(audit.len(), 1);
    }

    #[test]
    fn stale_deep_links_redirect() {
        let mut audit = SecurityLogStore::new();
        let mut nav = Navigator::new(Role::Restaurant, None);

        assert_eq!(nav.deep_link("/restaurant", &mut audit, now()).module(), Module::Restaurant);
        assert_eq!(nav.deep_link("/admin", &mut audit, now()).module(), Module::Dashboard);
        assert_eq!(nav.deep_link("no-such-module", &mut audit, now()).module(), Module::Dashboard);
        assert_eq!(audit.len(), 2);
    }

    #[test]
    fn role_switch_rechecks_current_module() {
        let mut audit = SecurityLogStore::new();
        let mut nav = Navigator::new(Role::Admin, None);
        nav.navigate(Module::Financial, &mut audit, now());
        assert_eq!(nav.current(), Module::Financial);

        let outcome = nav.switch_role(Role::Housekeeping, &mut audit, now());
        assert_eq!(
            outcome,
            Navigation::Redirected { requested: "financial".into(), to: Module::Dashboard }
        );

        let outcome = nav.switch_role(Role::Manager, &mut audit, now());
        assert_eq!(outcome, Navigation::Allowed(Module::Dashboard));
    }

    #[test]
    fn restore_uses_same_guard() {
        let mut audit = SecurityLogStore::new();
        let mut nav = Navigator::new(Role::FrontDesk, Some(Uuid::new_v4()));
        assert_eq!(nav.restore("rooms", &mut audit, now()).module(), Module::Rooms);
        assert_eq!(nav.restore("security", &mut audit, now()).module(), Module::Dashboard);
        assert!(audit.iter().all(|l| l.user_id.is_some()));
    }

    #[test]
    fn menu_order_is_stable() {
        let nav = Navigator::new(Role::Housekeeping, None);
        assert_eq!(
            nav.allowed_modules(),
            &[Module::Dashboard, Module::Housekeeping, Module::Communications, Module::Operations]
        );
        assert_eq!(Navigator::new(Role::Admin, None).allowed_modules().len(), Module::ALL.len());
    }
}
