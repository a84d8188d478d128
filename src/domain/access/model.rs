//! Roles, modules and the static access table

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Staff role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Admin,
    Manager,
    FrontDesk,
    Housekeeping,
    Restaurant,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Manager,
        Role::FrontDesk,
        Role::Housekeeping,
        Role::Restaurant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::FrontDesk => "front-desk",
            Self::Housekeeping => "housekeeping",
            Self::Restaurant => "restaurant",
        }
    }

    /// Roles confined to a small module subset; the navigator keeps
    /// pulling them back into it whenever the current module changes.
    pub fn is_restricted(&self) -> bool {
        matches!(self, Self::Housekeeping | Self::Restaurant)
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("Unknown role: {:?}", s)))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Top-level dashboard section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Module {
    Dashboard,
    Rooms,
    Housekeeping,
    Banquet,
    Restaurant,
    RoomService,
    Communications,
    Operations,
    Security,
    Financial,
    Admin,
}

impl Module {
    /// Menu order
    pub const ALL: [Module; 11] = [
        Module::Dashboard,
        Module::Rooms,
        Module::Housekeeping,
        Module::Banquet,
        Module::Restaurant,
        Module::RoomService,
        Module::Communications,
        Module::Operations,
        Module::Security,
        Module::Financial,
        Module::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Rooms => "rooms",
            Self::Housekeeping => "housekeeping",
            Self::Banquet => "banquet",
            Self::Restaurant => "restaurant",
            Self::RoomService => "room-service",
            Self::Communications => "communications",
            Self::Operations => "operations",
            Self::Security => "security",
            Self::Financial => "financial",
            Self::Admin => "admin",
        }
    }

}

impl FromStr for Module {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("Unknown module: {:?}", s)))
    }
}

impl Default for Module {
    fn default() -> Self {
        Self::Dashboard
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static role → module mapping. Never mutated at runtime.
pub struct ModuleAccessTable;

impl ModuleAccessTable {
    pub fn modules_for(role: Role) -> &'static [Module] {
        use Module::*;
        match role {
            Role::Admin => &Module::ALL,
            Role::Manager => &[
                Dashboard,
                Rooms,
                Housekeeping,
                Banquet,
                Restaurant,
                RoomService,
                Communications,
                Operations,
                Security,
                Financial,
            ],
            Role::FrontDesk => &[
                Dashboard,
                Rooms,
                Banquet,
                RoomService,
                Communications,
                Operations,
            ],
            Role::Housekeeping => &[Dashboard, Housekeeping, Communications, Operations],
            Role::Restaurant => &[
                Dashboard,
                Restaurant,
                RoomService,
                Communications,
                Operations,
            ],
        }
    }

    pub fn can_access(role: Role, module: Module) -> bool {
        Self::modules_for(role).contains(&module)
    }

    /// String form used by persisted sessions and deep links. Unknown
    /// roles and unknown modules are denied.
    pub fn can_access_raw(role: &str, module: &str) -> bool {
        match (role.parse::<Role>(), module.parse::<Module>()) {
            (Ok(role), Ok(module)) => Self::can_access(role, module),
            _ => false,
        }
    }

    /// The requested module when allowed, otherwise the dashboard.
    pub fn resolve_initial_module(role: Role, requested: Module) -> Module {
        if Self::can_access(role, requested) {
            requested
        } else {
            Module::Dashboard
        }
    }

    pub fn resolve_initial_module_raw(role: &str, requested: &str) -> Module {
        match (role.parse::<Role>(), requested.parse::<Module>()) {
            (Ok(role), Ok(module)) => Self::resolve_initial_module(role, module),
            _ => Module::Dashboard,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
