//! Security log entries and physical access grants

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::repositories::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecurityEventKind {
    Login,
    Logout,
    AccessDenied,
    ConfigChange,
    AccessGranted,
    AccessRevoked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// Append-only audit entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityLog {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub kind: SecurityEventKind,
    pub severity: Severity,
    pub detail: String,
    pub at: DateTime<Utc>,
}

impl SecurityLog {
    pub fn new(
        user_id: Option<Uuid>,
        kind: SecurityEventKind,
        severity: Severity,
        detail: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            kind,
            severity,
            detail: detail.into(),
            at,
        }
    }
}

impl Record for SecurityLog {
    const ENTITY: &'static str = "SecurityLog";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Permission for a user to enter a restricted area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessGrant {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Area name, e.g. "Server Room"
    pub area: String,
    pub granted_by: Uuid,
    pub granted_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl AccessGrant {
    pub fn new(
        user_id: Uuid,
        area: impl Into<String>,
        granted_by: Uuid,
        granted_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            area: area.into(),
            granted_by,
            granted_at,
            expires_at,
            is_active: true,
        }
    }

    pub fn is_effective(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.expires_at.map_or(true, |exp| now < exp)
    }
}

impl Record for AccessGrant {
    const ENTITY: &'static str = "AccessGrant";

    fn id(&self) -> Uuid {
        self.id
    }
}

// ── Tests ──────────────────────────────────────────────────────
