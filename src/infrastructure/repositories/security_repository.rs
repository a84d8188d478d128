use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{AccessGrant, DomainError, DomainResult, SecurityLog, Severity};
use crate::infrastructure::storage::Store;
use crate::shared::{PaginatedResult, PaginationParams};

pub type SecurityLogStore = Store<SecurityLog>;
pub type AccessGrantStore = Store<AccessGrant>;

impl Store<SecurityLog> {
    pub fn record(&mut self, log: SecurityLog) -> DomainResult<SecurityLog> {
        match log.severity {
            Severity::Info => info!(kind = ?log.kind, detail = %log.detail, "Security event"),
            Severity::Warning | Severity::Critical => {
                warn!(kind = ?log.kind, severity = ?log.severity, detail = %log.detail, "Security event")
            }
        }
        self.insert(log)
    }

    pub fn by_user(&self, user_id: Uuid) -> Vec<SecurityLog> {
        self.filter(|l| l.user_id == Some(user_id))
    }

    pub fn by_severity(&self, severity: Severity) -> Vec<SecurityLog> {
        self.filter(|l| l.severity >= severity)
    }

    /// Newest-first page of the audit log.
    pub fn page(&self, params: PaginationParams) -> PaginatedResult<SecurityLog> {
        let mut all = self.filter(|_| true);
        all.sort_by(|a, b| b.at.cmp(&a.at));
        PaginatedResult::from_slice(&all, params)
    }
}

impl Store<AccessGrant> {
    pub fn grant(&mut self, grant: AccessGrant) -> DomainResult<AccessGrant> {
        if grant.area.trim().is_empty() {
            return Err(DomainError::Validation("Access area is required".into()));
        }
        let grant = self.insert(grant)?;
        info!(user_id = %grant.user_id, area = %grant.area, "Access granted");
        Ok(grant)
    }

    pub fn revoke(&mut self, id: Uuid) -> DomainResult<AccessGrant> {
        let grant = self.update(id, |g| {
            g.is_active = false;
            Ok(())
        })?;
        info!(user_id = %grant.user_id, area = %grant.area, "Access revoked");
        Ok(grant)
    }

    pub fn toggle(&mut self, id: Uuid) -> DomainResult<AccessGrant> {
        self.update(id, |g| {
            g.is_active = !g.is_active;
            Ok(())
        })
    }

    pub fn active_for(&self, user_id: Uuid, now: DateTime<Utc>) -> Vec<AccessGrant> {
        self.filter(|g| g.user_id == user_id && g.is_effective(now))
    }
}

// ── Tests ──────────────────────────────────────────────────────
