//! Per-module list filters
//!
//! Each screen filters its own record type with a concrete struct; the
//! [`ModuleFilter`] union lets one entry point dispatch them.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::booking::{Booking, BookingStatus};
use crate::domain::financial::{Charge, RevenueSource};
use crate::domain::inventory::InventoryItem;
use crate::domain::message::{Message, Priority};
use crate::domain::security::{AccessGrant, SecurityEventKind, SecurityLog, Severity};
use crate::domain::task::{Task, TaskStatus};
use crate::domain::user::Department;

#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub guest: Option<String>,
    /// Only bookings holding a room on this night
    pub occupied_on: Option<NaiveDate>,
}

impl BookingFilter {
    pub fn matches(&self, b: &Booking) -> bool {
        self.status.map_or(true, |s| b.status == s)
            && self.guest.as_deref().map_or(true, |g| contains_ci(&b.guest_name, g))
            && self.occupied_on.map_or(true, |d| b.occupies(d))
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub department: Option<Department>,
    pub assigned_to: Option<Uuid>,
    /// Only tasks past due at this instant
    pub overdue_at: Option<DateTime<Utc>>,
}

impl TaskFilter {
    pub fn matches(&self, t: &Task) -> bool {
        self.status.map_or(true, |s| t.status == s)
            && self.department.map_or(true, |d| t.department == d)
            && self.assigned_to.map_or(true, |u| t.assigned_to == Some(u))
            && self.overdue_at.map_or(true, |now| t.is_overdue(now))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MessageFilter {
    pub unread_only: bool,
    pub min_priority: Option<Priority>,
    pub from_user: Option<Uuid>,
}

impl MessageFilter {
    pub fn matches(&self, m: &Message) -> bool {
        (!self.unread_only || !m.read)
            && self.min_priority.map_or(true, |p| m.priority >= p)
            && self.from_user.map_or(true, |u| m.from_user == u)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InventoryFilter {
    pub department: Option<Department>,
    pub low_stock_only: bool,
    pub name: Option<String>,
}

impl InventoryFilter {
    pub fn matches(&self, i: &InventoryItem) -> bool {
        self.department.map_or(true, |d| i.department == d)
            && (!self.low_stock_only || i.is_low_stock())
            && self.name.as_deref().map_or(true, |n| contains_ci(&i.name, n))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SecurityLogFilter {
    pub user_id: Option<Uuid>,
    pub kind: Option<SecurityEventKind>,
    pub min_severity: Option<Severity>,
    pub since: Option<DateTime<Utc>>,
}

impl SecurityLogFilter {
    pub fn matches(&self, l: &SecurityLog) -> bool {
        self.user_id.map_or(true, |u| l.user_id == Some(u))
            && self.kind.map_or(true, |k| l.kind == k)
            && self.min_severity.map_or(true, |s| l.severity >= s)
            && self.since.map_or(true, |t| l.at >= t)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccessGrantFilter {
    pub user_id: Option<Uuid>,
    pub area: Option<String>,
    /// Only grants in force at this instant
    pub effective_at: Option<DateTime<Utc>>,
}

impl AccessGrantFilter {
    pub fn matches(&self, g: &AccessGrant) -> bool {
        self.user_id.map_or(true, |u| g.user_id == u)
            && self.area.as_deref().map_or(true, |a| g.area.eq_ignore_ascii_case(a))
            && self.effective_at.map_or(true, |now| g.is_effective(now))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChargeFilter {
    pub source: Option<RevenueSource>,
    pub currency: Option<String>,
    pub since: Option<DateTime<Utc>>,
}

impl ChargeFilter {
    pub fn matches(&self, c: &Charge) -> bool {
        self.source.map_or(true, |s| c.source == s)
            && self
                .currency
                .as_deref()
                .map_or(true, |cur| c.amount.currency.eq_ignore_ascii_case(cur))
            && self.since.map_or(true, |t| c.posted_at >= t)
    }
}

/// Filter for one module's list view
#[derive(Debug, Clone)]
pub enum ModuleFilter {
    Bookings(BookingFilter),
    Tasks(TaskFilter),
    Messages(MessageFilter),
    Inventory(InventoryFilter),
    SecurityLogs(SecurityLogFilter),
    AccessGrants(AccessGrantFilter),
    Charges(ChargeFilter),
}

/// Result of applying a [`ModuleFilter`]
#[derive(Debug, Clone)]
pub enum FilteredRecords {
    Bookings(Vec<Booking>),
    Tasks(Vec<Task>),
    Messages(Vec<Message>),
    Inventory(Vec<InventoryItem>),
    SecurityLogs(Vec<SecurityLog>),
    AccessGrants(Vec<AccessGrant>),
    Charges(Vec<Charge>),
}

impl FilteredRecords {
    pub fn len(&self) -> usize {
        match self {
            Self::Bookings(v) => v.len(),
            Self::Tasks(v) => v.len(),
            Self::Messages(v) => v.len(),
            Self::Inventory(v) => v.len(),
            Self::SecurityLogs(v) => v.len(),
            Self::AccessGrants(v) => v.len(),
            Self::Charges(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ── Tests ──────────────────────────────────────────────────────
