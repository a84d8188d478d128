//! Operational task entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::message::Priority;
use crate::domain::repositories::Record;
use crate::domain::user::Department;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Done,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub department: Department,
    pub assigned_to: Option<Uuid>,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(title: impl Into<String>, department: Department, priority: Priority) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            department,
            assigned_to: None,
            priority,
            status: TaskStatus::Pending,
            due_at: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn set_status(&mut self, status: TaskStatus, now: DateTime<Utc>) {
        self.completed_at = match status {
            TaskStatus::Done => self.completed_at.or(Some(now)),
            _ => None,
        };
        self.status = status;
    }

    /// Done ↔ pending
    pub fn toggle_complete(&mut self, now: DateTime<Utc>) {
        let next = if self.status == TaskStatus::Done {
            TaskStatus::Pending
        } else {
            TaskStatus::Done
        };
        self.set_status(next, now);
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status != TaskStatus::Done && self.due_at.is_some_and(|due| due < now)
    }
}

impl Record for Task {
    const ENTITY: &'static str = "Task";

    fn id(&self) -> Uuid {
        self.id
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn overdue_only_when_open_and_past_due() {
        let now = Utc::now();
        let mut t = Task::new("Fix AC in 301", Department::Maintenance, Priority::High);
        assert!(!t.is_overdue(now));
        t.due_at = Some(now - Duration::hours(1));
        assert!(t.is_overdue(now));
        t.toggle_complete(now);
        assert!(!t.is_overdue(now));
    }

    #[test]
    fn toggle_tracks_completion_time() {
        let now = Utc::now();
        let mut t = Task::new("Restock minibar", Department::Housekeeping, Priority::Normal);
        t.toggle_complete(now);
        assert_eq!(t.status, TaskStatus::Done);
        assert_eq!(t.completed_at, Some(now));
        t.toggle_complete(now);
        assert_eq!(t.status, TaskStatus::Pending);
        assert!(t.completed_at.is_none());
    }
}
