//! Staff communication entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::repositories::Record;
use crate::domain::user::{Department, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Normal,
    High,
    Urgent,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Normal
    }
}

/// Who a message is addressed to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Recipient {
    User { user_id: Uuid },
    Department { department: Department },
    Everyone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub from_user: Uuid,
    pub to: Recipient,
    pub subject: String,
    pub body: String,
    pub priority: Priority,
    pub sent_at: DateTime<Utc>,
    pub read: bool,
}

impl Message {
    pub fn new(
        from_user: Uuid,
        to: Recipient,
        subject: impl Into<String>,
        body: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            from_user,
            to,
            subject: subject.into(),
            body: body.into(),
            priority,
            sent_at: Utc::now(),
            read: false,
        }
    }

    /// Direct, department-wide or broadcast to this user.
    pub fn is_addressed_to(&self, user: &User) -> bool {
        match &self.to {
            Recipient::User { user_id } => *user_id == user.id,
            Recipient::Department { department } => *department == user.department,
            Recipient::Everyone => true,
        }
    }
}

impl Record for Message {
    const ENTITY: &'static str = "Message";

    fn id(&self) -> Uuid {
        self.id
    }
}

// ── Tests ──────────────────────────────────────────────────────
