use tracing::info;
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, Message, User};
use crate::infrastructure::storage::Store;

pub type MessageStore = Store<Message>;

impl Store<Message> {
    pub fn send(&mut self, message: Message) -> DomainResult<Message> {
        if message.subject.trim().is_empty() {
            return Err(DomainError::Validation("Message subject is required".into()));
        }
        let message = self.insert(message)?;
        info!(message_id = %message.id, priority = ?message.priority, "Message sent");
        Ok(message)
    }

    pub fn mark_read(&mut self, id: Uuid) -> DomainResult<Message> {
        self.update(id, |m| {
            m.read = true;
            Ok(())
        })
    }

    pub fn toggle_read(&mut self, id: Uuid) -> DomainResult<Message> {
        self.update(id, |m| {
            m.read = !m.read;
            Ok(())
        })
    }

    /// Messages visible to `user`, newest first.
    pub fn inbox_for(&self, user: &User) -> Vec<Message> {
        let mut inbox = self.filter(|m| m.is_addressed_to(user));
        inbox.sort_by(|a, b| b.sent_at.cmp(&a.sent_at));
        inbox
    }

    pub fn sent_by(&self, user_id: Uuid) -> Vec<Message> {
        self.filter(|m| m.from_user == user_id)
    }

    pub fn unread_count(&self, user: &User) -> usize {
        self.iter()
            .filter(|m| !m.read && m.is_addressed_to(user))
            .count()
    }
}

// ── Tests ──────────────────────────────────────────────────────
