use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::domain::{Department, DomainError, DomainResult, Task, TaskStatus};
use crate::infrastructure::storage::Store;

pub type TaskStore = Store<Task>;

impl Store<Task> {
    pub fn create_task(&mut self, task: Task) -> DomainResult<Task> {
        if task.title.trim().is_empty() {
            return Err(DomainError::Validation("Task title is required".into()));
        }
        let task = self.insert(task)?;
        info!(task_id = %task.id, department = %task.department, "Task created");
        Ok(task)
    }

    pub fn assign(&mut self, id: Uuid, user_id: Option<Uuid>) -> DomainResult<Task> {
        self.update(id, |t| {
            t.assigned_to = user_id;
            Ok(())
        })
    }

    pub fn update_status(&mut self, id: Uuid, status: TaskStatus, now: DateTime<Utc>) -> DomainResult<Task> {
        self.update(id, |t| {
            t.set_status(status, now);
            Ok(())
        })
    }

    pub fn toggle_complete(&mut self, id: Uuid, now: DateTime<Utc>) -> DomainResult<Task> {
        self.update(id, |t| {
            t.toggle_complete(now);
            Ok(())
        })
    }

    pub fn delete_task(&mut self, id: Uuid) -> DomainResult<Task> {
        self.remove(id)
    }

    pub fn for_user(&self, user_id: Uuid) -> Vec<Task> {
        self.filter(|t| t.assigned_to == Some(user_id))
    }

    /// Open tasks for a department, most urgent first.
    pub fn for_department(&self, department: Department) -> Vec<Task> {
        let mut tasks = self.filter(|t| t.department == department && t.status != TaskStatus::Done);
        tasks.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.created_at.cmp(&b.created_at)));
        tasks
    }

    pub fn overdue(&self, now: DateTime<Utc>) -> Vec<Task> {
        self.filter(|t| t.is_overdue(now))
    }
}

// ── Tests ──────────────────────────────────────────────────────
