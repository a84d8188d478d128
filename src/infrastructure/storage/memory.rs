//! In-memory storage implementation

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use super::KeyValueStorage;
use crate::domain::{DomainError, DomainResult, Record};
use crate::shared::AppResult;

/// Copy-on-write collection of records.
///
/// Every mutation builds a new vector and swaps it in, so a snapshot
/// handed out earlier never observes a partial update.
#[derive(Debug, Clone)]
pub struct Store<T: Record> {
    items: Arc<Vec<T>>,
}

impl<T: Record> Store<T> {
    pub fn new() -> Self {
        Self {
            items: Arc::new(Vec::new()),
        }
    }

    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn require(&self, id: Uuid) -> DomainResult<&T> {
        self.get(id).ok_or_else(|| DomainError::not_found(T::ENTITY, id))
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.items.iter().filter(|r| predicate(r)).cloned().collect()
    }

    pub fn insert(&mut self, record: T) -> DomainResult<T> {
        if self.get(record.id()).is_some() {
            return Err(DomainError::Conflict(format!(
                "{} {}",
                T::ENTITY,
                record.id()
            )));
        }
        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.extend(self.items.iter().cloned());
        next.push(record.clone());
        self.items = Arc::new(next);
        debug!(entity = T::ENTITY, id = %record.id(), "Record inserted");
        Ok(record)
    }

    /// Apply `change` to a copy of the record and publish a new snapshot.
    /// If `change` fails, the store is left as it was.
    pub fn update<F>(&mut self, id: Uuid, change: F) -> DomainResult<T>
    where
        F: FnOnce(&mut T) -> DomainResult<()>,
    {
        let index = self
            .items
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| DomainError::not_found(T::ENTITY, id))?;

        let mut updated = self.items[index].clone();
        change(&mut updated)?;

        let mut next = self.items.as_ref().clone();
        next[index] = updated.clone();
        self.items = Arc::new(next);
        debug!(entity = T::ENTITY, id = %id, "Record updated");
        Ok(updated)
    }

    pub fn remove(&mut self, id: Uuid) -> DomainResult<T> {
        let removed = self.require(id)?.clone();
        let next: Vec<T> = self.items.iter().filter(|r| r.id() != id).cloned().collect();
        self.items = Arc::new(next);
        debug!(entity = T::ENTITY, id = %id, "Record removed");
        Ok(removed)
    }
}

impl<T: Record> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory key-value storage for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryKeyValueStorage {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryKeyValueStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: Uuid,
        text: String,
    }

    impl Record for Note {
        const ENTITY: &'static str = "Note";

        fn id(&self) -> Uuid {
            self.id
        }
    }

    fn note(text: &str) -> Note {
        Note {
            id: Uuid::new_v4(),
            text: text.to_string(),
        }
    }

    #[test]
    fn snapshots_are_not_affected_by_later_writes() {
        let mut store = Store::new();
        let a = store.insert(note("a")).unwrap();
        let before = store.snapshot();

        store.insert(note("b")).unwrap();
        store
            .update(a.id, |n| {
                n.text = "changed".into();
                Ok(())
            })
            .unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(before[0].text, "a");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(a.id).unwrap().text, "changed");
    }

    #[test]
    fn failed_update_leaves_store_unchanged() {
        let mut store = Store::new();
        let a = store.insert(note("a")).unwrap();
        let before = store.snapshot();

        let result = store.update(a.id, |n| {
            n.text = "half-written".into();
            Err(DomainError::Validation("nope".into()))
        });

        assert!(result.is_err());
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
        assert_eq!(store.get(a.id).unwrap().text, "a");
    }

    #[test]
    fn duplicate_insert_is_a_conflict() {
        let mut store = Store::new();
        let a = store.insert(note("a")).unwrap();
        assert!(matches!(store.insert(a), Err(DomainError::Conflict(_))));
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let mut store: Store<Note> = Store::new();
        let id = Uuid::new_v4();
        assert!(matches!(store.remove(id), Err(DomainError::NotFound { entity: "Note", .. })));
        assert!(store.update(id, |_| Ok(())).is_err());
        assert!(store.require(id).is_err());
    }

    #[test]
    fn remove_returns_record() {
        let mut store = Store::new();
        let a = store.insert(note("a")).unwrap();
        store.insert(note("b")).unwrap();
        assert_eq!(store.remove(a.id).unwrap(), a);
        assert_eq!(store.filter(|n| n.text == "b").len(), 1);
        assert!(store.get(a.id).is_none());
    }

    #[test]
    fn memory_kv_round_trip() {
        let mut kv = MemoryKeyValueStorage::new();
        assert_eq!(kv.get("k").unwrap(), None);
        kv.set("k", "v").unwrap();
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("v"));
        kv.remove("k").unwrap();
        assert_eq!(kv.get("k").unwrap(), None);
    }
}
