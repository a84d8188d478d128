//! Storage trait definitions

use crate::shared::AppResult;

/// Key under which the branding configuration is persisted
pub const STORAGE_KEY_BRANDING: &str = "hotel_branding";
/// Key under which the authenticated user id is persisted
pub const STORAGE_KEY_CURRENT_USER: &str = "hotel_current_user";

/// Client-local key-value storage. Values are opaque serialized snapshots.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}
