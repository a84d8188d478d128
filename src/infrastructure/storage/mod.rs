//! Storage traits and implementations

mod file;
mod memory;
mod traits;

pub use file::{default_storage_dir, FileKeyValueStorage};
pub use memory::{MemoryKeyValueStorage, Store};
pub use traits::{KeyValueStorage, STORAGE_KEY_BRANDING, STORAGE_KEY_CURRENT_USER};
