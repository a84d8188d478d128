//! Infrastructure layer - storage and persistence

pub mod repositories;
pub mod storage;

pub use repositories::{
    AccessGrantStore, BookingStore, ChargeStore, InventoryStore, MessageStore, SecurityLogStore,
    ShiftStore, TaskStore, UserStore,
};
pub use storage::{FileKeyValueStorage, KeyValueStorage, MemoryKeyValueStorage, Store};
