//! Per-aggregate queries and mutations over [`Store`](super::storage::Store)

mod booking_repository;
mod charge_repository;
mod inventory_repository;
mod message_repository;
mod security_repository;
mod shift_repository;
mod task_repository;
mod user_repository;

pub use booking_repository::BookingStore;
pub use charge_repository::ChargeStore;
pub use inventory_repository::InventoryStore;
pub use message_repository::MessageStore;
pub use security_repository::{AccessGrantStore, SecurityLogStore};
pub use shift_repository::ShiftStore;
pub use task_repository::TaskStore;
pub use user_repository::UserStore;
