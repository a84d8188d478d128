//! Inventory aggregate

pub mod model;

pub use model::InventoryItem;
