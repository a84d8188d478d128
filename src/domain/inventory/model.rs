//! Inventory item entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::financial::Money;
use crate::domain::repositories::Record;
use crate::domain::user::Department;
use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub department: Department,
    pub quantity: u32,
    pub reorder_level: u32,
    pub unit: String,
    pub unit_cost: Money,
}

impl InventoryItem {
    pub fn new(
        name: impl Into<String>,
        department: Department,
        quantity: u32,
        reorder_level: u32,
        unit_cost: Money,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            department,
            quantity,
            reorder_level,
            unit: "pcs".to_string(),
            unit_cost,
        }
    }

    /// Add or remove stock; the count never goes below zero.
    pub fn adjust(&mut self, delta: i64) -> DomainResult<()> {
        let next = i64::from(self.quantity)
            .checked_add(delta)
            .ok_or_else(|| DomainError::Validation(format!("{}: quantity overflow", self.name)))?;
        if next < 0 {
            return Err(DomainError::Validation(format!(
                "{}: cannot remove {} with only {} in stock",
                self.name,
                delta.unsigned_abs(),
                self.quantity
            )));
        }
        self.quantity = u32::try_from(next)
            .map_err(|_| DomainError::Validation(format!("{}: quantity overflow", self.name)))?;
        Ok(())
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_level
    }
}

impl Record for InventoryItem {
    const ENTITY: &'static str = "InventoryItem";

    fn id(&self) -> Uuid {
        self.id
    }
}

// ── Tests ──────────────────────────────────────────────────────
