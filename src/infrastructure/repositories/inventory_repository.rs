use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{Department, DomainResult, InventoryItem};
use crate::infrastructure::storage::Store;

pub type InventoryStore = Store<InventoryItem>;

impl Store<InventoryItem> {
    pub fn add_item(&mut self, item: InventoryItem) -> DomainResult<InventoryItem> {
        let item = self.insert(item)?;
        info!(item_id = %item.id, name = %item.name, "Inventory item added");
        Ok(item)
    }

    pub fn adjust_quantity(&mut self, id: Uuid, delta: i64) -> DomainResult<InventoryItem> {
        let item = self.update(id, |item| item.adjust(delta))?;
        if item.is_low_stock() {
            warn!(item = %item.name, quantity = item.quantity, reorder_level = item.reorder_level, "Stock below reorder level");
        }
        Ok(item)
    }

    pub fn low_stock(&self) -> Vec<InventoryItem> {
        self.filter(InventoryItem::is_low_stock)
    }

    pub fn by_department(&self, department: Department) -> Vec<InventoryItem> {
        let mut items = self.filter(|i| i.department == department);
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, Money};
    use rust_decimal::Decimal;

    fn item(name: &str, qty: u32, reorder: u32) -> InventoryItem {
        InventoryItem::new(name, Department::Housekeeping, qty, reorder, Money::new(Decimal::new(250, 2), "USD"))
    }

    #[test]
    fn adjust_and_low_stock() {
        let mut store = InventoryStore::new();
        let soap = store.add_item(item("Soap", 20, 5)).unwrap();
        store.add_item(item("Towels", 3, 10)).unwrap();

        assert_eq!(store.low_stock().len(), 1);
        store.adjust_quantity(soap.id, -15).unwrap();
        assert_eq!(store.low_stock().len(), 2);
        assert_eq!(store.get(soap.id).unwrap().quantity, 5);
    }

    #[test]
    fn overdrawn_stock_is_rejected_and_unchanged() {
        let mut store = InventoryStore::new();
        let soap = store.add_item(item("Soap", 2, 5)).unwrap();
        let err = store.adjust_quantity(soap.id, -3).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(store.get(soap.id).unwrap().quantity, 2);
    }

    #[test]
    fn department_listing_sorted() {
        let mut store = InventoryStore::new();
        store.add_item(item("Towels", 3, 10)).unwrap();
        store.add_item(item("Bath mats", 30, 10)).unwrap();
        let names: Vec<_> = store
            .by_department(Department::Housekeeping)
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Bath mats", "Towels"]);
        assert!(store.by_department(Department::Banquet).is_empty());
    }
}
