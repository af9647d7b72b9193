//! Inventory Operations
//!
//! Quantity adjustments never block on low stock; they report it.

use crate::clock::Clock;
use crate::domain::{DomainError, DomainResult, InventoryForm, InventoryItem, InventoryPatch};
use crate::repository::KeyValueStore;
use crate::views;

use super::list::{ListController, Placement, Record};

impl Record for InventoryItem {
    type Form = InventoryForm;
    type Patch = InventoryPatch;

    const PLACEMENT: Placement = Placement::Append;

    fn validate(form: &InventoryForm) -> DomainResult<()> {
        form.validate()
    }

    fn build(id: String, clock: &dyn Clock, form: &InventoryForm, _position: u32) -> DomainResult<Self> {
        InventoryItem::create(id, clock.now(), form)
    }

    fn apply(&mut self, patch: &InventoryPatch) -> DomainResult<()> {
        InventoryItem::apply(self, patch)
    }
}

/// Result of a quantity adjustment
#[derive(Debug, Clone, PartialEq)]
pub struct StockAdjustment {
    pub item: InventoryItem,
    /// The item is at or below its minimum after the change
    pub low_stock: bool,
}

pub trait InventoryOperations {
    /// `quantity := max(0, quantity + delta)`
    fn adjust_quantity(&mut self, id: &str, delta: i64) -> DomainResult<StockAdjustment>;

    /// Replace every editable field from the edit form
    fn edit(&mut self, id: &str, form: &InventoryForm) -> DomainResult<InventoryItem>;

    fn low_stock_count(&self) -> usize;
}

impl<S: KeyValueStore> InventoryOperations for ListController<InventoryItem, S> {
    fn adjust_quantity(&mut self, id: &str, delta: i64) -> DomainResult<StockAdjustment> {
        let item = self.list_mut().mutate(|items| {
            let item = items
                .iter_mut()
                .find(|i| i.id == id)
                .ok_or_else(|| DomainError::not_found(id))?;
            item.adjust(delta);
            Ok(item.clone())
        })?;

        let low_stock = item.is_low_stock();
        if low_stock {
            log::warn!("[{}] low stock: {} ({} <= {})", self.key(), item.name, item.quantity, item.min_quantity);
        }
        Ok(StockAdjustment { item, low_stock })
    }

    fn edit(&mut self, id: &str, form: &InventoryForm) -> DomainResult<InventoryItem> {
        form.validate()?;
        self.update(id, &InventoryPatch::from(form))
    }

    fn low_stock_count(&self) -> usize {
        views::low_stock_count(self.items())
    }
}
