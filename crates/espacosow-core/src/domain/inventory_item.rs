//! Inventory Item
//!
//! A stocked product with a current quantity and an optional minimum.
//! Quantities are never negative.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{parse_count, require, DomainResult, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "quantidade", default)]
    pub quantity: i64,
    /// Threshold for the low-stock warning; 0 disables it
    #[serde(rename = "quantidadeMinima", default)]
    pub min_quantity: i64,
    #[serde(rename = "criadoEm")]
    pub created_at: DateTime<Utc>,
}

/// Raw form input. Quantities are kept as typed and parsed leniently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryForm {
    pub name: String,
    pub quantity: String,
    pub min_quantity: String,
}

impl InventoryForm {
    pub fn validate(&self) -> DomainResult<()> {
        require("name", &self.name).map(|_| ())
    }

    /// Pre-fill the edit form from an existing item
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
            min_quantity: item.min_quantity.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryPatch {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub min_quantity: Option<i64>,
}

impl From<&InventoryForm> for InventoryPatch {
    fn from(form: &InventoryForm) -> Self {
        Self {
            name: Some(form.name.clone()),
            quantity: Some(parse_count(&form.quantity)),
            min_quantity: Some(parse_count(&form.min_quantity)),
        }
    }
}

impl InventoryItem {
    pub fn create(id: String, created_at: DateTime<Utc>, form: &InventoryForm) -> DomainResult<Self> {
        Ok(Self {
            id,
            name: require("name", &form.name)?,
            quantity: parse_count(&form.quantity),
            min_quantity: parse_count(&form.min_quantity),
            created_at,
        })
    }

    pub fn apply(&mut self, patch: &InventoryPatch) -> DomainResult<()> {
        if let Some(name) = &patch.name {
            self.name = require("name", name)?;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity.max(0);
        }
        if let Some(min_quantity) = patch.min_quantity {
            self.min_quantity = min_quantity.max(0);
        }
        Ok(())
    }

    /// Add `delta` to the quantity, flooring at zero
    pub fn adjust(&mut self, delta: i64) {
        self.quantity = self.quantity.saturating_add(delta).max(0);
    }

    /// At or below the minimum, when a minimum is set
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_quantity && self.min_quantity > 0
    }
}

impl Entity for InventoryItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i64, min_quantity: i64) -> InventoryItem {
        InventoryItem {
            id: "1".to_string(),
            name: "Shampoo".to_string(),
            quantity,
            min_quantity,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_low_stock_predicate() {
        assert!(item(2, 3).is_low_stock());
        assert!(item(3, 3).is_low_stock());
        assert!(!item(4, 3).is_low_stock());
        assert!(!item(0, 0).is_low_stock());
    }

    #[test]
    fn test_adjust_floors_at_zero() {
        let mut shampoo = item(2, 0);
        shampoo.adjust(-5);
        assert_eq!(shampoo.quantity, 0);
        shampoo.adjust(3);
        assert_eq!(shampoo.quantity, 3);
    }

    #[test]
    fn test_numeric_fields_never_reject() {
        let form = InventoryForm {
            name: "Condicionador".to_string(),
            quantity: "".to_string(),
            min_quantity: "dois".to_string(),
        };
        let created = InventoryItem::create("1".to_string(), Utc::now(), &form).unwrap();
        assert_eq!(created.quantity, 0);
        assert_eq!(created.min_quantity, 0);
    }

    #[test]
    fn test_edit_form_round_trip() {
        let shampoo = item(5, 2);
        let patch = InventoryPatch::from(&InventoryForm::from_item(&shampoo));
        let mut copy = shampoo.clone();
        copy.apply(&patch).unwrap();
        assert_eq!(copy, shampoo);
    }
}
