//! Grocery item record.

use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// A single entry on the shopping list.
///
/// `name` is the dedup key (case-insensitive, see [`crate::normalize`]);
/// `id` is the mutation key. Within one list no two items may share a
/// case-insensitive name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: ItemId,
    pub name: String,
    /// Store section this item belongs to. One of the canonical aisles
    /// when the categorizer recognizes it, otherwise arbitrary.
    pub aisle: String,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub quantity_unit: Option<String>,
    #[serde(default)]
    pub checked: bool,
}

impl GroceryItem {
    /// Create an unchecked item with a freshly assigned id.
    pub fn new(name: impl Into<String>, aisle: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            aisle: aisle.into(),
            quantity: None,
            quantity_unit: None,
            checked: false,
        }
    }

    pub fn with_quantity(
        mut self,
        quantity: impl Into<String>,
        unit: Option<impl Into<String>>,
    ) -> Self {
        self.quantity = Some(quantity.into());
        self.quantity_unit = unit.map(Into::into);
        self
    }

    /// True when the record is complete enough to merge: both name and
    /// aisle are non-blank after trimming.
    pub fn is_well_formed(&self) -> bool {
        !self.name.trim().is_empty() && !self.aisle.trim().is_empty()
    }
}
