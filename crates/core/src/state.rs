//! Ordered list state: aisle name → ordered items.
//!
//! The mapping is held as an insertion-ordered sequence of aisle lists
//! and (de)serializes as a JSON object, so iteration order IS the
//! display and persistence order. The sequencer rewrites that order to
//! the canonical shopping route before every persist.

use std::collections::HashSet;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::id::ItemId;
use crate::item::GroceryItem;
use crate::normalize::identity_key;

/// One named aisle and its ordered items.
///
/// Invariant: never empty once inside a [`ListState`] — an aisle whose
/// last item is removed disappears from the state entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AisleList {
    pub(crate) name: String,
    pub(crate) items: Vec<GroceryItem>,
}

impl AisleList {
    pub fn new(name: impl Into<String>, items: Vec<GroceryItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }
}

/// The whole shopping list, grouped by aisle, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub(crate) aisles: Vec<AisleList>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from pre-grouped aisles, dropping empty ones.
    pub fn from_aisles(aisles: Vec<AisleList>) -> Self {
        Self {
            aisles: aisles.into_iter().filter(|a| !a.items.is_empty()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.aisles.is_empty()
    }

    /// Number of aisles currently present.
    pub fn aisle_count(&self) -> usize {
        self.aisles.len()
    }

    /// Total number of items across all aisles.
    pub fn item_count(&self) -> usize {
        self.aisles.iter().map(|a| a.items.len()).sum()
    }

    pub fn aisles(&self) -> impl Iterator<Item = &AisleList> {
        self.aisles.iter()
    }

    pub fn get(&self, aisle: &str) -> Option<&AisleList> {
        self.aisles.iter().find(|a| a.name == aisle)
    }

    pub fn contains_aisle(&self, aisle: &str) -> bool {
        self.get(aisle).is_some()
    }

    /// All items across all aisles, in display order.
    pub fn items(&self) -> impl Iterator<Item = &GroceryItem> {
        self.aisles.iter().flat_map(|a| a.items.iter())
    }

    pub fn find_item(&self, id: ItemId) -> Option<&GroceryItem> {
        self.items().find(|item| item.id == id)
    }

    /// Identity keys of every item currently on the list.
    pub fn identity_keys(&self) -> HashSet<String> {
        self.items().map(|item| identity_key(&item.name)).collect()
    }

    /// Append an item to the aisle named by its own `aisle` field,
    /// creating that aisle at the end of the current order if absent.
    pub fn push_item(&mut self, item: GroceryItem) {
        match self.aisles.iter_mut().find(|a| a.name == item.aisle) {
            Some(aisle) => aisle.items.push(item),
            None => self.aisles.push(AisleList {
                name: item.aisle.clone(),
                items: vec![item],
            }),
        }
    }
}

impl Serialize for ListState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.aisles.len()))?;
        for aisle in &self.aisles {
            map.serialize_entry(&aisle.name, &aisle.items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ListState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StateVisitor;

        impl<'de> Visitor<'de> for StateVisitor {
            type Value = ListState;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("a map of aisle name to item list")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut aisles = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, items)) =
                    access.next_entry::<String, Vec<GroceryItem>>()?
                {
                    // Empty aisles are never persisted; tolerate them in
                    // hand-edited documents by dropping them on load.
                    if !items.is_empty() {
                        aisles.push(AisleList { name, items });
                    }
                }
                Ok(ListState { aisles })
            }
        }

        deserializer.deserialize_map(StateVisitor)
    }
}
