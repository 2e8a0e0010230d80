//! Structured records exchanged with the language model.

use serde::{Deserialize, Serialize};

/// One parsed ingredient mention.
///
/// `aisle` is unset until the categorization step assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
    #[serde(default)]
    pub quantity_unit: Option<String>,
    #[serde(default)]
    pub aisle: Option<String>,
}

/// A recipe with its required ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Option<Vec<String>>,
}
