//! Aisle categorization agent.

use std::sync::Arc;

use serde::Deserialize;

use grocer_core::{GroceryItem, ItemId, CANONICAL_AISLES};

use crate::client::{ChatClient, ChatMessage, ChatRequest};
use crate::error::{AiError, ParseError};
use crate::types::Ingredient;

const SYSTEM_PROMPT: &str = "You are a grocery store expert that can:\n\
1. Categorize items into appropriate store aisles\n\
2. Organize shopping lists efficiently\n\
Output must be valid JSON matching the provided schema.";

/// Model-returned item before an id is guaranteed.
///
/// The model occasionally echoes ids back; when it does not, a fresh
/// one is assigned here — exactly once, at creation.
#[derive(Debug, Deserialize)]
struct CategorizedItem {
    #[serde(default)]
    id: Option<ItemId>,
    name: String,
    aisle: String,
    #[serde(default)]
    quantity: Option<String>,
    #[serde(default)]
    quantity_unit: Option<String>,
    #[serde(default)]
    checked: bool,
}

impl From<CategorizedItem> for GroceryItem {
    fn from(raw: CategorizedItem) -> Self {
        Self {
            id: raw.id.unwrap_or_default(),
            name: raw.name,
            aisle: raw.aisle,
            quantity: raw.quantity,
            quantity_unit: raw.quantity_unit,
            checked: raw.checked,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ItemsEnvelope {
    items: Vec<CategorizedItem>,
}

/// Assigns store aisles to parsed ingredients.
#[derive(Clone)]
pub struct ListOrganizer {
    client: Arc<dyn ChatClient>,
}

impl ListOrganizer {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    /// Categorize ingredients into grocery items with aisles assigned.
    ///
    /// An empty input short-circuits without a model call.
    pub async fn categorize(&self, ingredients: &[Ingredient]) -> Result<Vec<GroceryItem>, AiError> {
        if ingredients.is_empty() {
            return Ok(Vec::new());
        }

        let system = format!(
            "{SYSTEM_PROMPT}\nAvailable aisles: {}",
            CANONICAL_AISLES.join(", ")
        );
        let prompt = format!(
            "Categorize these items into appropriate aisles: {}. Return a JSON object \
             {{\"items\": [{{\"name\": str, \"aisle\": str, \"quantity\": str|null, \
             \"quantity_unit\": str|null, \"checked\": bool}}]}}.",
            serde_json::to_string(ingredients).map_err(ParseError::from)?
        );

        let request = ChatRequest::new(vec![
            ChatMessage::system(system),
            ChatMessage::user(prompt),
        ])
        .with_temperature(0.3)
        .expecting_json();

        let reply = self.client.complete(request).await?;
        let envelope: ItemsEnvelope = serde_json::from_str(&reply).map_err(ParseError::from)?;

        tracing::debug!(count = envelope.items.len(), "categorized items");
        Ok(envelope.items.into_iter().map(GroceryItem::from).collect())
    }
}
