//! Ingredient and recipe parsing agent.

use std::sync::Arc;

use serde::Deserialize;

use crate::client::{ChatClient, ChatMessage, ChatRequest};
use crate::error::{AiError, ParseError};
use crate::types::{Ingredient, Recipe};

const SYSTEM_PROMPT: &str = "You are a helpful cooking assistant that can:\n\
1. Parse meal names into required ingredients\n\
2. Suggest recipes based on available ingredients\n\
3. Parse natural language into structured ingredient data\n\
Output must be valid JSON matching the provided schema.";

#[derive(Debug, Deserialize)]
struct IngredientsEnvelope {
    ingredients: Vec<Ingredient>,
}

#[derive(Debug, Deserialize)]
struct RecipesEnvelope {
    recipes: Vec<Recipe>,
}

/// Turns free text and meal names into structured records.
#[derive(Clone)]
pub struct IngredientsParser {
    client: Arc<dyn ChatClient>,
}

impl IngredientsParser {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    fn request(&self, prompt: String) -> ChatRequest {
        ChatRequest::new(vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ])
        .with_temperature(0.7)
        .expecting_json()
    }

    /// Parse natural-language text into ingredient mentions.
    ///
    /// Text with no ingredients decodes as an empty list, which is not
    /// an error: the caller simply has nothing to merge.
    pub async fn parse_items(&self, text: &str) -> Result<Vec<Ingredient>, AiError> {
        let prompt = format!(
            "Parse this text into a list of ingredients: {text}. Return a JSON object \
             {{\"ingredients\": [{{\"name\": str, \"quantity\": str, \
             \"quantity_unit\": str|null, \"aisle\": str|null}}]}}."
        );

        let reply = self.client.complete(self.request(prompt)).await?;
        let envelope: IngredientsEnvelope =
            serde_json::from_str(&reply).map_err(ParseError::from)?;

        tracing::debug!(count = envelope.ingredients.len(), "parsed ingredient mentions");
        Ok(envelope.ingredients)
    }

    /// Convert a meal name into a recipe with its required ingredients.
    pub async fn recipe_ingredients(&self, meal_name: &str) -> Result<Recipe, AiError> {
        let prompt = format!(
            "List ingredients and basic instructions for {meal_name}. Return a JSON object \
             {{\"name\": str, \"ingredients\": [{{\"name\": str, \"quantity\": str, \
             \"quantity_unit\": str|null, \"aisle\": str|null}}], \
             \"instructions\": [str]|null}}."
        );

        let reply = self.client.complete(self.request(prompt)).await?;
        let recipe: Recipe = serde_json::from_str(&reply).map_err(ParseError::from)?;

        if recipe.ingredients.is_empty() {
            return Err(ParseError::schema(format!(
                "recipe for {meal_name:?} came back without ingredients"
            ))
            .into());
        }

        Ok(recipe)
    }

    /// Suggest recipes using some or all of the given ingredients.
    pub async fn suggest_recipes(&self, ingredients: &[String]) -> Result<Vec<Recipe>, AiError> {
        let prompt = format!(
            "Suggest 3 possible recipes using some or all of these ingredients: {}. \
             Return a JSON object {{\"recipes\": [...]}} where each recipe has \
             \"name\", \"ingredients\" and optional \"instructions\".",
            ingredients.join(", ")
        );

        let reply = self.client.complete(self.request(prompt)).await?;
        let envelope: RecipesEnvelope = serde_json::from_str(&reply).map_err(ParseError::from)?;
        Ok(envelope.recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct ScriptedClient {
        reply: String,
    }

    #[async_trait]
    impl ChatClient for ScriptedClient {
        async fn complete(&self, _request: ChatRequest) -> Result<String, AiError> {
            Ok(self.reply.clone())
        }
    }

    fn parser_with(reply: &str) -> IngredientsParser {
        IngredientsParser::new(Arc::new(ScriptedClient {
            reply: reply.to_string(),
        }))
    }

    #[tokio::test]
    async fn parse_items_decodes_an_ingredient_envelope() {
        let parser = parser_with(
            r#"{"ingredients": [{"name": "milk", "quantity": "1", "quantity_unit": "gallon"}]}"#,
        );

        let parsed = parser.parse_items("we need a gallon of milk").await.unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "milk");
        assert_eq!(parsed[0].aisle, None);
    }

    #[tokio::test]
    async fn parse_items_fails_closed_on_malformed_output() {
        let parser = parser_with(r#"{"ingredients": [{"quantity": "1"}]}"#);
        let err = parser.parse_items("anything").await.unwrap_err();
        assert!(matches!(err, AiError::Parse(ParseError::Json(_))));
    }

    #[tokio::test]
    async fn parse_items_fails_closed_on_non_json_output() {
        let parser = parser_with("Sure! You need milk and eggs.");
        let err = parser.parse_items("anything").await.unwrap_err();
        assert!(matches!(err, AiError::Parse(_)));
    }

    #[tokio::test]
    async fn recipe_without_ingredients_is_rejected() {
        let parser = parser_with(r#"{"name": "Air soup", "ingredients": []}"#);
        let err = parser.recipe_ingredients("air soup").await.unwrap_err();
        assert!(matches!(err, AiError::Parse(ParseError::Schema(_))));
    }

    #[tokio::test]
    async fn suggest_recipes_decodes_the_recipes_envelope() {
        let parser = parser_with(
            r#"{"recipes": [{"name": "Omelette", "ingredients": [{"name": "eggs", "quantity": "3"}]}]}"#,
        );

        let recipes = parser
            .suggest_recipes(&["eggs".to_string()])
            .await
            .unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Omelette");
    }
}
