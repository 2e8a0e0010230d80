//! The list service: state handle threading and persistence discipline.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use grocer_ai::{AiError, ChatClient, ConversationManager, IngredientsParser, ListOrganizer};
use grocer_core::{merge, remove, set_checked, GroceryItem, ItemId, ListState};
use grocer_store::{StateStore, StoreError};

/// Failure of one service operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ai(#[from] AiError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Owns the list state and every collaborator that touches it.
///
/// The state is loaded once at construction and threaded explicitly
/// through each operation; there is no hidden global. Every operation
/// that changed the state persists it before returning.
pub struct ListService {
    store: Box<dyn StateStore>,
    state: ListState,
    parser: IngredientsParser,
    organizer: ListOrganizer,
    conversation: ConversationManager,
}

impl ListService {
    pub fn new(store: Box<dyn StateStore>, client: Arc<dyn ChatClient>) -> Self {
        let state = store.load();
        tracing::info!(
            aisles = state.aisle_count(),
            items = state.item_count(),
            "list state loaded"
        );
        Self {
            store,
            state,
            parser: IngredientsParser::new(client.clone()),
            organizer: ListOrganizer::new(client.clone()),
            conversation: ConversationManager::new(client),
        }
    }

    /// The complete current list.
    pub fn current(&self) -> ListState {
        self.state.clone()
    }

    /// Conversational ingestion: reply to the user, parse ingredient
    /// mentions, categorize them, and merge preserving existing items.
    ///
    /// A parse or categorization failure aborts the whole step; nothing
    /// is merged from a half-failed parse.
    pub async fn process_message(
        &mut self,
        message: &str,
    ) -> Result<(String, ListState), ServiceError> {
        let reply = self.conversation.process_user_input(message).await?;
        let ingredients = self.parser.parse_items(message).await?;
        let items = self.organizer.categorize(&ingredients).await?;

        self.merge_and_save(items, true)?;
        Ok((reply, self.current()))
    }

    /// Resolve a meal name into ingredients and merge them in,
    /// preserving existing items.
    pub async fn add_recipe(&mut self, recipe_name: &str) -> Result<ListState, ServiceError> {
        let recipe = self.parser.recipe_ingredients(recipe_name).await?;
        tracing::info!(recipe = %recipe.name, ingredients = recipe.ingredients.len(), "recipe resolved");

        let items = self.organizer.categorize(&recipe.ingredients).await?;
        self.merge_and_save(items, true)?;
        Ok(self.current())
    }

    /// Check or uncheck one item by id. Missing aisle or id is a
    /// silent no-op; persists only when the state actually changed.
    pub fn set_checked(
        &mut self,
        aisle: &str,
        item_id: ItemId,
        checked: bool,
    ) -> Result<ListState, ServiceError> {
        let next = set_checked(self.state.clone(), aisle, item_id, checked);
        self.persist_if_changed(next)?;
        Ok(self.current())
    }

    /// Remove one item by id, dropping its aisle when it empties.
    /// Missing aisle or id is a silent no-op.
    pub fn remove_item(&mut self, aisle: &str, item_id: ItemId) -> Result<ListState, ServiceError> {
        let next = remove(self.state.clone(), aisle, item_id);
        self.persist_if_changed(next)?;
        Ok(self.current())
    }

    /// Merge a categorized batch and persist. Every merge implies a
    /// save: the save must complete before the next mutation starts.
    fn merge_and_save(
        &mut self,
        items: Vec<GroceryItem>,
        preserve_existing: bool,
    ) -> Result<(), ServiceError> {
        let next = merge(&self.state, items, preserve_existing);
        self.store.save(&next)?;
        self.state = next;
        Ok(())
    }

    fn persist_if_changed(&mut self, next: ListState) -> Result<(), ServiceError> {
        if next != self.state {
            self.store.save(&next)?;
            self.state = next;
        }
        Ok(())
    }
}

/// Application services shared across handlers.
///
/// One mutex guards the whole service, so each load-merge-save cycle
/// (including the model calls feeding it) runs as a critical section.
/// Concurrent requests queue behind each other; last-save-wins races
/// cannot occur within the process.
pub struct AppServices {
    list: Mutex<ListService>,
}

impl AppServices {
    pub fn new(store: Box<dyn StateStore>, client: Arc<dyn ChatClient>) -> Self {
        Self {
            list: Mutex::new(ListService::new(store, client)),
        }
    }

    pub async fn list(&self) -> tokio::sync::MutexGuard<'_, ListService> {
        self.list.lock().await
    }
}
