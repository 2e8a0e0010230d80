//! Request/response DTOs.

use serde::{Deserialize, Serialize};

use grocer_core::ListState;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct UserInput {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct AddRecipeRequest {
    pub recipe_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ItemUpdate {
    pub item_id: String,
    pub checked: bool,
}

#[derive(Debug, Deserialize)]
pub struct AisleQuery {
    pub aisle: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveQuery {
    pub aisle: String,
    pub item_id: String,
}

// -------------------------
// Response DTOs
// -------------------------

/// Reply to `/api/message`: the assistant's text plus the complete
/// current list (never a delta).
#[derive(Debug, Serialize)]
pub struct ProcessMessageResponse {
    pub response: String,
    pub updated_list: ListState,
}
