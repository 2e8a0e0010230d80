//! Consistent JSON error responses.
//!
//! Each error class maps to its own code; the boundary never collapses
//! the taxonomy into a single catch-all.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use grocer_ai::AiError;
use grocer_core::ItemId;

use crate::app::services::ServiceError;

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Ai(AiError::Parse(e)) => {
            json_error(StatusCode::BAD_GATEWAY, "parse_error", e.to_string())
        }
        ServiceError::Ai(e) => json_error(StatusCode::BAD_GATEWAY, "ai_error", e.to_string()),
        // A failed save is durability loss; surface it loudly.
        ServiceError::Store(e) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_item_id(s: &str) -> Result<ItemId, axum::response::Response> {
    s.parse()
        .map_err(|_| json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid item id"))
}
