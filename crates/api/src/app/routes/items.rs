//! Targeted item mutation routes.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::AisleQuery>,
    Json(body): Json<dto::ItemUpdate>,
) -> axum::response::Response {
    let item_id = match errors::parse_item_id(&body.item_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    tracing::info!(aisle = %query.aisle, item_id = %item_id, checked = body.checked, "updating item");

    let mut list = services.list().await;
    match list.set_checked(&query.aisle, item_id, body.checked) {
        Ok(state) => (StatusCode::OK, Json(state)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn remove_item(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::RemoveQuery>,
) -> axum::response::Response {
    let item_id = match errors::parse_item_id(&query.item_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    tracing::info!(aisle = %query.aisle, item_id = %item_id, "removing item");

    let mut list = services.list().await;
    match list.remove_item(&query.aisle, item_id) {
        Ok(state) => (StatusCode::OK, Json(state)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
