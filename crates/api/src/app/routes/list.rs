//! Ingestion routes: free-text messages and recipes.

use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub async fn process_message(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::UserInput>,
) -> axum::response::Response {
    tracing::info!(message = %body.message, "processing message");

    let mut list = services.list().await;
    match list.process_message(&body.message).await {
        Ok((response, updated_list)) => (
            StatusCode::OK,
            Json(dto::ProcessMessageResponse {
                response,
                updated_list,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "message ingestion failed");
            errors::service_error_to_response(e)
        }
    }
}

pub async fn add_recipe(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::AddRecipeRequest>,
) -> axum::response::Response {
    tracing::info!(recipe = %body.recipe_name, "adding recipe");

    let mut list = services.list().await;
    match list.add_recipe(&body.recipe_name).await {
        Ok(state) => (StatusCode::OK, Json(state)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "recipe ingestion failed");
            errors::service_error_to_response(e)
        }
    }
}

pub async fn get_list(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let list = services.list().await;
    (StatusCode::OK, Json(list.current())).into_response()
}
