use axum::{
    routing::{get, post},
    Router,
};

pub mod items;
pub mod list;
pub mod system;

/// Router for the `/api` surface.
pub fn router() -> Router {
    Router::new()
        .route("/message", post(list::process_message))
        .route("/recipe", post(list::add_recipe))
        .route("/list", get(list::get_list))
        .route("/item/update", post(items::update_item))
        .route("/item/remove", post(items::remove_item))
}
