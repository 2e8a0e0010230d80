use std::sync::Arc;

use anyhow::Context;

use grocer_ai::GroqClient;
use grocer_api::app::{build_app, AppServices};
use grocer_store::JsonStateStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    grocer_observability::init();

    let api_key = std::env::var("GROQ_API_KEY")
        .context("GROQ_API_KEY must be set to reach the chat-completions API")?;

    let state_file =
        std::env::var("GROCER_STATE_FILE").unwrap_or_else(|_| "state.json".to_string());
    let addr = std::env::var("GROCER_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    let client = Arc::new(GroqClient::new(api_key));
    let store = Box::new(JsonStateStore::new(&state_file));
    let services = Arc::new(AppServices::new(store, client));

    let app = build_app(services);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(addr = %listener.local_addr()?, state_file = %state_file, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
