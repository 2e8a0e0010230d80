use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;

use grocer_ai::{AiError, ChatClient, ChatRequest};
use grocer_api::app::{build_app, AppServices};
use grocer_store::MemoryStateStore;

/// Scripted stand-in for the chat-completions API.
///
/// Distinguishes the agent prompts by their leading text, the same way
/// the agents construct them.
struct StubChat;

#[async_trait]
impl ChatClient for StubChat {
    async fn complete(&self, request: ChatRequest) -> Result<String, AiError> {
        if !request.json_response {
            // The conversational turn.
            return Ok("Sure, I've added those to your list.".to_string());
        }

        let prompt = request.messages.last().unwrap().content.clone();
        if prompt.starts_with("Parse this text") {
            Ok(json!({
                "ingredients": [
                    {"name": "Eggs", "quantity": "12"},
                    {"name": "Bread", "quantity": "1", "quantity_unit": "loaf"},
                ]
            })
            .to_string())
        } else if prompt.starts_with("List ingredients") {
            Ok(json!({
                "name": "Omelette",
                "ingredients": [
                    {"name": "Eggs", "quantity": "3"},
                    {"name": "Butter", "quantity": "1", "quantity_unit": "tbsp"},
                ],
                "instructions": ["Whisk", "Fry"],
            })
            .to_string())
        } else if prompt.starts_with("Categorize") {
            // Echo back aisle assignments for whichever batch came in.
            let mut items = Vec::new();
            if prompt.contains("Eggs") {
                items.push(json!({"name": "Eggs", "aisle": "Dairy", "quantity": "12"}));
            }
            if prompt.contains("Bread") {
                items.push(json!({"name": "Bread", "aisle": "Pantry", "quantity": "1"}));
            }
            if prompt.contains("Butter") {
                items.push(json!({"name": "Butter", "aisle": "Dairy", "quantity": "1"}));
            }
            Ok(json!({ "items": items }).to_string())
        } else {
            Err(AiError::Transport(format!("unexpected prompt: {prompt}")))
        }
    }
}

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, but with an in-memory store, a stubbed
        // chat client, and an ephemeral port.
        let services = Arc::new(AppServices::new(
            Box::new(MemoryStateStore::new()),
            Arc::new(StubChat),
        ));
        let app = build_app(services);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_endpoint_answers() {
    let server = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", server.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn message_ingestion_returns_the_merged_list_in_canonical_order() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/message", server.base_url))
        .json(&json!({"message": "we need a dozen eggs and a loaf of bread"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let raw = res.text().await.unwrap();
    let body: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(body["response"], "Sure, I've added those to your list.");
    assert_eq!(body["updated_list"]["Dairy"][0]["name"], "Eggs");
    assert_eq!(body["updated_list"]["Pantry"][0]["name"], "Bread");

    // Canonical route: Dairy serializes before Pantry.
    assert!(raw.find("Dairy").unwrap() < raw.find("Pantry").unwrap());

    // Fresh, distinct ids.
    assert_ne!(
        body["updated_list"]["Dairy"][0]["id"],
        body["updated_list"]["Pantry"][0]["id"]
    );
}

#[tokio::test]
async fn repeated_messages_do_not_duplicate_items() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        client
            .post(format!("{}/api/message", server.base_url))
            .json(&json!({"message": "eggs and bread"}))
            .send()
            .await
            .unwrap();
    }

    let list: serde_json::Value = client
        .get(format!("{}/api/list", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(list["Dairy"].as_array().unwrap().len(), 1);
    assert_eq!(list["Pantry"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn recipe_ingestion_merges_without_duplicating_existing_items() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{}/api/message", server.base_url))
        .json(&json!({"message": "eggs and bread"}))
        .send()
        .await
        .unwrap();

    let list: serde_json::Value = client
        .post(format!("{}/api/recipe", server.base_url))
        .json(&json!({"recipe_name": "omelette"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Eggs already on the list: preserved, not duplicated. Butter is new.
    let dairy = list["Dairy"].as_array().unwrap();
    let names: Vec<_> = dairy.iter().map(|i| i["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Eggs", "Butter"]);
}

#[tokio::test]
async fn update_and_remove_operate_by_id() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .post(format!("{}/api/message", server.base_url))
        .json(&json!({"message": "eggs and bread"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let eggs_id = body["updated_list"]["Dairy"][0]["id"].as_str().unwrap().to_string();
    let bread_id = body["updated_list"]["Pantry"][0]["id"].as_str().unwrap().to_string();

    let updated: serde_json::Value = client
        .post(format!("{}/api/item/update?aisle=Dairy", server.base_url))
        .json(&json!({"item_id": eggs_id, "checked": true}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["Dairy"][0]["checked"], true);

    let removed: serde_json::Value = client
        .post(format!(
            "{}/api/item/remove?aisle=Pantry&item_id={bread_id}",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Last Pantry item gone: the aisle key disappears entirely.
    assert!(removed.get("Pantry").is_none());
    assert!(removed.get("Dairy").is_some());
}

#[tokio::test]
async fn mutating_a_missing_aisle_is_a_silent_no_op() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{}/api/message", server.base_url))
        .json(&json!({"message": "eggs and bread"}))
        .send()
        .await
        .unwrap();

    let res = client
        .post(format!("{}/api/item/update?aisle=Frozen", server.base_url))
        .json(&json!({
            "item_id": uuid_string(),
            "checked": true,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let list: serde_json::Value = res.json().await.unwrap();
    assert_eq!(list["Dairy"].as_array().unwrap().len(), 1);
    assert!(list.get("Frozen").is_none());
}

#[tokio::test]
async fn malformed_item_id_is_a_bad_request() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/item/update?aisle=Dairy", server.base_url))
        .json(&json!({"item_id": "not-a-uuid", "checked": true}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_id");
}

fn uuid_string() -> String {
    // Well-formed but unknown id.
    "0191b3a0-0000-7000-8000-000000000000".to_string()
}
