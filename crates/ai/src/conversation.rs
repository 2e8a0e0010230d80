//! Conversation bookkeeping for the assistant reply.

use std::sync::Arc;

use crate::client::{ChatClient, ChatMessage, ChatRequest};
use crate::error::AiError;

const SYSTEM_PROMPT: &str = "You are a helpful grocery list assistant. Parse user \
input to determine if they want to add items, remove items, or get recipe suggestions.";

/// Holds the running message history and produces the assistant's
/// conversational reply. List mutations happen elsewhere; this agent
/// only talks.
pub struct ConversationManager {
    client: Arc<dyn ChatClient>,
    history: Vec<ChatMessage>,
}

impl ConversationManager {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self {
            client,
            history: Vec::new(),
        }
    }

    /// Record the user message, ask the model for a reply, record and
    /// return it.
    pub async fn process_user_input(&mut self, user_input: &str) -> Result<String, AiError> {
        self.history.push(ChatMessage::user(user_input));

        let mut messages = vec![ChatMessage::system(SYSTEM_PROMPT)];
        messages.extend(self.history.iter().cloned());

        let request = ChatRequest::new(messages)
            .with_temperature(0.7)
            .with_max_tokens(1000);

        let reply = self.client.complete(request).await?;
        self.history.push(ChatMessage::assistant(reply.clone()));
        Ok(reply)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }
}
