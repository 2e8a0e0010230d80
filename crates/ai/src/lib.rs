//! `grocer-ai`
//!
//! **Responsibility:** language-model boundary.
//!
//! This crate turns free text into structured ingredient and recipe
//! records and categorizes ingredients into store aisles. It is
//! intentionally **not** part of the list domain:
//! - It must not mutate list state.
//! - It emits parsed structures only; merging is the core's job.
//! - Model output is decoded fail-closed: anything that does not match
//!   the schema is a [`ParseError`], never a partially-typed record.

pub mod client;
pub mod conversation;
pub mod error;
pub mod organizer;
pub mod parser;
pub mod types;

pub use client::{ChatClient, ChatMessage, ChatRequest, GroqClient, Role};
pub use conversation::ConversationManager;
pub use error::{AiError, ParseError};
pub use organizer::ListOrganizer;
pub use parser::IngredientsParser;
pub use types::{Ingredient, Recipe};
