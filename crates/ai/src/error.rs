//! Errors at the language-model boundary.

use thiserror::Error;

/// The collaborator's output could not be interpreted as the expected
/// structure. Decoding fails closed: a record missing a required field
/// is rejected wholesale, never admitted half-typed.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("model output is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("model output did not match the expected schema: {0}")]
    Schema(String),
}

impl ParseError {
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }
}

/// Failure of the whole ingestion step at the model boundary.
///
/// Any of these aborts the request before the merge runs; there is no
/// partial merge of a half-failed parse.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("chat request failed: {0}")]
    Transport(String),

    #[error("chat API returned status {0}: {1}")]
    Api(u16, String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
