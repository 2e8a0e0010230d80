//! Persistence error model.

use thiserror::Error;

/// Failure while persisting the state document.
///
/// Load paths never produce these: a missing or unreadable document
/// loads as an empty state. Save paths must propagate them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write state document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize state document: {0}")]
    Serialize(#[from] serde_json::Error),
}
