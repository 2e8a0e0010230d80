//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// Merge, sequencing and mutation are total functions and never return
/// these; the only deterministic domain failure is a bad identifier at
/// the boundary. Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
