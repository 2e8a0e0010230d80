//! JSON file-backed state store.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use grocer_core::ListState;

use crate::error::StoreError;

/// Persisted document layout: `{"items": {"<aisle>": [item, ...]}}`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StateDocument {
    #[serde(default)]
    items: ListState,
}

/// Storage seam for the list state.
///
/// `load` is infallible by contract: a store that cannot produce a
/// previously saved state hands back an empty one. `save` rewrites the
/// entire state; there are no incremental writes.
pub trait StateStore: Send + Sync {
    fn load(&self) -> ListState;
    fn save(&self, state: &ListState) -> Result<(), StoreError>;
}

/// File-backed store writing one pretty-printed JSON document.
///
/// Saves go through a sibling temp file and a rename, so a concurrent
/// load observes either the old document or the new one, never a
/// partial write.
#[derive(Debug)]
pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut os = self.path.as_os_str().to_os_string();
        os.push(".tmp");
        PathBuf::from(os)
    }
}

impl StateStore for JsonStateStore {
    fn load(&self) -> ListState {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "no state document, starting empty");
                return ListState::new();
            }
        };

        match serde_json::from_str::<StateDocument>(&raw) {
            Ok(doc) => doc.items,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "malformed state document, starting empty");
                ListState::new()
            }
        }
    }

    fn save(&self, state: &ListState) -> Result<(), StoreError> {
        let doc = StateDocument {
            items: state.clone(),
        };
        let raw = serde_json::to_string_pretty(&doc)?;

        let tmp = self.tmp_path();
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), aisles = state.aisle_count(), "state saved");
        Ok(())
    }
}

/// In-memory store for tests and ephemeral runs.
///
/// Round-trips through the same document serialization as the file
/// store so serde bugs still surface.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    raw: Mutex<Option<String>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> ListState {
        let guard = self.raw.lock().unwrap_or_else(|e| e.into_inner());
        guard
            .as_deref()
            .and_then(|raw| serde_json::from_str::<StateDocument>(raw).ok())
            .map(|doc| doc.items)
            .unwrap_or_default()
    }

    fn save(&self, state: &ListState) -> Result<(), StoreError> {
        let doc = StateDocument {
            items: state.clone(),
        };
        let raw = serde_json::to_string(&doc)?;
        *self.raw.lock().unwrap_or_else(|e| e.into_inner()) = Some(raw);
        Ok(())
    }
}
