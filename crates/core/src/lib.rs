//! `grocer-core` — list-state reconciliation engine.
//!
//! This crate contains **pure domain** logic (no IO, no network):
//! the grocery item model, the ordered list state, case-insensitive
//! identity resolution, the merge engine, the aisle sequencer and the
//! targeted item mutators. Persistence and the language-model boundary
//! live in sibling crates.

pub mod error;
pub mod id;
pub mod item;
pub mod merge;
pub mod mutate;
pub mod normalize;
pub mod sequence;
pub mod state;

pub use error::DomainError;
pub use id::ItemId;
pub use item::GroceryItem;
pub use merge::merge;
pub use mutate::{remove, set_checked};
pub use normalize::identity_key;
pub use sequence::{sequence, CANONICAL_AISLES};
pub use state::{AisleList, ListState};
