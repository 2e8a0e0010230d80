//! `grocer-store` — durable persistence of the list state.
//!
//! The whole state is one JSON document; every save rewrites it in
//! full. Loading degrades to an empty state instead of erroring, save
//! failures are surfaced (silent durability loss is not acceptable).

pub mod error;
pub mod json;

pub use error::StoreError;
pub use json::{JsonStateStore, MemoryStateStore, StateStore};
