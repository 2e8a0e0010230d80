//! Aisle sequencing along the canonical shopping route.

use crate::state::ListState;

/// Fixed reference order approximating a typical store layout.
///
/// Aisles not in this list sort after all known aisles, in the order
/// they were first encountered.
pub const CANONICAL_AISLES: [&str; 11] = [
    "Produce",
    "Dairy",
    "Meat",
    "Frozen",
    "Pantry",
    "Canned Goods",
    "Baking",
    "Beverages",
    "Snacks",
    "Household",
    "Personal Care",
];

fn rank(aisle: &str) -> usize {
    CANONICAL_AISLES
        .iter()
        .position(|known| *known == aisle)
        .unwrap_or(CANONICAL_AISLES.len())
}

/// Reorder the state's aisles along [`CANONICAL_AISLES`].
///
/// Purely a reordering: item contents and aisle membership are
/// unchanged. Unknown aisles all share the same rank, so the stable
/// sort keeps them in first-seen order after every known aisle.
/// Deterministic and idempotent.
pub fn sequence(mut state: ListState) -> ListState {
    state.aisles.sort_by_key(|aisle| rank(&aisle.name));
    state
}
