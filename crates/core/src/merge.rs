//! Merge engine: reconcile freshly categorized items against the list.

use crate::item::GroceryItem;
use crate::normalize::identity_key;
use crate::sequence::sequence;
use crate::state::ListState;

/// Merge a batch of categorized items into `current`.
///
/// With `preserve_existing` set, an incoming item whose identity key is
/// already on the list — or was already merged earlier in this batch —
/// is dropped silently; first-seen wins and existing entries are never
/// overwritten or moved. Without it, incoming items are appended
/// regardless of prior presence, and incoming-vs-incoming duplicates
/// are kept as-is (see the `without_preserve_*` tests).
///
/// Incoming items with a blank name or aisle are dropped rather than
/// merged partially formed. The result is re-sequenced along the
/// canonical aisle route. The caller owns persistence: every merge is
/// expected to be followed by a save.
pub fn merge(
    current: &ListState,
    incoming: Vec<GroceryItem>,
    preserve_existing: bool,
) -> ListState {
    let mut next = current.clone();
    let mut seen = current.identity_keys();

    for item in incoming {
        if !item.is_well_formed() {
            tracing::debug!(name = %item.name, aisle = %item.aisle, "dropping malformed incoming item");
            continue;
        }

        if preserve_existing {
            let key = identity_key(&item.name);
            if !seen.insert(key) {
                tracing::debug!(name = %item.name, "dropping duplicate incoming item");
                continue;
            }
        }

        next.push_item(item);
    }

    sequence(next)
}
