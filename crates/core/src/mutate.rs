//! Targeted item mutation: check/uncheck and removal by id.
//!
//! Both mutators address items by identity (`ItemId`), never by name,
//! and treat a missing aisle or id as a silent no-op. That no-op policy
//! is a product decision inherited from the original service, not an
//! oversight.

use crate::id::ItemId;
use crate::state::ListState;

/// Set the `checked` flag of the item with `item_id` inside `aisle`.
///
/// Items in other aisles and non-matching items are untouched. If the
/// aisle or id is absent the state is returned unchanged.
pub fn set_checked(mut state: ListState, aisle: &str, item_id: ItemId, checked: bool) -> ListState {
    if let Some(list) = state.aisles.iter_mut().find(|a| a.name == aisle) {
        for item in &mut list.items {
            if item.id == item_id {
                item.checked = checked;
            }
        }
    }
    state
}

/// Remove the item with `item_id` from `aisle`.
///
/// If the aisle's list becomes empty the aisle entry itself is removed
/// from the state. Absent aisle or id is a silent no-op.
pub fn remove(mut state: ListState, aisle: &str, item_id: ItemId) -> ListState {
    if let Some(list) = state.aisles.iter_mut().find(|a| a.name == aisle) {
        list.items.retain(|item| item.id != item_id);
    }
    state.aisles.retain(|a| !a.items.is_empty());
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::GroceryItem;

    fn state_with(entries: &[(&str, &str)]) -> ListState {
        let mut state = ListState::new();
        for (name, aisle) in entries {
            state.push_item(GroceryItem::new(*name, *aisle));
        }
        state
    }

    #[test]
    fn set_checked_flips_exactly_the_matching_item() {
        let state = state_with(&[("Milk", "Dairy"), ("Cheese", "Dairy")]);
        let milk_id = state.get("Dairy").unwrap().items()[0].id;

        let updated = set_checked(state, "Dairy", milk_id, true);

        let items = updated.get("Dairy").unwrap().items();
        assert!(items[0].checked);
        assert!(!items[1].checked);
    }

    #[test]
    fn set_checked_on_missing_aisle_is_a_silent_no_op() {
        let state = state_with(&[("Milk", "Dairy")]);
        let updated = set_checked(state.clone(), "NoSuchAisle", ItemId::new(), true);
        assert_eq!(updated, state);
    }

    #[test]
    fn set_checked_on_missing_id_is_a_silent_no_op() {
        let state = state_with(&[("Milk", "Dairy")]);
        let updated = set_checked(state.clone(), "Dairy", ItemId::new(), true);
        assert_eq!(updated, state);
    }

    #[test]
    fn removing_the_last_item_removes_the_aisle() {
        let state = state_with(&[("Peas", "Frozen"), ("Milk", "Dairy")]);
        let peas_id = state.get("Frozen").unwrap().items()[0].id;

        let updated = remove(state, "Frozen", peas_id);

        assert!(!updated.contains_aisle("Frozen"));
        assert!(updated.contains_aisle("Dairy"));
    }

    #[test]
    fn removing_one_of_several_keeps_the_aisle() {
        let state = state_with(&[("Milk", "Dairy"), ("Cheese", "Dairy")]);
        let milk_id = state.get("Dairy").unwrap().items()[0].id;

        let updated = remove(state, "Dairy", milk_id);

        let items = updated.get("Dairy").unwrap().items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Cheese");
    }

    #[test]
    fn remove_with_unknown_aisle_or_id_changes_nothing() {
        let state = state_with(&[("Milk", "Dairy")]);
        assert_eq!(remove(state.clone(), "Frozen", ItemId::new()), state);
        assert_eq!(remove(state.clone(), "Dairy", ItemId::new()), state);
    }
}
