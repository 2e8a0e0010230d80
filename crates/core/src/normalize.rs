//! Case-insensitive item identity.

/// Identity key of an item name: lowercase of the trimmed name.
///
/// Two items are "the same" iff their identity keys are equal. Used for
/// every dedup decision; never used for ordering.
pub fn identity_key(name: &str) -> String {
    name.trim().to_lowercase()
}
