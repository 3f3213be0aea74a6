/// Identifiers are opaque strings (UUID v4 text for generated records).
pub type EntityId = String;

/// Blank ids are a guaranteed miss and never reach the store.
pub fn is_blank(id: &str) -> bool {
    id.trim().is_empty()
}

/// Generate a fresh identifier for a new record.
pub fn new_id() -> EntityId {
    uuid::Uuid::new_v4().to_string()
}
