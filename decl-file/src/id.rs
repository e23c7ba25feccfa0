use uuid::Uuid;

/// Generate a new random entity identifier (UUID v4, hyphenated).
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
