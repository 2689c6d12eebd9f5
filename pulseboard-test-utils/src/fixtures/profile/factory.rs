//! Factory functions for in-memory profile models.
//!
//! These create model instances without touching the database, suitable for
//! unit tests of logic that only inspects a profile.

use chrono::Utc;
use uuid::Uuid;

/// Create a profile model with standard test values and a fresh id.
pub fn mock_profile_model(role: entity::profile::Role) -> entity::profile::Model {
    let id = Uuid::new_v4();
    let now = Utc::now().naive_utc();

    entity::profile::Model {
        id,
        email: format!("{}@example.com", id.simple()),
        role,
        created_at: now,
        updated_at: now,
    }
}
