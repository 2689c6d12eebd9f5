//! Database insertion helpers for profile fixtures.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait};
use uuid::Uuid;

use crate::error::TestError;

/// Inserts a profile with a generated id and a unique email derived from it.
pub async fn insert_profile<C: ConnectionTrait>(
    db: &C,
    role: entity::profile::Role,
) -> Result<entity::profile::Model, TestError> {
    let id = Uuid::new_v4();
    let email = format!("{}@example.com", id.simple());

    insert_profile_with_email(db, id, &email, role).await
}

/// Inserts a profile with the given identity key and email.
pub async fn insert_profile_with_email<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    email: &str,
    role: entity::profile::Role,
) -> Result<entity::profile::Model, TestError> {
    let now = Utc::now().naive_utc();

    let profile = entity::profile::ActiveModel {
        id: ActiveValue::Set(id),
        email: ActiveValue::Set(email.to_string()),
        role: ActiveValue::Set(role),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    };

    Ok(profile.insert(db).await?)
}
