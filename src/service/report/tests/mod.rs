use pulseboard_test_utils::prelude::*;
use sea_orm::DatabaseConnection;

use crate::model::auth::Caller;

mod media;
mod social_media;
mod stats;

/// Inserts a profile with the given role and returns it as a resolved caller.
pub async fn insert_caller(
    db: &DatabaseConnection,
    role: entity::profile::Role,
) -> Result<Caller, TestError> {
    let profile = data::insert_profile(db, role).await?;

    Ok(Caller::from_profile(&profile))
}
