use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::profile::ProfileRepository,
    error::{report::ReportError, Error},
    model::{auth::Caller, profile::ProfileDto},
};

/// Admin-only user management.
pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every profile, most recently created first.
    pub async fn list(&self, caller: &Caller) -> Result<Vec<ProfileDto>, Error> {
        if !caller.is_admin() {
            return Err(ReportError::Forbidden.into());
        }

        let profiles = ProfileRepository::new(self.db).get_all().await?;

        Ok(profiles.into_iter().map(Into::into).collect())
    }

    /// Changes another profile's role.
    ///
    /// Admins may not change their own role; the check happens here rather
    /// than in the client so it cannot be bypassed.
    pub async fn set_role(
        &self,
        caller: &Caller,
        target_id: Uuid,
        role: entity::profile::Role,
    ) -> Result<ProfileDto, Error> {
        if !caller.is_admin() {
            return Err(ReportError::Forbidden.into());
        }

        if target_id == caller.id {
            return Err(ReportError::validation(
                "role",
                "you cannot change your own role",
            )
            .into());
        }

        let Some(profile) = ProfileRepository::new(self.db)
            .update_role(target_id, role)
            .await?
        else {
            return Err(ReportError::NotFound(target_id.to_string()).into());
        };

        Ok(profile.into())
    }
}
