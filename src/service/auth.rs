use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::profile::ProfileRepository,
    error::Error,
    model::{auth::ProviderIdentity, profile::ProfileDto, session::SessionProfileId},
};

/// Sign-in against an already-verified identity assertion.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the asserted identity to a profile and starts a session.
    ///
    /// A first-time identity gets a profile with the staff role; later
    /// sign-ins reuse the stored profile, so a role granted by an admin
    /// survives across sessions.
    pub async fn login(
        &self,
        session: &Session,
        identity: &ProviderIdentity,
    ) -> Result<ProfileDto, Error> {
        let repo = ProfileRepository::new(self.db);

        let profile = match repo.get_by_id(identity.id).await? {
            Some(profile) => profile,
            None => repo.create(identity.id, &identity.email).await?,
        };

        SessionProfileId::insert(session, profile.id).await?;

        Ok(profile.into())
    }
}
