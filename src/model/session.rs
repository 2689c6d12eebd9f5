use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use uuid::Uuid;

use crate::error::Error;

pub const SESSION_PROFILE_ID_KEY: &str = "pulseboard:profile:id";

#[derive(Deserialize, Serialize, Debug)]
pub struct SessionProfileId(pub Uuid);

impl SessionProfileId {
    /// Insert profile ID into session
    pub async fn insert(session: &Session, profile_id: Uuid) -> Result<(), Error> {
        session
            .insert(SESSION_PROFILE_ID_KEY, SessionProfileId(profile_id))
            .await?;

        Ok(())
    }

    /// Get profile ID from session
    pub async fn get(session: &Session) -> Result<Option<Uuid>, Error> {
        Ok(session
            .get::<SessionProfileId>(SESSION_PROFILE_ID_KEY)
            .await?
            .map(|SessionProfileId(id)| id))
    }
}
