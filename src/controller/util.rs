use tower_sessions::Session;

use crate::{
    data::profile::ProfileRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, session::SessionProfileId},
};

/// Retrieves the caller's profile from session and then from database
///
/// # Returns
/// - `Ok(Model)`: Profile found for the session's profile ID
/// - `Err(Error::AuthError(NotLoggedIn))`: No profile ID present in session
/// - `Err(Error::AuthError(ProfileNotInDatabase))`: Profile ID exists in
///   session but not in the database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_profile_from_session(
    state: &AppState,
    session: &Session,
) -> Result<entity::profile::Model, Error> {
    let Some(profile_id) = SessionProfileId::get(session).await? else {
        return Err(Error::AuthError(AuthError::NotLoggedIn));
    };

    let Some(profile) = ProfileRepository::new(&state.db).get_by_id(profile_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for profile ID {} with active session but was not found in database",
            profile_id
        );

        return Err(Error::AuthError(AuthError::ProfileNotInDatabase(
            profile_id,
        )));
    };

    Ok(profile)
}
