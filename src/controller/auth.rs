use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    controller::util::get_profile_from_session,
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        auth::ProviderIdentity,
        profile::ProfileDto,
        session::SessionProfileId,
    },
    service::auth::AuthService,
};

pub static AUTH_TAG: &str = "auth";

/// Sign in with a verified identity assertion
///
/// The upstream identity provider authenticates the user and posts the
/// resulting identity here. A first-time identity gets a staff profile;
/// returning identities reuse their stored profile and role.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = ProviderIdentity,
    responses(
        (status = 200, description = "Signed in, session started", body = ProfileDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(identity): Json<ProviderIdentity>,
) -> Result<impl IntoResponse, Error> {
    let profile = AuthService::new(&state.db)
        .login(&session, &identity)
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Logs the caller out by clearing their session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_profile_id = SessionProfileId::get(&session).await?;

    // Only clear session if there is actually a profile in session
    //
    // This avoids a 500 internal error response that occurs when trying
    // to clear sessions which don't exist
    if maybe_profile_id.is_some() {
        session.clear().await;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Get the signed-in caller's own profile
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Success when retrieving own profile", body = ProfileDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(ProfileDto::from(profile))))
}
