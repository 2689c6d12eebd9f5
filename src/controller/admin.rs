use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    controller::util::get_profile_from_session,
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        auth::Caller,
        profile::{ProfileDto, UpdateRoleDto},
    },
    service::profile::ProfileService,
};

pub static ADMIN_TAG: &str = "admin";

/// Get all user profiles (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Success when retrieving profiles", body = Vec<ProfileDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;
    let caller = Caller::from_profile(&profile);

    let profiles = ProfileService::new(&state.db).list(&caller).await?;

    Ok((StatusCode::OK, Json(profiles)))
}

/// Change another user's role (admin only)
///
/// Admins may not change their own role through this route.
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/role",
    tag = ADMIN_TAG,
    params(("id" = Uuid, Path, description = "Profile ID")),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated", body = ProfileDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 422, description = "Admins cannot change their own role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateRoleDto>,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;
    let caller = Caller::from_profile(&profile);

    let updated = ProfileService::new(&state.db)
        .set_role(&caller, id, body.role)
        .await?;

    Ok((StatusCode::OK, Json(updated)))
}
