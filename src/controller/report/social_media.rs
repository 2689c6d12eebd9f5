use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::{report::REPORT_TAG, util::get_profile_from_session},
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        auth::Caller,
        report::{SocialMediaReportDto, SocialMediaReportPayload},
    },
    service::report::social_media::SocialMediaReportService,
};

/// Get social media reports visible to the caller
///
/// Staff callers see only their own reports; admins see everyone's.
#[utoipa::path(
    get,
    path = "/api/reports/social-media",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Success when retrieving reports", body = Vec<SocialMediaReportDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;
    let caller = Caller::from_profile(&profile);

    let reports = SocialMediaReportService::new(&state.db).list(&caller).await?;

    Ok((StatusCode::OK, Json(reports)))
}

/// Create a social media report owned by the caller
#[utoipa::path(
    post,
    path = "/api/reports/social-media",
    tag = REPORT_TAG,
    request_body = SocialMediaReportPayload,
    responses(
        (status = 201, description = "Report created", body = SocialMediaReportDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 422, description = "Invalid report fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SocialMediaReportPayload>,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;
    let caller = Caller::from_profile(&profile);

    let report = SocialMediaReportService::new(&state.db)
        .create(&caller, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(report)))
}

/// Update a social media report
///
/// Only the report's owner or an admin may update it. The owner and
/// creation timestamp never change.
#[utoipa::path(
    put,
    path = "/api/reports/social-media/{id}",
    tag = REPORT_TAG,
    params(("id" = i32, Path, description = "Report ID")),
    request_body = SocialMediaReportPayload,
    responses(
        (status = 200, description = "Report updated", body = SocialMediaReportDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller may not modify this report", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 422, description = "Invalid report fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SocialMediaReportPayload>,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;
    let caller = Caller::from_profile(&profile);

    let report = SocialMediaReportService::new(&state.db)
        .update(&caller, id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Delete a social media report
///
/// Deleting an already-deleted report succeeds.
#[utoipa::path(
    delete,
    path = "/api/reports/social-media/{id}",
    tag = REPORT_TAG,
    params(("id" = i32, Path, description = "Report ID")),
    responses(
        (status = 204, description = "Report deleted or already absent"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller may not modify this report", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;
    let caller = Caller::from_profile(&profile);

    SocialMediaReportService::new(&state.db)
        .delete(&caller, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
