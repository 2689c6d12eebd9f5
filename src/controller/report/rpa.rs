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
        report::{RpaReportDto, RpaReportPayload},
    },
    service::report::rpa::RpaReportService,
};

/// Get mail-automation reports visible to the caller
///
/// Staff callers see only their own reports; admins see everyone's.
#[utoipa::path(
    get,
    path = "/api/reports/rpa",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Success when retrieving reports", body = Vec<RpaReportDto>),
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

    let reports = RpaReportService::new(&state.db).list(&caller).await?;

    Ok((StatusCode::OK, Json(reports)))
}

/// Create a mail-automation report owned by the caller
#[utoipa::path(
    post,
    path = "/api/reports/rpa",
    tag = REPORT_TAG,
    request_body = RpaReportPayload,
    responses(
        (status = 201, description = "Report created", body = RpaReportDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 422, description = "Invalid report fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RpaReportPayload>,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;
    let caller = Caller::from_profile(&profile);

    let report = RpaReportService::new(&state.db)
        .create(&caller, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(report)))
}

/// Update a mail-automation report
#[utoipa::path(
    put,
    path = "/api/reports/rpa/{id}",
    tag = REPORT_TAG,
    params(("id" = i32, Path, description = "Report ID")),
    request_body = RpaReportPayload,
    responses(
        (status = 200, description = "Report updated", body = RpaReportDto),
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
    Json(payload): Json<RpaReportPayload>,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;
    let caller = Caller::from_profile(&profile);

    let report = RpaReportService::new(&state.db)
        .update(&caller, id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Delete a mail-automation report
#[utoipa::path(
    delete,
    path = "/api/reports/rpa/{id}",
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

    RpaReportService::new(&state.db).delete(&caller, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
