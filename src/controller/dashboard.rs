use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    controller::util::get_profile_from_session,
    error::Error,
    model::{api::ErrorDto, app::AppState, auth::Caller, report::ReportCountsDto},
    service::report::stats::ReportStatsService,
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Get per-kind report counts for the dashboard
///
/// Counts are scoped the same way as report listings: staff counts cover
/// only the caller's own reports, admin counts cover everyone's.
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Success when retrieving report counts", body = ReportCountsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;
    let caller = Caller::from_profile(&profile);

    let counts = ReportStatsService::new(&state.db)
        .count_by_kind(&caller)
        .await?;

    Ok((StatusCode::OK, Json(counts)))
}
