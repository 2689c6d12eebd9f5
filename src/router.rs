//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation
//! at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which
/// are collected into a unified OpenAPI document served at
/// `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Pulseboard", description = "Pulseboard API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::report::REPORT_TAG, description = "Monthly report API routes"),
        (name = controller::dashboard::DASHBOARD_TAG, description = "Dashboard API routes"),
        (name = controller::admin::ADMIN_TAG, description = "Admin user management API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::report::social_media::list,
            controller::report::social_media::create
        ))
        .routes(routes!(
            controller::report::social_media::update,
            controller::report::social_media::delete
        ))
        .routes(routes!(
            controller::report::media::list,
            controller::report::media::create
        ))
        .routes(routes!(
            controller::report::media::update,
            controller::report::media::delete
        ))
        .routes(routes!(
            controller::report::website_analytics::list,
            controller::report::website_analytics::create
        ))
        .routes(routes!(
            controller::report::website_analytics::update,
            controller::report::website_analytics::delete
        ))
        .routes(routes!(
            controller::report::rpa::list,
            controller::report::rpa::create
        ))
        .routes(routes!(
            controller::report::rpa::update,
            controller::report::rpa::delete
        ))
        .routes(routes!(controller::dashboard::get_stats))
        .routes(routes!(controller::admin::list_users))
        .routes(routes!(controller::admin::update_user_role))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
