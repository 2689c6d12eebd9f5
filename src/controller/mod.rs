//! HTTP controller endpoints for the Pulseboard web API.
//!
//! Axum handlers for sign-in, monthly report management, dashboard stats,
//! and admin user management. Controllers resolve the caller from the
//! session, delegate to services, and shape HTTP responses. They integrate
//! with tower-sessions for session management and use utoipa for OpenAPI
//! documentation.

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod report;
pub mod util;
