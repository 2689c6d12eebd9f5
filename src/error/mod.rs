//! Error types for the Pulseboard server.
//!
//! Domain errors (`AuthError`, `ReportError`) are defined with `thiserror`
//! and mapped to HTTP responses via `IntoResponse`. Store failures surface
//! verbatim as `StorageError`; nothing in this crate retries or silently
//! recovers, that is the caller's decision.

pub mod auth;
pub mod report;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, report::ReportError},
    model::api::ErrorDto,
};

/// Main error type for the Pulseboard server.
///
/// Aggregates the domain-specific error types and external library errors
/// into a single unified type with `#[from]` conversions for `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication error (session or profile resolution).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Report repository error (validation, authorization, missing record).
    #[error(transparent)]
    ReportError(#[from] ReportError),
    /// Backing store unreachable or rejected the operation.
    #[error(transparent)]
    StorageError(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::ReportError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the full error message for debugging, but returns a generic message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
