use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised by the role-scoped repository operations (report records
/// and profile administration).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReportError {
    /// A payload field violates its constraint; names the offending field.
    #[error("Invalid value for field '{field}': {reason}")]
    Validation { field: &'static str, reason: String },
    /// The caller is neither the record owner nor an admin.
    #[error("Caller lacks the rights for the requested mutation")]
    Forbidden,
    /// No record with the requested id exists (update only; delete on a
    /// missing id succeeds idempotently).
    #[error("Record {0} does not exist")]
    NotFound(String),
}

impl ReportError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
