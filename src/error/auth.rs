use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Profile ID is not present in session")]
    NotLoggedIn,
    #[error("Profile ID {0} not found in database despite having an active session")]
    ProfileNotInDatabase(Uuid),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotLoggedIn => {
                tracing::debug!("{}", Self::NotLoggedIn);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Not logged in".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::ProfileNotInDatabase(profile_id) => {
                tracing::debug!(profile_id = %profile_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
