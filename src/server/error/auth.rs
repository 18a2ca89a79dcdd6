use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("{0}")]
    Forbidden(String),
}

impl AuthError {
    fn unauthenticated() -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Not logged in".to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Self::unauthenticated()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Self::unauthenticated()
            }
            Self::Forbidden(message) => {
                tracing::debug!("Forbidden: {}", message);

                (StatusCode::FORBIDDEN, Json(ErrorDto { error: message })).into_response()
            }
        }
    }
}
