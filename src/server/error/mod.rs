//! Error types for the TA recruitment server.
//!
//! This module provides the unified error type used by repositories, services and controllers.
//! Domain-specific errors (authentication, configuration, application workflow) live in their
//! own submodules. All errors implement `IntoResponse` so handlers can return them directly,
//! and every error body has the shape `{"error": "..."}`.

pub mod auth;
pub mod config;
pub mod retry;
pub mod workflow;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, workflow::WorkflowError},
};

/// Main error type for the TA recruitment server.
///
/// Aggregates domain errors and external library errors into a single type. `#[from]`
/// conversions allow `?` to lift repository and library errors into it.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Business-rule violation in the application workflow.
    #[error(transparent)]
    WorkflowError(#[from] WorkflowError),
    /// The request was well-formed JSON but carried invalid values.
    #[error("{0}")]
    ValidationError(String),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// A concurrent request changed a row between this request's read and its write.
    ///
    /// Retried from the start of the transaction; rendered as 409 once retries run out.
    #[error("The record was changed by another request, please try again: {0}")]
    ConcurrentUpdate(String),
    /// Internal error indicating a bug or inconsistent stored data.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Failure delivering a notification to the configured webhook.
    #[error(transparent)]
    NotifyError(#[from] reqwest::Error),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation errors
/// - 401 Unauthorized / 403 Forbidden - For authentication errors
/// - 404 Not Found / 409 Conflict - For workflow errors and exhausted concurrent-update retries
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::WorkflowError(err) => err.into_response(),
            Self::ValidationError(message) => {
                tracing::debug!("Rejected invalid request: {}", message);

                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            Self::ConcurrentUpdate(message) => {
                tracing::warn!("Gave up after concurrent updates: {}", message);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "The record was changed by another request, please try again"
                            .to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
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
