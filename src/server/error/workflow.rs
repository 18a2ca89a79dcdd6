//! Business-rule errors raised by the application workflow and module services.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::ta_application::ApplicationStatus;
use sea_orm::ActiveEnum;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Workflow error type.
///
/// Missing records map to 404 Not Found, state conflicts map to 409 Conflict. The error
/// message is returned to the caller as-is so the frontend can display it.
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// The user already has an application for the module.
    #[error("You have already applied for this module")]
    DuplicateApplication,
    /// The applicant's remaining weekly hours in the series cannot cover the position.
    #[error("Insufficient available hours for this position")]
    InsufficientHours,
    /// Every position for the applicant's role is taken.
    #[error("All positions for this module have been filled")]
    PositionsFilled,
    /// The application is no longer pending.
    #[error("Application has already been {}", .0.to_value())]
    AlreadyProcessed(ApplicationStatus),
    /// The module is not open to applicants.
    #[error("Module ID {0} is not accepting applications")]
    ModuleNotAdvertised(i32),
    /// The recruitment series is archived and takes no further applications.
    #[error("Recruitment series ID {0} is archived")]
    SeriesArchived(i32),
    /// The module has been closed and can no longer change state.
    #[error("Module ID {0} is closed")]
    ModuleClosed(i32),
    #[error("Application ID {0} not found")]
    ApplicationNotFound(i32),
    #[error("Module ID {0} not found")]
    ModuleNotFound(i32),
    #[error("Recruitment series ID {0} not found")]
    SeriesNotFound(i32),
    #[error("User ID {0} not found")]
    UserNotFound(i32),
}

impl WorkflowError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ApplicationNotFound(_)
            | Self::ModuleNotFound(_)
            | Self::SeriesNotFound(_)
            | Self::UserNotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateApplication
            | Self::InsufficientHours
            | Self::PositionsFilled
            | Self::AlreadyProcessed(_)
            | Self::ModuleNotAdvertised(_)
            | Self::SeriesArchived(_)
            | Self::ModuleClosed(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for WorkflowError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::debug!(status = %status, "{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
