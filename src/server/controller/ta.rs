use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        application::{
            AcceptedModuleDto, ApplicationDto, ApplyRequestDto, AppliedModuleDto, UserIdQuery,
        },
        module::ModuleDto,
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::{application::ApplicationService, module::ModuleService},
    },
};

pub static TA_TAG: &str = "ta";

/// Advertised modules in active series that the user can still apply for
#[utoipa::path(
    get,
    path = "/api/ta/requests",
    tag = TA_TAG,
    params(UserIdQuery),
    responses(
        (status = 200, description = "Open positions for the user's role", body = Vec<ModuleDto>),
        (status = 400, description = "User's role cannot apply for positions", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_requests(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse, Error> {
    let modules = ModuleService::new(&state.db)
        .list_requests(query.user_id)
        .await?;

    Ok((StatusCode::OK, Json(modules)))
}

/// Apply for a TA position on a module
///
/// Debits the module's weekly hours from the user's budget for the series and claims one of
/// the positions for the user's role.
#[utoipa::path(
    post,
    path = "/api/ta/apply",
    tag = TA_TAG,
    request_body = ApplyRequestDto,
    responses(
        (status = 201, description = "Application created", body = ApplicationDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 404, description = "User, module or series not found", body = ErrorDto),
        (status = 409, description = "Duplicate application, insufficient hours, positions filled, module not advertised or series archived", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply(
    State(state): State<AppState>,
    Json(request): Json<ApplyRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let application = ApplicationService::new(&state.db, state.notifier.clone())
        .apply(request)
        .await?;

    Ok((StatusCode::CREATED, Json(application)))
}

/// The user's applications with their modules and coordinators
#[utoipa::path(
    get,
    path = "/api/ta/applied-modules",
    tag = TA_TAG,
    params(UserIdQuery),
    responses(
        (status = 200, description = "Applications with module details", body = Vec<AppliedModuleDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_applied_modules(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse, Error> {
    let applied = ApplicationService::new(&state.db, state.notifier.clone())
        .applied_modules(query.user_id)
        .await?;

    Ok((StatusCode::OK, Json(applied)))
}

/// The user's accepted applications
#[utoipa::path(
    get,
    path = "/api/ta/accepted-modules",
    tag = TA_TAG,
    params(UserIdQuery),
    responses(
        (status = 200, description = "Accepted applications with module details", body = Vec<AcceptedModuleDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_accepted_modules(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse, Error> {
    let accepted = ApplicationService::new(&state.db, state.notifier.clone())
        .accepted_modules(query.user_id)
        .await?;

    Ok((StatusCode::OK, Json(accepted)))
}

/// Withdraw an application
///
/// Restores the applicant's hours and the module's counters. Only the applicant or an admin
/// may delete an application.
#[utoipa::path(
    delete,
    path = "/api/ta/applications/{application_id}",
    tag = TA_TAG,
    params(("application_id" = i32, Path, description = "ID of the application to delete")),
    responses(
        (status = 200, description = "Application deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the applicant", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 409, description = "Application kept changing while being deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_application(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    ApplicationService::new(&state.db, state.notifier.clone())
        .delete(application_id, user.id, user.role)
        .await?;

    Ok(StatusCode::OK)
}
