use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        application::{ApplicationDto, ModuleApplicationDto, RejectApplicationDto},
        module::{ModuleDto, UpdateRequirementsDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::{application::ApplicationService, module::ModuleService},
    },
};

pub static LECTURER_TAG: &str = "lecturer";

/// Accept a pending application to a module the logged in lecturer coordinates
///
/// The applicant is notified once the decision is committed.
#[utoipa::path(
    patch,
    path = "/lecturer/applications/{application_id}/accept",
    tag = LECTURER_TAG,
    params(("application_id" = i32, Path, description = "ID of the application to accept")),
    responses(
        (status = 200, description = "Application accepted", body = ApplicationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a coordinator of the module", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 409, description = "Application already processed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_application(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let application = ApplicationService::new(&state.db, state.notifier.clone())
        .accept(application_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(application)))
}

/// Reject a pending application, optionally with a reason shown to the applicant
#[utoipa::path(
    patch,
    path = "/lecturer/applications/{application_id}/reject",
    tag = LECTURER_TAG,
    params(("application_id" = i32, Path, description = "ID of the application to reject")),
    request_body(content = RejectApplicationDto, description = "Optional rejection reason, the body may be omitted"),
    responses(
        (status = 200, description = "Application rejected", body = ApplicationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a coordinator of the module", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 409, description = "Application already processed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_application(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<i32>,
    body: Option<Json<RejectApplicationDto>>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    let reason = body.and_then(|Json(body)| body.reason);

    let application = ApplicationService::new(&state.db, state.notifier.clone())
        .reject(application_id, user.id, reason)
        .await?;

    Ok((StatusCode::OK, Json(application)))
}

/// Modules coordinated by the logged in lecturer
#[utoipa::path(
    get,
    path = "/lecturer/modules",
    tag = LECTURER_TAG,
    responses(
        (status = 200, description = "Coordinated modules", body = Vec<ModuleDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_modules(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let modules = ModuleService::new(&state.db)
        .coordinated_modules(user.id)
        .await?;

    Ok((StatusCode::OK, Json(modules)))
}

/// Applications to a module the logged in lecturer coordinates
#[utoipa::path(
    get,
    path = "/lecturer/modules/{module_id}/applications",
    tag = LECTURER_TAG,
    params(("module_id" = i32, Path, description = "ID of the module")),
    responses(
        (status = 200, description = "Applications with applicant details", body = Vec<ModuleApplicationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a coordinator of the module", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_module_applications(
    State(state): State<AppState>,
    session: Session,
    Path(module_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let applications = ModuleService::new(&state.db)
        .module_applications(module_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(applications)))
}

/// Change a module's TA headcounts and weekly hours
#[utoipa::path(
    patch,
    path = "/lecturer/modules/{module_id}/requirements",
    tag = LECTURER_TAG,
    params(("module_id" = i32, Path, description = "ID of the module")),
    request_body = UpdateRequirementsDto,
    responses(
        (status = 200, description = "Requirements updated", body = ModuleDto),
        (status = 400, description = "Requirements conflict with existing applications", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a coordinator of the module", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_requirements(
    State(state): State<AppState>,
    session: Session,
    Path(module_id): Path<i32>,
    Json(requirements): Json<UpdateRequirementsDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let module = ModuleService::new(&state.db)
        .update_requirements(module_id, user.id, requirements)
        .await?;

    Ok((StatusCode::OK, Json(module)))
}
