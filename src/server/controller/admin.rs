use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::user::UserRole;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        module::{CreateModuleDto, ModuleDto},
        recruitment::{CreateRecruitmentSeriesDto, RecruitmentSeriesDto},
        user::{CreateUserDto, UserDto},
    },
    server::{
        controller::util::get_user::{get_user_from_session, require_role},
        error::Error,
        model::app::AppState,
        service::{
            module::ModuleService, recruitment_series::RecruitmentSeriesService,
            user::UserService,
        },
    },
};

pub static ADMIN_TAG: &str = "admin";

/// Resolves the session user and requires the admin role
async fn require_admin(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let user = get_user_from_session(state, session).await?;
    require_role(&user, &[UserRole::Admin])?;

    Ok(user)
}

/// Register a user
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid or duplicate email, or blank name", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(user): Json<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let user = UserService::new(&state.db).create_user(user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Open a new recruitment series
#[utoipa::path(
    post,
    path = "/api/admin/recruitment-series",
    tag = ADMIN_TAG,
    request_body = CreateRecruitmentSeriesDto,
    responses(
        (status = 201, description = "Series created", body = RecruitmentSeriesDto),
        (status = 400, description = "Blank name or non-positive hour limit", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_series(
    State(state): State<AppState>,
    session: Session,
    Json(series): Json<CreateRecruitmentSeriesDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let series = RecruitmentSeriesService::new(&state.db)
        .create_series(series)
        .await?;

    Ok((StatusCode::CREATED, Json(series)))
}

/// All recruitment series, newest first
#[utoipa::path(
    get,
    path = "/api/admin/recruitment-series",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Recruitment series", body = Vec<RecruitmentSeriesDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_series(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let series = RecruitmentSeriesService::new(&state.db)
        .get_all_series()
        .await?;

    Ok((StatusCode::OK, Json(series)))
}

/// Archive a recruitment series
///
/// Archived series take no new applications. Existing applications can still be decided
/// or withdrawn.
#[utoipa::path(
    patch,
    path = "/api/admin/recruitment-series/{series_id}/archive",
    tag = ADMIN_TAG,
    params(("series_id" = i32, Path, description = "ID of the recruitment series")),
    responses(
        (status = 200, description = "Series archived", body = RecruitmentSeriesDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn archive_series(
    State(state): State<AppState>,
    session: Session,
    Path(series_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let series = RecruitmentSeriesService::new(&state.db)
        .archive_series(series_id)
        .await?;

    Ok((StatusCode::OK, Json(series)))
}

/// Create a module in a series with its coordinators
///
/// Modules start out pending and must be advertised before students can apply.
#[utoipa::path(
    post,
    path = "/api/admin/modules",
    tag = ADMIN_TAG,
    request_body = CreateModuleDto,
    responses(
        (status = 201, description = "Module created", body = ModuleDto),
        (status = 400, description = "Invalid requirements or coordinator is not a lecturer", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Series or coordinator not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_module(
    State(state): State<AppState>,
    session: Session,
    Json(module): Json<CreateModuleDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let module = ModuleService::new(&state.db).create_module(module).await?;

    Ok((StatusCode::CREATED, Json(module)))
}

/// Open a module to applicants
#[utoipa::path(
    patch,
    path = "/api/admin/modules/{module_id}/advertise",
    tag = ADMIN_TAG,
    params(("module_id" = i32, Path, description = "ID of the module")),
    responses(
        (status = 200, description = "Module advertised", body = ModuleDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 409, description = "Module is closed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn advertise_module(
    State(state): State<AppState>,
    session: Session,
    Path(module_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let module = ModuleService::new(&state.db)
        .advertise_module(module_id)
        .await?;

    Ok((StatusCode::OK, Json(module)))
}

/// Close a module to further applications
#[utoipa::path(
    patch,
    path = "/api/admin/modules/{module_id}/close",
    tag = ADMIN_TAG,
    params(("module_id" = i32, Path, description = "ID of the module")),
    responses(
        (status = 200, description = "Module closed", body = ModuleDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn close_module(
    State(state): State<AppState>,
    session: Session,
    Path(module_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let module = ModuleService::new(&state.db).close_module(module_id).await?;

    Ok((StatusCode::OK, Json(module)))
}
