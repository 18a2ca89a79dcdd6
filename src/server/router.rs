//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/ta/requests` - Open positions for an applicant
/// - `POST /api/ta/apply` - Apply for a position
/// - `GET /api/ta/applied-modules` - An applicant's applications
/// - `GET /api/ta/accepted-modules` - An applicant's accepted applications
/// - `DELETE /api/ta/applications/{application_id}` - Withdraw an application
/// - `PATCH /lecturer/applications/{application_id}/accept` - Accept an application
/// - `PATCH /lecturer/applications/{application_id}/reject` - Reject an application
/// - `GET /lecturer/modules` - Modules coordinated by the session user
/// - `GET /lecturer/modules/{module_id}/applications` - Applications to a coordinated module
/// - `PATCH /lecturer/modules/{module_id}/requirements` - Change a module's requirements
/// - `POST /api/admin/users` - Register a user
/// - `POST|GET /api/admin/recruitment-series` - Create or list recruitment series
/// - `POST /api/admin/modules` - Create a module
/// - `PATCH /api/admin/recruitment-series/{series_id}/archive` - Archive a recruitment series
/// - `PATCH /api/admin/modules/{module_id}/advertise` - Advertise a module
/// - `PATCH /api/admin/modules/{module_id}/close` - Close a module
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "TA Recruitment", description = "TA recruitment API"), tags(
        (name = controller::ta::TA_TAG, description = "Applicant routes"),
        (name = controller::lecturer::LECTURER_TAG, description = "Module coordinator routes"),
        (name = controller::admin::ADMIN_TAG, description = "Administration routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::ta::get_requests))
        .routes(routes!(controller::ta::apply))
        .routes(routes!(controller::ta::get_applied_modules))
        .routes(routes!(controller::ta::get_accepted_modules))
        .routes(routes!(controller::ta::delete_application))
        .routes(routes!(controller::lecturer::accept_application))
        .routes(routes!(controller::lecturer::reject_application))
        .routes(routes!(controller::lecturer::get_modules))
        .routes(routes!(controller::lecturer::get_module_applications))
        .routes(routes!(controller::lecturer::update_requirements))
        .routes(routes!(controller::admin::create_user))
        .routes(routes!(
            controller::admin::create_series,
            controller::admin::get_series
        ))
        .routes(routes!(controller::admin::archive_series))
        .routes(routes!(controller::admin::create_module))
        .routes(routes!(controller::admin::advertise_module))
        .routes(routes!(controller::admin::close_module))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
