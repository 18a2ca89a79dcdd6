//! HTTP controller endpoints for the TA recruitment API.
//!
//! Applicant routes live under `/api/ta`, coordinator routes under `/lecturer` and
//! administration under `/api/admin`. Controllers resolve the session user where a route needs
//! one, delegate to the services, and return DTOs or an `Error` that renders as
//! `{"error": "..."}`. Every handler carries a utoipa annotation for the OpenAPI document.

pub mod admin;
pub mod lecturer;
pub mod ta;
pub mod util;
