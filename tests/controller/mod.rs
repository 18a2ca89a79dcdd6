//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with state, session and extracted inputs, and the resulting
//! responses are checked for status codes and bodies.

mod admin;
mod lecturer;
mod ta;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::{module::ModuleStatus, ta_application::ApplicationStatus, user::UserRole};
use tarecruit::model::api::ErrorDto;
use tarecruit_test_utils::prelude::*;

use crate::util::{app_state, body_json, login};
