mod close_module;

use entity::{module::ModuleStatus, ta_application::ApplicationStatus, user::UserRole};
use tarecruit_test_utils::prelude::*;

use crate::server::{
    error::{auth::AuthError, workflow::WorkflowError, Error},
    service::module::ModuleService,
};
