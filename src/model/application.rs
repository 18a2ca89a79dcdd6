use chrono::NaiveDateTime;
use entity::{ta_application::ApplicationStatus, user::UserRole};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::model::{
    module::{CoordinatorDto, ModuleDto},
    user::UserDto,
};

/// Request body for applying to a TA position
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequestDto {
    pub user_id: i32,
    #[schema(value_type = String, example = "undergraduate")]
    pub user_role: UserRole,
    pub module_id: i32,
    pub rec_series_id: i32,
    /// Weekly hours for the position, must match the module's requirement when provided
    pub ta_hours: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
    pub id: i32,
    pub user_id: i32,
    pub module_id: i32,
    #[schema(value_type = String, example = "pending")]
    pub status: ApplicationStatus,
    pub rejection_reason: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::ta_application::Model> for ApplicationDto {
    fn from(application: entity::ta_application::Model) -> Self {
        Self {
            id: application.id,
            user_id: application.user_id,
            module_id: application.module_id,
            status: application.status,
            rejection_reason: application.rejection_reason,
            created_at: application.created_at,
            updated_at: application.updated_at,
        }
    }
}

/// An application with its module and the module's coordinators
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppliedModuleDto {
    pub application: ApplicationDto,
    pub module: ModuleDto,
    pub coordinators: Vec<CoordinatorDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedModuleDto {
    pub application: ApplicationDto,
    pub module: ModuleDto,
}

/// An application to a module as seen by its coordinator
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleApplicationDto {
    pub application: ApplicationDto,
    pub applicant: UserDto,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RejectApplicationDto {
    pub reason: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct UserIdQuery {
    /// ID of the user the listing is for
    pub user_id: i32,
}
