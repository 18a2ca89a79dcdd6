use entity::module::ModuleStatus;
use serde::{Deserialize, Serialize};

/// Live TA counters for one applicant role on a module
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleCountsDto {
    pub required: i32,
    pub remaining: i32,
    pub applied: i32,
    pub reviewed: i32,
    pub accepted: i32,
    pub doc_submitted: i32,
    pub appointed: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDto {
    pub id: i32,
    pub recruitment_series_id: i32,
    pub code: String,
    pub name: String,
    pub semester: String,
    #[schema(value_type = String, example = "advertised")]
    pub module_status: ModuleStatus,
    #[serde(rename = "requiredTAHours")]
    pub required_ta_hours: f64,
    pub undergraduate_counts: RoleCountsDto,
    pub postgraduate_counts: RoleCountsDto,
}

impl From<entity::module::Model> for ModuleDto {
    fn from(module: entity::module::Model) -> Self {
        Self {
            id: module.id,
            recruitment_series_id: module.recruitment_series_id,
            code: module.code,
            name: module.name,
            semester: module.semester,
            module_status: module.module_status,
            required_ta_hours: module.required_ta_hours,
            undergraduate_counts: RoleCountsDto {
                required: module.required_undergraduate_ta_count,
                remaining: module.undergraduate_remaining,
                applied: module.applied_undergraduate_count,
                reviewed: module.undergraduate_reviewed,
                accepted: module.undergraduate_accepted,
                doc_submitted: module.undergraduate_doc_submitted,
                appointed: module.undergraduate_appointed,
            },
            postgraduate_counts: RoleCountsDto {
                required: module.required_postgraduate_ta_count,
                remaining: module.postgraduate_remaining,
                applied: module.applied_postgraduate_count,
                reviewed: module.postgraduate_reviewed,
                accepted: module.postgraduate_accepted,
                doc_submitted: module.postgraduate_doc_submitted,
                appointed: module.postgraduate_appointed,
            },
        }
    }
}

/// A lecturer coordinating a module
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatorDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<entity::user::Model> for CoordinatorDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateModuleDto {
    pub recruitment_series_id: i32,
    pub code: String,
    pub name: String,
    pub semester: String,
    #[serde(rename = "requiredTAHours")]
    pub required_ta_hours: f64,
    #[serde(rename = "requiredUndergraduateTACount")]
    pub required_undergraduate_ta_count: i32,
    #[serde(rename = "requiredPostgraduateTACount")]
    pub required_postgraduate_ta_count: i32,
    /// User IDs of the lecturers coordinating this module
    pub coordinator_ids: Vec<i32>,
}

/// Request body for a coordinator changing a module's TA requirements
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequirementsDto {
    #[serde(rename = "requiredUndergraduateTACount")]
    pub required_undergraduate_ta_count: i32,
    #[serde(rename = "requiredPostgraduateTACount")]
    pub required_postgraduate_ta_count: i32,
    #[serde(rename = "requiredTAHours")]
    pub required_ta_hours: Option<f64>,
}
