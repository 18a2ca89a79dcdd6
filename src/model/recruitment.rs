use chrono::NaiveDateTime;
use entity::recruitment_series::SeriesStatus;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentSeriesDto {
    pub id: i32,
    pub name: String,
    pub application_due_date: NaiveDateTime,
    pub undergrad_hour_limit: f64,
    pub postgrad_hour_limit: f64,
    #[schema(value_type = String, example = "active")]
    pub status: SeriesStatus,
}

impl From<entity::recruitment_series::Model> for RecruitmentSeriesDto {
    fn from(series: entity::recruitment_series::Model) -> Self {
        Self {
            id: series.id,
            name: series.name,
            application_due_date: series.application_due_date,
            undergrad_hour_limit: series.undergrad_hour_limit,
            postgrad_hour_limit: series.postgrad_hour_limit,
            status: series.status,
        }
    }
}

/// Request body for creating a recruitment series
///
/// Hour limits fall back to the department defaults when omitted.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecruitmentSeriesDto {
    pub name: String,
    pub application_due_date: NaiveDateTime,
    pub undergrad_hour_limit: Option<f64>,
    pub postgrad_hour_limit: Option<f64>,
}
