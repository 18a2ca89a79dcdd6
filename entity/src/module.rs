use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum ModuleStatus {
    /// Created but not yet open to applicants
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Open to applicants
    #[sea_orm(string_value = "advertised")]
    Advertised,
    #[sea_orm(string_value = "closed")]
    Closed,
}

/// A course unit requiring TA support
///
/// Each applicant role carries its own counter group. The `applied_*_count` columns are the
/// `applied` member of that group and may never exceed the matching `required_*_ta_count`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "module")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub recruitment_series_id: i32,
    pub code: String,
    pub name: String,
    pub semester: String,
    pub module_status: ModuleStatus,
    pub required_ta_hours: f64,

    pub required_undergraduate_ta_count: i32,
    pub applied_undergraduate_count: i32,
    pub undergraduate_remaining: i32,
    pub undergraduate_reviewed: i32,
    pub undergraduate_accepted: i32,
    pub undergraduate_doc_submitted: i32,
    pub undergraduate_appointed: i32,

    pub required_postgraduate_ta_count: i32,
    pub applied_postgraduate_count: i32,
    pub postgraduate_remaining: i32,
    pub postgraduate_reviewed: i32,
    pub postgraduate_accepted: i32,
    pub postgraduate_doc_submitted: i32,
    pub postgraduate_appointed: i32,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::recruitment_series::Entity",
        from = "Column::RecruitmentSeriesId",
        to = "super::recruitment_series::Column::Id"
    )]
    RecruitmentSeries,
    #[sea_orm(has_many = "super::ta_application::Entity")]
    TaApplication,
    #[sea_orm(has_many = "super::module_coordinator::Entity")]
    ModuleCoordinator,
}

impl Related<super::recruitment_series::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecruitmentSeries.def()
    }
}

impl Related<super::ta_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaApplication.def()
    }
}

impl Related<super::module_coordinator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModuleCoordinator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
