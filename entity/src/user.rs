use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role a user holds within the department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[sea_orm(string_value = "undergraduate")]
    Undergraduate,
    #[sea_orm(string_value = "postgraduate")]
    Postgraduate,
    #[sea_orm(string_value = "lecturer")]
    Lecturer,
    #[sea_orm(string_value = "admin")]
    Admin,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ta_application::Entity")]
    TaApplication,
    #[sea_orm(has_many = "super::applied_modules::Entity")]
    AppliedModules,
    #[sea_orm(has_many = "super::module_coordinator::Entity")]
    ModuleCoordinator,
}

impl Related<super::ta_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaApplication.def()
    }
}

impl Related<super::applied_modules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppliedModules.def()
    }
}

impl Related<super::module_coordinator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModuleCoordinator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
