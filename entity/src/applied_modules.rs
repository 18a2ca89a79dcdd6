use sea_orm::entity::prelude::*;

/// Per-user, per-series ledger of remaining weekly TA hours
///
/// The applications submitted under the ledger are kept as ordered
/// [`super::applied_modules_entry`] rows.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "applied_modules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique_key = "user_id-recruitment_series_id")]
    pub user_id: i32,
    #[sea_orm(unique_key = "user_id-recruitment_series_id")]
    pub recruitment_series_id: i32,
    pub available_hours_per_week: f64,
    pub is_doc_submitted: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::recruitment_series::Entity",
        from = "Column::RecruitmentSeriesId",
        to = "super::recruitment_series::Column::Id"
    )]
    RecruitmentSeries,
    #[sea_orm(has_many = "super::applied_modules_entry::Entity")]
    AppliedModulesEntry,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::recruitment_series::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecruitmentSeries.def()
    }
}

impl Related<super::applied_modules_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppliedModulesEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
