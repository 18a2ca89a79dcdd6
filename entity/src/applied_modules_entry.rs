use sea_orm::entity::prelude::*;

/// Position of one application within a ledger's list, ordered by `id`
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "applied_modules_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub applied_modules_id: i32,
    #[sea_orm(unique)]
    pub ta_application_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::applied_modules::Entity",
        from = "Column::AppliedModulesId",
        to = "super::applied_modules::Column::Id"
    )]
    AppliedModules,
    #[sea_orm(
        belongs_to = "super::ta_application::Entity",
        from = "Column::TaApplicationId",
        to = "super::ta_application::Column::Id",
        on_delete = "Cascade"
    )]
    TaApplication,
}

impl Related<super::applied_modules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppliedModules.def()
    }
}

impl Related<super::ta_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
