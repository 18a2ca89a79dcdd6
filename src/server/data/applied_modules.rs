use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Access to the per-user, per-series hour ledger and its ordered application entries
pub struct AppliedModulesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AppliedModulesRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_user_and_series(
        &self,
        user_id: i32,
        recruitment_series_id: i32,
    ) -> Result<Option<entity::applied_modules::Model>, DbErr> {
        entity::prelude::AppliedModules::find()
            .filter(Expr::col(entity::applied_modules::Column::UserId).eq(user_id))
            .filter(
                Expr::col(entity::applied_modules::Column::RecruitmentSeriesId)
                    .eq(recruitment_series_id),
            )
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        user_id: i32,
        recruitment_series_id: i32,
        available_hours_per_week: f64,
    ) -> Result<entity::applied_modules::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let ledger = entity::applied_modules::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            recruitment_series_id: ActiveValue::Set(recruitment_series_id),
            available_hours_per_week: ActiveValue::Set(available_hours_per_week),
            is_doc_submitted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        ledger.insert(self.db).await
    }

    /// Subtracts `hours` from the ledger's available hours.
    ///
    /// Returns `false` without changing anything when fewer than `hours` remain.
    pub async fn debit_hours(&self, ledger_id: i32, hours: f64) -> Result<bool, DbErr> {
        let result = entity::prelude::AppliedModules::update_many()
            .col_expr(
                entity::applied_modules::Column::AvailableHoursPerWeek,
                Expr::col(entity::applied_modules::Column::AvailableHoursPerWeek).sub(hours),
            )
            .col_expr(
                entity::applied_modules::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(Expr::col(entity::applied_modules::Column::Id).eq(ledger_id))
            .filter(
                Expr::col(entity::applied_modules::Column::AvailableHoursPerWeek).gte(hours),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Adds `hours` back to the ledger, returning `false` if the ledger does not exist
    pub async fn credit_hours(&self, ledger_id: i32, hours: f64) -> Result<bool, DbErr> {
        let result = entity::prelude::AppliedModules::update_many()
            .col_expr(
                entity::applied_modules::Column::AvailableHoursPerWeek,
                Expr::col(entity::applied_modules::Column::AvailableHoursPerWeek).add(hours),
            )
            .col_expr(
                entity::applied_modules::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(Expr::col(entity::applied_modules::Column::Id).eq(ledger_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Appends an application to the end of the ledger's list
    pub async fn append_application(
        &self,
        ledger_id: i32,
        ta_application_id: i32,
    ) -> Result<entity::applied_modules_entry::Model, DbErr> {
        let entry = entity::applied_modules_entry::ActiveModel {
            applied_modules_id: ActiveValue::Set(ledger_id),
            ta_application_id: ActiveValue::Set(ta_application_id),
            ..Default::default()
        };

        entry.insert(self.db).await
    }

    /// Removes an application from whichever ledger lists it
    pub async fn remove_application(&self, ta_application_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AppliedModulesEntry::delete_many()
            .filter(
                Expr::col(entity::applied_modules_entry::Column::TaApplicationId)
                    .eq(ta_application_id),
            )
            .exec(self.db)
            .await
    }

    /// Application IDs listed under the ledger, in the order they were appended
    pub async fn get_application_ids(&self, ledger_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::AppliedModulesEntry::find()
            .select_only()
            .column(entity::applied_modules_entry::Column::TaApplicationId)
            .filter(
                Expr::col(entity::applied_modules_entry::Column::AppliedModulesId).eq(ledger_id),
            )
            .order_by_asc(entity::applied_modules_entry::Column::Id)
            .into_tuple()
            .all(self.db)
            .await
    }
}
