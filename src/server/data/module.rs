use chrono::Utc;
use entity::{module::ModuleStatus, recruitment_series::SeriesStatus};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, UpdateMany,
};

use crate::{model::module::CreateModuleDto, server::model::role::ApplicantRole};

/// Signed changes applied to one role's counter group in a single statement
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CounterDelta {
    pub applied: i32,
    pub remaining: i32,
    pub reviewed: i32,
    pub accepted: i32,
}

pub struct ModuleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ModuleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending module with `remaining` initialised from `required` for each role
    pub async fn create(&self, module: &CreateModuleDto) -> Result<entity::module::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let module = entity::module::ActiveModel {
            recruitment_series_id: ActiveValue::Set(module.recruitment_series_id),
            code: ActiveValue::Set(module.code.clone()),
            name: ActiveValue::Set(module.name.clone()),
            semester: ActiveValue::Set(module.semester.clone()),
            module_status: ActiveValue::Set(ModuleStatus::Pending),
            required_ta_hours: ActiveValue::Set(module.required_ta_hours),
            required_undergraduate_ta_count: ActiveValue::Set(
                module.required_undergraduate_ta_count,
            ),
            applied_undergraduate_count: ActiveValue::Set(0),
            undergraduate_remaining: ActiveValue::Set(module.required_undergraduate_ta_count),
            undergraduate_reviewed: ActiveValue::Set(0),
            undergraduate_accepted: ActiveValue::Set(0),
            undergraduate_doc_submitted: ActiveValue::Set(0),
            undergraduate_appointed: ActiveValue::Set(0),
            required_postgraduate_ta_count: ActiveValue::Set(module.required_postgraduate_ta_count),
            applied_postgraduate_count: ActiveValue::Set(0),
            postgraduate_remaining: ActiveValue::Set(module.required_postgraduate_ta_count),
            postgraduate_reviewed: ActiveValue::Set(0),
            postgraduate_accepted: ActiveValue::Set(0),
            postgraduate_doc_submitted: ActiveValue::Set(0),
            postgraduate_appointed: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        module.insert(self.db).await
    }

    pub async fn get(&self, module_id: i32) -> Result<Option<entity::module::Model>, DbErr> {
        entity::prelude::Module::find_by_id(module_id)
            .one(self.db)
            .await
    }

    /// Reads a module and holds a row lock until the transaction ends.
    ///
    /// Serialises hour changes against applications that debit the current hours.
    pub async fn get_for_update(
        &self,
        module_id: i32,
    ) -> Result<Option<entity::module::Model>, DbErr> {
        entity::prelude::Module::find_by_id(module_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Takes one position for `role`, incrementing `applied` and decrementing `remaining`.
    ///
    /// Only applies while `applied < required`. Returns `false` when no position is left or
    /// the module does not exist.
    pub async fn claim_position(&self, module_id: i32, role: ApplicantRole) -> Result<bool, DbErr> {
        let cols = role.counters();

        let result = Self::touch(entity::prelude::Module::update_many())
            .col_expr(cols.applied, Expr::col(cols.applied).add(1))
            .col_expr(cols.remaining, Expr::col(cols.remaining).sub(1))
            .filter(Expr::col(entity::module::Column::Id).eq(module_id))
            .filter(Expr::col(cols.applied).lt(Expr::col(cols.required)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Applies `delta` to the counter group for `role`.
    ///
    /// The update is skipped when it would take a counter below zero or push `remaining`
    /// above `required`, in which case `false` is returned.
    pub async fn adjust_counters(
        &self,
        module_id: i32,
        role: ApplicantRole,
        delta: CounterDelta,
    ) -> Result<bool, DbErr> {
        let cols = role.counters();
        let changes = [
            (cols.applied, delta.applied),
            (cols.remaining, delta.remaining),
            (cols.reviewed, delta.reviewed),
            (cols.accepted, delta.accepted),
        ];

        let mut update = Self::touch(entity::prelude::Module::update_many())
            .filter(Expr::col(entity::module::Column::Id).eq(module_id));

        for (column, change) in changes {
            if change == 0 {
                continue;
            }

            update = update.col_expr(column, Expr::col(column).add(change));
            if change < 0 {
                update = update.filter(Expr::col(column).gte(-change));
            }
        }

        if delta.remaining > 0 {
            update = update.filter(
                Expr::col(cols.remaining)
                    .add(delta.remaining)
                    .lte(Expr::col(cols.required)),
            );
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn set_status(&self, module_id: i32, status: ModuleStatus) -> Result<bool, DbErr> {
        let result = Self::touch(entity::prelude::Module::update_many())
            .col_expr(entity::module::Column::ModuleStatus, Expr::value(status))
            .filter(Expr::col(entity::module::Column::Id).eq(module_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Replaces the required TA counts, shifting `remaining` by the same amount.
    ///
    /// Positions already held (`required - remaining`) are preserved, so the update is
    /// refused with `false` when a new requirement would fall below them.
    pub async fn update_requirements(
        &self,
        module_id: i32,
        required_undergraduate: i32,
        required_postgraduate: i32,
        required_ta_hours: Option<f64>,
    ) -> Result<bool, DbErr> {
        let mut update = Self::touch(entity::prelude::Module::update_many())
            .filter(Expr::col(entity::module::Column::Id).eq(module_id));

        for (role, new_required) in [
            (ApplicantRole::Undergraduate, required_undergraduate),
            (ApplicantRole::Postgraduate, required_postgraduate),
        ] {
            let cols = role.counters();

            update = update
                .col_expr(
                    cols.remaining,
                    Expr::col(cols.remaining)
                        .add(new_required)
                        .sub(Expr::col(cols.required)),
                )
                .col_expr(cols.required, Expr::value(new_required))
                .filter(
                    Expr::col(cols.required)
                        .sub(Expr::col(cols.remaining))
                        .lte(new_required),
                );
        }

        if let Some(hours) = required_ta_hours {
            update = update.col_expr(entity::module::Column::RequiredTaHours, Expr::value(hours));
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected == 1)
    }

    /// Advertised modules in active series that still want TAs of `role`, excluding
    /// `exclude_ids`
    pub async fn get_advertised_for_role(
        &self,
        role: ApplicantRole,
        exclude_ids: Vec<i32>,
    ) -> Result<Vec<entity::module::Model>, DbErr> {
        let cols = role.counters();

        let mut query = entity::prelude::Module::find()
            .inner_join(entity::prelude::RecruitmentSeries)
            .filter(
                Expr::col((entity::module::Entity, entity::module::Column::ModuleStatus))
                    .eq(ModuleStatus::Advertised),
            )
            .filter(
                Expr::col((
                    entity::recruitment_series::Entity,
                    entity::recruitment_series::Column::Status,
                ))
                .eq(SeriesStatus::Active),
            )
            .filter(Expr::col((entity::module::Entity, cols.required)).gt(0));

        if !exclude_ids.is_empty() {
            query = query.filter(
                Expr::col((entity::module::Entity, entity::module::Column::Id))
                    .is_not_in(exclude_ids),
            );
        }

        query
            .order_by_asc(entity::module::Column::Id)
            .all(self.db)
            .await
    }

    /// Modules the user coordinates
    pub async fn get_coordinated(&self, user_id: i32) -> Result<Vec<entity::module::Model>, DbErr> {
        entity::prelude::Module::find()
            .inner_join(entity::prelude::ModuleCoordinator)
            .filter(
                Expr::col((
                    entity::module_coordinator::Entity,
                    entity::module_coordinator::Column::UserId,
                ))
                .eq(user_id),
            )
            .order_by_asc(entity::module::Column::Id)
            .all(self.db)
            .await
    }

    fn touch(update: UpdateMany<entity::module::Entity>) -> UpdateMany<entity::module::Entity> {
        update.col_expr(
            entity::module::Column::UpdatedAt,
            Expr::value(Utc::now().naive_utc()),
        )
    }
}
