use chrono::Utc;
use entity::ta_application::ApplicationStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct TaApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TaApplicationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending application
    ///
    /// A second application for the same user and module surfaces as a unique constraint
    /// violation where the composite index exists.
    pub async fn create(
        &self,
        user_id: i32,
        module_id: i32,
    ) -> Result<entity::ta_application::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let application = entity::ta_application::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            module_id: ActiveValue::Set(module_id),
            status: ActiveValue::Set(ApplicationStatus::Pending),
            rejection_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        application.insert(self.db).await
    }

    pub async fn get(
        &self,
        application_id: i32,
    ) -> Result<Option<entity::ta_application::Model>, DbErr> {
        entity::prelude::TaApplication::find_by_id(application_id)
            .one(self.db)
            .await
    }

    /// Reads an application and holds a row lock until the transaction ends.
    ///
    /// SQLite has no row locks and serialises writers instead.
    pub async fn get_for_update(
        &self,
        application_id: i32,
    ) -> Result<Option<entity::ta_application::Model>, DbErr> {
        entity::prelude::TaApplication::find_by_id(application_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    pub async fn find_by_user_and_module(
        &self,
        user_id: i32,
        module_id: i32,
    ) -> Result<Option<entity::ta_application::Model>, DbErr> {
        entity::prelude::TaApplication::find()
            .filter(entity::ta_application::Column::UserId.eq(user_id))
            .filter(entity::ta_application::Column::ModuleId.eq(module_id))
            .one(self.db)
            .await
    }

    /// Moves a pending application to `status`.
    ///
    /// Returns `false` when the application is missing or no longer pending, so two concurrent
    /// decisions can't both succeed.
    pub async fn set_status_if_pending(
        &self,
        application_id: i32,
        status: ApplicationStatus,
        rejection_reason: Option<String>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::TaApplication::update_many()
            .col_expr(entity::ta_application::Column::Status, Expr::value(status))
            .col_expr(
                entity::ta_application::Column::RejectionReason,
                Expr::value(rejection_reason),
            )
            .col_expr(
                entity::ta_application::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::ta_application::Column::Id.eq(application_id))
            .filter(entity::ta_application::Column::Status.eq(ApplicationStatus::Pending))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes an application only while it still has `status`.
    ///
    /// Returns `false` when a concurrent decision changed the status first, or the
    /// application is gone.
    pub async fn delete_if_status(
        &self,
        application_id: i32,
        status: ApplicationStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::TaApplication::delete_many()
            .filter(entity::ta_application::Column::Id.eq(application_id))
            .filter(entity::ta_application::Column::Status.eq(status))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// The user's applications with their modules, oldest first, optionally filtered by status
    pub async fn get_many_by_user_with_module(
        &self,
        user_id: i32,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<(entity::ta_application::Model, entity::module::Model)>, DbErr> {
        let mut query = entity::prelude::TaApplication::find()
            .filter(entity::ta_application::Column::UserId.eq(user_id));

        if let Some(status) = status {
            query = query.filter(entity::ta_application::Column::Status.eq(status));
        }

        let applications = query
            .order_by_asc(entity::ta_application::Column::Id)
            .find_also_related(entity::prelude::Module)
            .all(self.db)
            .await?;

        Ok(applications
            .into_iter()
            .filter_map(|(application, module)| module.map(|module| (application, module)))
            .collect())
    }

    /// Applications for a module with their applicants, oldest first
    pub async fn get_many_by_module_with_applicant(
        &self,
        module_id: i32,
    ) -> Result<Vec<(entity::ta_application::Model, entity::user::Model)>, DbErr> {
        let applications = entity::prelude::TaApplication::find()
            .filter(entity::ta_application::Column::ModuleId.eq(module_id))
            .order_by_asc(entity::ta_application::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(applications
            .into_iter()
            .filter_map(|(application, user)| user.map(|user| (application, user)))
            .collect())
    }

    /// IDs of every module the user has applied to, whatever the status
    pub async fn get_module_ids_by_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::TaApplication::find()
            .select_only()
            .column(entity::ta_application::Column::ModuleId)
            .filter(entity::ta_application::Column::UserId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    pub async fn count_by_module(&self, module_id: i32) -> Result<u64, DbErr> {
        entity::prelude::TaApplication::find()
            .filter(entity::ta_application::Column::ModuleId.eq(module_id))
            .count(self.db)
            .await
    }
}
