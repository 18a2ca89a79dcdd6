use chrono::Utc;
use entity::recruitment_series::SeriesStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::recruitment::CreateRecruitmentSeriesDto;

/// Weekly hour budget for undergraduates when a series doesn't set one
pub const DEFAULT_UNDERGRAD_HOUR_LIMIT: f64 = 6.0;
/// Weekly hour budget for postgraduates when a series doesn't set one
pub const DEFAULT_POSTGRAD_HOUR_LIMIT: f64 = 10.0;

pub struct RecruitmentSeriesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecruitmentSeriesRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active series, filling in default hour limits
    pub async fn create(
        &self,
        series: &CreateRecruitmentSeriesDto,
    ) -> Result<entity::recruitment_series::Model, DbErr> {
        let series = entity::recruitment_series::ActiveModel {
            name: ActiveValue::Set(series.name.clone()),
            application_due_date: ActiveValue::Set(series.application_due_date),
            undergrad_hour_limit: ActiveValue::Set(
                series
                    .undergrad_hour_limit
                    .unwrap_or(DEFAULT_UNDERGRAD_HOUR_LIMIT),
            ),
            postgrad_hour_limit: ActiveValue::Set(
                series
                    .postgrad_hour_limit
                    .unwrap_or(DEFAULT_POSTGRAD_HOUR_LIMIT),
            ),
            status: ActiveValue::Set(SeriesStatus::Active),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        series.insert(self.db).await
    }

    pub async fn get(
        &self,
        series_id: i32,
    ) -> Result<Option<entity::recruitment_series::Model>, DbErr> {
        entity::prelude::RecruitmentSeries::find_by_id(series_id)
            .one(self.db)
            .await
    }

    /// Returns `false` when the series does not exist
    pub async fn set_status(&self, series_id: i32, status: SeriesStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::RecruitmentSeries::update_many()
            .col_expr(
                entity::recruitment_series::Column::Status,
                Expr::value(status),
            )
            .filter(entity::recruitment_series::Column::Id.eq(series_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Returns every series, newest first
    pub async fn get_all(&self) -> Result<Vec<entity::recruitment_series::Model>, DbErr> {
        entity::prelude::RecruitmentSeries::find()
            .order_by_desc(entity::recruitment_series::Column::Id)
            .all(self.db)
            .await
    }
}
