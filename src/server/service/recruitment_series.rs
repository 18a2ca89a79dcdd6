//! Recruitment series administration.

use entity::recruitment_series::SeriesStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::recruitment::{CreateRecruitmentSeriesDto, RecruitmentSeriesDto},
    server::{
        data::recruitment_series::RecruitmentSeriesRepository,
        error::{workflow::WorkflowError, Error},
        service::retry::RetryContext,
    },
};

pub struct RecruitmentSeriesService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecruitmentSeriesService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a new active series.
    ///
    /// Hour limits left out of the request default to 6 for undergraduates and 10 for
    /// postgraduates. Limits must be positive.
    pub async fn create_series(
        &self,
        series: CreateRecruitmentSeriesDto,
    ) -> Result<RecruitmentSeriesDto, Error> {
        if series.name.trim().is_empty() {
            return Err(Error::ValidationError(
                "Series name must not be empty".to_string(),
            ));
        }

        for limit in [series.undergrad_hour_limit, series.postgrad_hour_limit]
            .into_iter()
            .flatten()
        {
            if !limit.is_finite() || limit <= 0.0 {
                return Err(Error::ValidationError(
                    "Hour limits must be positive".to_string(),
                ));
            }
        }

        let series_repo = RecruitmentSeriesRepository::new(self.db);
        let model = series_repo.create(&series).await?;

        tracing::debug!("Created recruitment series ID {}", model.id);

        Ok(model.into())
    }

    /// Archives a series so it takes no further applications.
    ///
    /// Decisions and withdrawals on existing applications are unaffected. Archiving twice
    /// returns the series unchanged.
    pub async fn archive_series(&self, series_id: i32) -> Result<RecruitmentSeriesDto, Error> {
        let series_repo = RecruitmentSeriesRepository::new(self.db);

        if !series_repo
            .set_status(series_id, SeriesStatus::Archived)
            .await?
        {
            return Err(WorkflowError::SeriesNotFound(series_id).into());
        }

        let series = series_repo
            .get(series_id)
            .await?
            .ok_or(WorkflowError::SeriesNotFound(series_id))?;

        tracing::debug!("Archived recruitment series ID {}", series_id);

        Ok(series.into())
    }

    pub async fn get_all_series(&self) -> Result<Vec<RecruitmentSeriesDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db;

        ctx.execute_with_retry("list recruitment series", move || async move {
            let series_repo = RecruitmentSeriesRepository::new(db);
            let series = series_repo.get_all().await?;

            Ok(series.into_iter().map(RecruitmentSeriesDto::from).collect())
        })
        .await
    }
}
