use entity::{module::ModuleStatus, recruitment_series::SeriesStatus};
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::application::{ApplicationDto, ApplyRequestDto},
    server::{
        data::{
            applied_modules::AppliedModulesRepository, module::ModuleRepository,
            recruitment_series::RecruitmentSeriesRepository,
            ta_application::TaApplicationRepository, user::UserRepository,
        },
        error::{workflow::WorkflowError, Error},
        model::{db::TaApplicationModel, role::ApplicantRole},
        service::{
            application::{finish, ApplicationService},
            retry::RetryContext,
        },
    },
};

impl<'a> ApplicationService<'a> {
    /// Applies for a TA position on a module.
    ///
    /// Debits the module's weekly hours from the applicant's ledger for the series, creating
    /// the ledger from the series' hour limit for the applicant's role on first use, and takes
    /// one of the module's positions for that role.
    ///
    /// # Returns
    /// - `Ok(ApplicationDto)` - The new pending application
    /// - `Err(Error::ValidationError)` - Non-student role, role mismatch, module outside the
    ///   series, or hours differing from the module's
    /// - `Err(Error::WorkflowError)` - Duplicate application, insufficient hours, positions
    ///   filled, module not advertised, series archived, or user/module/series not found
    /// - `Err(Error::ConcurrentUpdate)` - Another first application in the series created the
    ///   ledger on every attempt
    pub async fn apply(&self, request: ApplyRequestDto) -> Result<ApplicationDto, Error> {
        let description = format!(
            "application by user ID {} for module ID {}",
            request.user_id, request.module_id
        );

        let ctx = RetryContext::new();
        let db = self.db;
        let request = &request;
        let description_ref = description.as_str();

        let application = ctx
            .execute_with_retry(&description, move || {
                apply_once(db, request, description_ref)
            })
            .await?;

        tracing::debug!("Created application ID {} ({})", application.id, description);

        Ok(application.into())
    }
}

async fn apply_once(
    db: &DatabaseConnection,
    request: &ApplyRequestDto,
    description: &str,
) -> Result<TaApplicationModel, Error> {
    let txn = db.begin().await?;
    let result = apply_in_txn(&txn, request).await;

    finish(txn, result, description).await
}

async fn apply_in_txn(
    txn: &DatabaseTransaction,
    request: &ApplyRequestDto,
) -> Result<TaApplicationModel, Error> {
    let role = ApplicantRole::try_from(request.user_role)?;

    let user = UserRepository::new(txn)
        .get(request.user_id)
        .await?
        .ok_or(WorkflowError::UserNotFound(request.user_id))?;

    if user.role != request.user_role {
        return Err(Error::ValidationError(format!(
            "User ID {} is not registered with the given role",
            user.id
        )));
    }

    // Held until commit so a concurrent hours edit can't change what is debited below
    let module_repo = ModuleRepository::new(txn);
    let module = module_repo
        .get_for_update(request.module_id)
        .await?
        .ok_or(WorkflowError::ModuleNotFound(request.module_id))?;

    if module.recruitment_series_id != request.rec_series_id {
        return Err(Error::ValidationError(format!(
            "Module ID {} does not belong to recruitment series ID {}",
            module.id, request.rec_series_id
        )));
    }

    let hours = module.required_ta_hours;
    if let Some(requested) = request.ta_hours {
        if (requested - hours).abs() > f64::EPSILON {
            return Err(Error::ValidationError(format!(
                "Module ID {} requires {} hours per week, not {}",
                module.id, hours, requested
            )));
        }
    }

    if module.module_status != ModuleStatus::Advertised {
        return Err(WorkflowError::ModuleNotAdvertised(module.id).into());
    }

    let series = RecruitmentSeriesRepository::new(txn)
        .get(module.recruitment_series_id)
        .await?
        .ok_or(WorkflowError::SeriesNotFound(module.recruitment_series_id))?;

    if series.status != SeriesStatus::Active {
        return Err(WorkflowError::SeriesArchived(series.id).into());
    }

    let application_repo = TaApplicationRepository::new(txn);
    if application_repo
        .find_by_user_and_module(user.id, module.id)
        .await?
        .is_some()
    {
        return Err(WorkflowError::DuplicateApplication.into());
    }

    let ledger_repo = AppliedModulesRepository::new(txn);
    let ledger = ledger_repo
        .find_by_user_and_series(user.id, module.recruitment_series_id)
        .await?;

    if let Some(ledger) = &ledger {
        if ledger.available_hours_per_week < hours {
            return Err(WorkflowError::InsufficientHours.into());
        }
    }

    if !module_repo.claim_position(module.id, role).await? {
        return Err(WorkflowError::PositionsFilled.into());
    }

    let application = application_repo
        .create(user.id, module.id)
        .await
        .map_err(application_insert_error)?;

    let ledger = match ledger {
        Some(ledger) => {
            if !ledger_repo.debit_hours(ledger.id, hours).await? {
                return Err(WorkflowError::InsufficientHours.into());
            }

            ledger
        }
        None => {
            let limit = role.hour_limit(&series);
            if limit < hours {
                return Err(WorkflowError::InsufficientHours.into());
            }

            ledger_repo
                .create(user.id, series.id, limit - hours)
                .await
                .map_err(ledger_insert_error)?
        }
    };

    ledger_repo
        .append_application(ledger.id, application.id)
        .await?;

    Ok(application)
}

/// A unique violation on insert means the same user already applied to the module.
pub(super) fn application_insert_error(err: DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => WorkflowError::DuplicateApplication.into(),
        _ => err.into(),
    }
}

/// A unique violation on insert means a concurrent first application in the series created
/// the ledger. The retry reads that ledger and debits it instead.
pub(super) fn ledger_insert_error(err: DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => Error::ConcurrentUpdate(format!(
            "hour ledger created concurrently: {}",
            err
        )),
        _ => err.into(),
    }
}
