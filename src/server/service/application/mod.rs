//! Application workflow service.
//!
//! Owns every write to application status, module counters and the per-series hour ledger.
//! Each operation runs in a single transaction that is re-run from scratch when the database
//! reports a transient failure. Within a transaction the contended rows are changed only
//! through conditional updates, so concurrent requests can't oversubscribe a module or
//! overdraw a ledger.

pub mod apply;
pub mod delete;
pub mod review;

#[cfg(test)]
mod tests;

use std::{collections::HashMap, sync::Arc};

use entity::ta_application::ApplicationStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction};

use crate::{
    model::{
        application::{AcceptedModuleDto, ApplicationDto, AppliedModuleDto},
        module::{CoordinatorDto, ModuleDto},
    },
    server::{
        data::{
            applied_modules::AppliedModulesRepository,
            module_coordinator::ModuleCoordinatorRepository,
            ta_application::TaApplicationRepository, user::UserRepository,
        },
        error::{workflow::WorkflowError, Error},
        notify::Notifier,
    },
};

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
    notifier: Arc<dyn Notifier>,
}

impl<'a> ApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: Arc<dyn Notifier>) -> Self {
        Self { db, notifier }
    }

    /// The user's applications, each with its module and the module's coordinators.
    pub async fn applied_modules(&self, user_id: i32) -> Result<Vec<AppliedModuleDto>, Error> {
        self.ensure_user_exists(user_id).await?;

        let applications = TaApplicationRepository::new(self.db)
            .get_many_by_user_with_module(user_id, None)
            .await?;

        let module_ids: Vec<i32> = applications.iter().map(|(_, module)| module.id).collect();
        let mut coordinators: HashMap<i32, Vec<CoordinatorDto>> = HashMap::new();
        for (module_id, user) in ModuleCoordinatorRepository::new(self.db)
            .get_coordinators_by_module_ids(&module_ids)
            .await?
        {
            coordinators
                .entry(module_id)
                .or_default()
                .push(CoordinatorDto::from(user));
        }

        Ok(applications
            .into_iter()
            .map(|(application, module)| AppliedModuleDto {
                coordinators: coordinators.remove(&module.id).unwrap_or_default(),
                application: ApplicationDto::from(application),
                module: ModuleDto::from(module),
            })
            .collect())
    }

    /// The user's accepted applications with module details.
    pub async fn accepted_modules(&self, user_id: i32) -> Result<Vec<AcceptedModuleDto>, Error> {
        self.ensure_user_exists(user_id).await?;

        let applications = TaApplicationRepository::new(self.db)
            .get_many_by_user_with_module(user_id, Some(ApplicationStatus::Accepted))
            .await?;

        Ok(applications
            .into_iter()
            .map(|(application, module)| AcceptedModuleDto {
                application: ApplicationDto::from(application),
                module: ModuleDto::from(module),
            })
            .collect())
    }

    async fn ensure_user_exists(&self, user_id: i32) -> Result<(), Error> {
        UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or(WorkflowError::UserNotFound(user_id))?;

        Ok(())
    }
}

/// Returns `hours` to a ledger that was just read in the same transaction.
pub(super) async fn refund_hours<C: ConnectionTrait>(
    ledger_repo: &AppliedModulesRepository<'_, C>,
    ledger_id: i32,
    hours: f64,
) -> Result<(), Error> {
    if !ledger_repo.credit_hours(ledger_id, hours).await? {
        return Err(Error::InternalError(format!(
            "Hour ledger ID {} vanished before a refund of {} hours",
            ledger_id, hours
        )));
    }

    Ok(())
}

/// Commits `txn` when `result` is Ok and rolls it back otherwise.
///
/// Business-rule refusals are logged at warn, other errors are left to the caller.
pub(super) async fn finish<T>(
    txn: DatabaseTransaction,
    result: Result<T, Error>,
    description: &str,
) -> Result<T, Error> {
    match result {
        Ok(value) => {
            txn.commit().await?;

            Ok(value)
        }
        Err(e) => {
            txn.rollback().await?;

            if matches!(
                e,
                Error::WorkflowError(_) | Error::ValidationError(_) | Error::AuthError(_)
            ) {
                tracing::warn!("Refused {}: {}", description, e);
            }

            Err(e)
        }
    }
}
