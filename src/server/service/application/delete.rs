use entity::user::UserRole;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{
        applied_modules::AppliedModulesRepository, module::ModuleRepository,
        ta_application::TaApplicationRepository, user::UserRepository,
    },
    error::{auth::AuthError, workflow::WorkflowError, Error},
    model::{
        role::ApplicantRole,
        status::{withdrawal_delta, withdrawal_refunds_hours},
    },
    service::{
        application::{finish, refund_hours, ApplicationService},
        retry::RetryContext,
    },
};

impl<'a> ApplicationService<'a> {
    /// Deletes an application and reverses its effect on the module and hour ledger.
    ///
    /// Only the applicant or an admin may delete. When the applicant, module or ledger can't
    /// be found only the application and its ledger entry are removed. A decision landing
    /// between the read and the delete re-runs the whole operation against the new status.
    pub async fn delete(
        &self,
        application_id: i32,
        actor_id: i32,
        actor_role: UserRole,
    ) -> Result<(), Error> {
        let description = format!(
            "deletion of application ID {} by user ID {}",
            application_id, actor_id
        );

        let ctx = RetryContext::new();
        let db = self.db;
        let description_ref = description.as_str();

        ctx.execute_with_retry(&description, move || {
            delete_once(db, application_id, actor_id, actor_role, description_ref)
        })
        .await?;

        tracing::debug!("Completed {}", description);

        Ok(())
    }
}

async fn delete_once(
    db: &DatabaseConnection,
    application_id: i32,
    actor_id: i32,
    actor_role: UserRole,
    description: &str,
) -> Result<(), Error> {
    let txn = db.begin().await?;
    let result = delete_in_txn(&txn, application_id, actor_id, actor_role).await;

    finish(txn, result, description).await
}

async fn delete_in_txn(
    txn: &DatabaseTransaction,
    application_id: i32,
    actor_id: i32,
    actor_role: UserRole,
) -> Result<(), Error> {
    let application_repo = TaApplicationRepository::new(txn);
    let application = application_repo
        .get_for_update(application_id)
        .await?
        .ok_or(WorkflowError::ApplicationNotFound(application_id))?;

    if application.user_id != actor_id && actor_role != UserRole::Admin {
        return Err(AuthError::Forbidden(format!(
            "User ID {} may not delete application ID {}",
            actor_id, application_id
        ))
        .into());
    }

    let ledger_repo = AppliedModulesRepository::new(txn);
    let module_repo = ModuleRepository::new(txn);

    ledger_repo.remove_application(application.id).await?;

    // Reversal below is computed from the status read above, so the row must still hold it
    if !application_repo
        .delete_if_status(application.id, application.status)
        .await?
    {
        return Err(Error::ConcurrentUpdate(format!(
            "application ID {} changed status while being deleted",
            application.id
        )));
    }

    let applicant = UserRepository::new(txn).get(application.user_id).await?;
    let module = module_repo.get(application.module_id).await?;
    let ledger = match (&applicant, &module) {
        (Some(applicant), Some(module)) => {
            ledger_repo
                .find_by_user_and_series(applicant.id, module.recruitment_series_id)
                .await?
        }
        _ => None,
    };

    match (applicant, module, ledger) {
        (Some(applicant), Some(module), Some(ledger)) => {
            let role = ApplicantRole::try_from(applicant.role).map_err(|_| {
                Error::InternalError(format!(
                    "Applicant user ID {} for application ID {} no longer holds a student role",
                    applicant.id, application.id
                ))
            })?;

            if withdrawal_refunds_hours(application.status) {
                refund_hours(&ledger_repo, ledger.id, module.required_ta_hours).await?;
            }

            if !module_repo
                .adjust_counters(module.id, role, withdrawal_delta(application.status))
                .await?
            {
                return Err(Error::InternalError(format!(
                    "Counters of module ID {} refused withdrawal of {:?} application ID {}",
                    module.id, application.status, application.id
                )));
            }
        }
        _ => {
            tracing::warn!(
                "Deleted application ID {} without reversal: applicant, module or hour ledger missing",
                application.id
            );
        }
    }

    Ok(())
}
