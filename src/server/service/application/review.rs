use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::application::ApplicationDto,
    server::{
        data::{
            applied_modules::AppliedModulesRepository, module::ModuleRepository,
            ta_application::TaApplicationRepository, user::UserRepository,
        },
        error::{workflow::WorkflowError, Error},
        model::{
            db::TaApplicationModel,
            role::ApplicantRole,
            status::{decision_delta, transition, Decision},
        },
        notify::{dispatch_acceptance, AcceptanceNotice},
        service::{
            application::{finish, refund_hours, ApplicationService},
            module::require_coordinator,
            retry::RetryContext,
        },
    },
};

impl<'a> ApplicationService<'a> {
    /// Accepts a pending application on behalf of one of the module's coordinators.
    ///
    /// The applicant is notified on a background task once the decision has committed.
    pub async fn accept(
        &self,
        application_id: i32,
        reviewer_id: i32,
    ) -> Result<ApplicationDto, Error> {
        let (application, notice) = self
            .decide(application_id, reviewer_id, Decision::Accept, None)
            .await?;

        if let Some(notice) = notice {
            dispatch_acceptance(self.notifier.clone(), notice);
        }

        Ok(application.into())
    }

    /// Rejects a pending application, releasing the position and refunding the applicant's
    /// hours.
    pub async fn reject(
        &self,
        application_id: i32,
        reviewer_id: i32,
        reason: Option<String>,
    ) -> Result<ApplicationDto, Error> {
        let reason = reason
            .map(|reason| reason.trim().to_string())
            .filter(|reason| !reason.is_empty());

        let (application, _) = self
            .decide(application_id, reviewer_id, Decision::Reject, reason)
            .await?;

        Ok(application.into())
    }

    async fn decide(
        &self,
        application_id: i32,
        reviewer_id: i32,
        decision: Decision,
        reason: Option<String>,
    ) -> Result<(TaApplicationModel, Option<AcceptanceNotice>), Error> {
        let description = format!(
            "{:?} of application ID {} by user ID {}",
            decision, application_id, reviewer_id
        );

        let ctx = RetryContext::new();
        let db = self.db;
        let reason = &reason;
        let description_ref = description.as_str();

        let result = ctx
            .execute_with_retry(&description, move || {
                decide_once(
                    db,
                    application_id,
                    reviewer_id,
                    decision,
                    reason.clone(),
                    description_ref,
                )
            })
            .await?;

        tracing::debug!("Completed {}", description);

        Ok(result)
    }
}

async fn decide_once(
    db: &DatabaseConnection,
    application_id: i32,
    reviewer_id: i32,
    decision: Decision,
    reason: Option<String>,
    description: &str,
) -> Result<(TaApplicationModel, Option<AcceptanceNotice>), Error> {
    let txn = db.begin().await?;
    let result = decide_in_txn(&txn, application_id, reviewer_id, decision, reason).await;

    finish(txn, result, description).await
}

async fn decide_in_txn(
    txn: &DatabaseTransaction,
    application_id: i32,
    reviewer_id: i32,
    decision: Decision,
    reason: Option<String>,
) -> Result<(TaApplicationModel, Option<AcceptanceNotice>), Error> {
    let application_repo = TaApplicationRepository::new(txn);
    let application = application_repo
        .get(application_id)
        .await?
        .ok_or(WorkflowError::ApplicationNotFound(application_id))?;

    let module_repo = ModuleRepository::new(txn);
    let module = module_repo
        .get(application.module_id)
        .await?
        .ok_or(WorkflowError::ModuleNotFound(application.module_id))?;

    require_coordinator(txn, module.id, reviewer_id).await?;

    let new_status = transition(application.status, decision)?;

    let applicant = UserRepository::new(txn)
        .get(application.user_id)
        .await?
        .ok_or(WorkflowError::UserNotFound(application.user_id))?;
    let role = ApplicantRole::try_from(applicant.role).map_err(|_| {
        Error::InternalError(format!(
            "Applicant user ID {} for application ID {} no longer holds a student role",
            applicant.id, application.id
        ))
    })?;

    let rejection_reason = match decision {
        Decision::Accept => None,
        Decision::Reject => reason,
    };

    if !application_repo
        .set_status_if_pending(application.id, new_status, rejection_reason)
        .await?
    {
        // Decided by someone else between the read and the update
        let current = application_repo
            .get(application.id)
            .await?
            .ok_or(WorkflowError::ApplicationNotFound(application.id))?;

        return Err(WorkflowError::AlreadyProcessed(current.status).into());
    }

    if !module_repo
        .adjust_counters(module.id, role, decision_delta(decision))
        .await?
    {
        return Err(Error::InternalError(format!(
            "Counters of module ID {} refused {:?} of application ID {}",
            module.id, decision, application.id
        )));
    }

    let notice = match decision {
        Decision::Accept => Some(AcceptanceNotice {
            application_id: application.id,
            applicant_name: applicant.name,
            applicant_email: applicant.email,
            module_code: module.code,
            module_name: module.name,
        }),
        Decision::Reject => {
            let ledger_repo = AppliedModulesRepository::new(txn);
            match ledger_repo
                .find_by_user_and_series(applicant.id, module.recruitment_series_id)
                .await?
            {
                Some(ledger) => {
                    refund_hours(&ledger_repo, ledger.id, module.required_ta_hours).await?;
                }
                None => tracing::warn!(
                    "No hour ledger for user ID {} in recruitment series ID {}, skipping refund for application ID {}",
                    applicant.id,
                    module.recruitment_series_id,
                    application.id
                ),
            }

            None
        }
    };

    let application = application_repo
        .get(application.id)
        .await?
        .ok_or(WorkflowError::ApplicationNotFound(application.id))?;

    Ok((application, notice))
}
