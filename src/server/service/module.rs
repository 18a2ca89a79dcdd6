//! Module administration and the lecturer's view of their modules.
//!
//! Requirement edits are the only counter writes outside the application workflow, and they
//! go through the same conditional update so held positions are never lost.

use entity::{module::ModuleStatus, user::UserRole};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::{
        application::{ApplicationDto, ModuleApplicationDto},
        module::{CreateModuleDto, ModuleDto, UpdateRequirementsDto},
    },
    server::{
        data::{
            module::ModuleRepository, module_coordinator::ModuleCoordinatorRepository,
            recruitment_series::RecruitmentSeriesRepository,
            ta_application::TaApplicationRepository, user::UserRepository,
        },
        error::{auth::AuthError, workflow::WorkflowError, Error},
        model::{db::ModuleModel, role::ApplicantRole},
        service::retry::RetryContext,
    },
};

pub struct ModuleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModuleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending module and links its coordinators.
    ///
    /// # Returns
    /// - `Ok(ModuleDto)` - The created module
    /// - `Err(Error::WorkflowError(SeriesNotFound))` - Series does not exist
    /// - `Err(Error::ValidationError)` - Negative counts, non-positive hours, or a coordinator
    ///   who is not a lecturer
    pub async fn create_module(&self, module: CreateModuleDto) -> Result<ModuleDto, Error> {
        if module.code.trim().is_empty() || module.name.trim().is_empty() {
            return Err(Error::ValidationError(
                "Module code and name must not be empty".to_string(),
            ));
        }
        validate_requirements(
            module.required_undergraduate_ta_count,
            module.required_postgraduate_ta_count,
            Some(module.required_ta_hours),
        )?;

        let txn = self.db.begin().await?;

        match create_module_in_txn(&txn, &module).await {
            Ok(model) => {
                txn.commit().await?;

                tracing::debug!(
                    "Created module ID {} ({}) with {} coordinator(s)",
                    model.id,
                    model.code,
                    module.coordinator_ids.len()
                );

                Ok(model.into())
            }
            Err(e) => {
                txn.rollback().await?;

                Err(e)
            }
        }
    }

    /// Opens a module to applicants.
    ///
    /// Advertising an already advertised module is a no-op, a closed module can't be reopened.
    pub async fn advertise_module(&self, module_id: i32) -> Result<ModuleDto, Error> {
        let module_repo = ModuleRepository::new(self.db);

        let module = module_repo
            .get(module_id)
            .await?
            .ok_or(WorkflowError::ModuleNotFound(module_id))?;

        match module.module_status {
            ModuleStatus::Closed => return Err(WorkflowError::ModuleClosed(module_id).into()),
            ModuleStatus::Advertised => return Ok(module.into()),
            ModuleStatus::Pending => {}
        }

        module_repo
            .set_status(module_id, ModuleStatus::Advertised)
            .await?;

        let module = module_repo
            .get(module_id)
            .await?
            .ok_or(WorkflowError::ModuleNotFound(module_id))?;

        tracing::debug!("Module ID {} is now advertised", module_id);

        Ok(module.into())
    }

    /// Closes a module to further applications.
    ///
    /// Pending applications can still be decided or withdrawn. Closing is final and
    /// closing a closed module returns it unchanged.
    pub async fn close_module(&self, module_id: i32) -> Result<ModuleDto, Error> {
        let module_repo = ModuleRepository::new(self.db);

        let module = module_repo
            .get(module_id)
            .await?
            .ok_or(WorkflowError::ModuleNotFound(module_id))?;

        if module.module_status == ModuleStatus::Closed {
            return Ok(module.into());
        }

        module_repo
            .set_status(module_id, ModuleStatus::Closed)
            .await?;

        let module = module_repo
            .get(module_id)
            .await?
            .ok_or(WorkflowError::ModuleNotFound(module_id))?;

        tracing::debug!("Module ID {} is now closed", module_id);

        Ok(module.into())
    }

    /// Advertised modules still wanting TAs of the user's role that the user hasn't applied to.
    pub async fn list_requests(&self, user_id: i32) -> Result<Vec<ModuleDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db;

        ctx.execute_with_retry(
            &format!("open module requests for user ID {}", user_id),
            move || async move {
                let user = UserRepository::new(db)
                    .get(user_id)
                    .await?
                    .ok_or(WorkflowError::UserNotFound(user_id))?;
                let role = ApplicantRole::try_from(user.role)?;

                let applied_module_ids = TaApplicationRepository::new(db)
                    .get_module_ids_by_user(user_id)
                    .await?;

                let modules = ModuleRepository::new(db)
                    .get_advertised_for_role(role, applied_module_ids)
                    .await?;

                Ok(modules.into_iter().map(ModuleDto::from).collect())
            },
        )
        .await
    }

    pub async fn coordinated_modules(&self, user_id: i32) -> Result<Vec<ModuleDto>, Error> {
        let modules = ModuleRepository::new(self.db)
            .get_coordinated(user_id)
            .await?;

        Ok(modules.into_iter().map(ModuleDto::from).collect())
    }

    /// Applications for a module with applicant details, visible to its coordinators only.
    pub async fn module_applications(
        &self,
        module_id: i32,
        user_id: i32,
    ) -> Result<Vec<ModuleApplicationDto>, Error> {
        ModuleRepository::new(self.db)
            .get(module_id)
            .await?
            .ok_or(WorkflowError::ModuleNotFound(module_id))?;

        require_coordinator(self.db, module_id, user_id).await?;

        let applications = TaApplicationRepository::new(self.db)
            .get_many_by_module_with_applicant(module_id)
            .await?;

        Ok(applications
            .into_iter()
            .map(|(application, applicant)| ModuleApplicationDto {
                application: ApplicationDto::from(application),
                applicant: applicant.into(),
            })
            .collect())
    }

    /// Changes the TA headcounts, and optionally the weekly hours, of a module.
    ///
    /// # Returns
    /// - `Ok(ModuleDto)` - The updated module
    /// - `Err(Error::WorkflowError(ModuleNotFound))` - Module does not exist
    /// - `Err(Error::AuthError(Forbidden))` - User does not coordinate the module
    /// - `Err(Error::ValidationError)` - A headcount below the positions already held, or an
    ///   hours change after applications exist
    pub async fn update_requirements(
        &self,
        module_id: i32,
        user_id: i32,
        requirements: UpdateRequirementsDto,
    ) -> Result<ModuleDto, Error> {
        validate_requirements(
            requirements.required_undergraduate_ta_count,
            requirements.required_postgraduate_ta_count,
            requirements.required_ta_hours,
        )?;

        let txn = self.db.begin().await?;

        match update_requirements_in_txn(&txn, module_id, user_id, &requirements).await {
            Ok(model) => {
                txn.commit().await?;

                tracing::debug!(
                    "Updated requirements for module ID {}: {} undergraduate, {} postgraduate",
                    module_id,
                    model.required_undergraduate_ta_count,
                    model.required_postgraduate_ta_count
                );

                Ok(model.into())
            }
            Err(e) => {
                txn.rollback().await?;

                Err(e)
            }
        }
    }
}

/// Fails with `Forbidden` unless `user_id` coordinates the module
pub(crate) async fn require_coordinator<C: sea_orm::ConnectionTrait>(
    db: &C,
    module_id: i32,
    user_id: i32,
) -> Result<(), Error> {
    let is_coordinator = ModuleCoordinatorRepository::new(db)
        .is_coordinator(module_id, user_id)
        .await?;

    if !is_coordinator {
        return Err(AuthError::Forbidden(format!(
            "User ID {} does not coordinate module ID {}",
            user_id, module_id
        ))
        .into());
    }

    Ok(())
}

fn validate_requirements(
    required_undergraduate: i32,
    required_postgraduate: i32,
    required_ta_hours: Option<f64>,
) -> Result<(), Error> {
    if required_undergraduate < 0 || required_postgraduate < 0 {
        return Err(Error::ValidationError(
            "Required TA counts must not be negative".to_string(),
        ));
    }

    if let Some(hours) = required_ta_hours {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(Error::ValidationError(
                "Required TA hours must be positive".to_string(),
            ));
        }
    }

    Ok(())
}

async fn create_module_in_txn(
    txn: &DatabaseTransaction,
    module: &CreateModuleDto,
) -> Result<ModuleModel, Error> {
    RecruitmentSeriesRepository::new(txn)
        .get(module.recruitment_series_id)
        .await?
        .ok_or(WorkflowError::SeriesNotFound(module.recruitment_series_id))?;

    let user_repo = UserRepository::new(txn);
    for coordinator_id in &module.coordinator_ids {
        let user = user_repo
            .get(*coordinator_id)
            .await?
            .ok_or(WorkflowError::UserNotFound(*coordinator_id))?;

        if user.role != UserRole::Lecturer {
            return Err(Error::ValidationError(format!(
                "User ID {} is not a lecturer and cannot coordinate a module",
                user.id
            )));
        }
    }

    let model = ModuleRepository::new(txn).create(module).await?;

    let mut coordinator_ids = module.coordinator_ids.clone();
    coordinator_ids.sort_unstable();
    coordinator_ids.dedup();

    ModuleCoordinatorRepository::new(txn)
        .create_many(model.id, &coordinator_ids)
        .await?;

    Ok(model)
}

async fn update_requirements_in_txn(
    txn: &DatabaseTransaction,
    module_id: i32,
    user_id: i32,
    requirements: &UpdateRequirementsDto,
) -> Result<ModuleModel, Error> {
    let module_repo = ModuleRepository::new(txn);

    // Applications lock the same row before debiting hours, so the count below stays accurate
    let module = module_repo
        .get_for_update(module_id)
        .await?
        .ok_or(WorkflowError::ModuleNotFound(module_id))?;

    require_coordinator(txn, module_id, user_id).await?;

    let hours = requirements
        .required_ta_hours
        .filter(|hours| (hours - module.required_ta_hours).abs() > f64::EPSILON);

    if hours.is_some() {
        let application_count = TaApplicationRepository::new(txn)
            .count_by_module(module_id)
            .await?;

        if application_count > 0 {
            return Err(Error::ValidationError(
                "Required TA hours cannot change once applications have been made".to_string(),
            ));
        }
    }

    let updated = module_repo
        .update_requirements(
            module_id,
            requirements.required_undergraduate_ta_count,
            requirements.required_postgraduate_ta_count,
            hours,
        )
        .await?;

    if !updated {
        return Err(Error::ValidationError(
            "Required TA count cannot be lower than the positions already held".to_string(),
        ));
    }

    module_repo
        .get(module_id)
        .await?
        .ok_or_else(|| Error::InternalError(format!("Module ID {} vanished during update", module_id)))
}

#[cfg(test)]
mod tests;
