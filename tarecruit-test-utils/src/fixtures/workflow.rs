//! Database fixtures for the recruitment workflow.
//!
//! Each insert writes a row with realistic defaults and returns the stored model. Counter
//! columns are written directly so tests can start from any state without replaying the
//! workflow.

use chrono::{Duration, Utc};
use entity::{
    module::ModuleStatus, recruitment_series::SeriesStatus, ta_application::ApplicationStatus,
    user::UserRole,
};
use sea_orm::{ActiveValue, EntityTrait, PaginatorTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn workflow<'a>(&'a mut self) -> WorkflowFixtures<'a> {
        WorkflowFixtures { context: self }
    }
}

/// Capacity and status of a module fixture
#[derive(Debug, Clone)]
pub struct ModuleSpec {
    pub status: ModuleStatus,
    pub required_ta_hours: f64,
    pub required_undergraduate: i32,
    pub required_postgraduate: i32,
}

impl Default for ModuleSpec {
    fn default() -> Self {
        Self {
            status: ModuleStatus::Advertised,
            required_ta_hours: 4.0,
            required_undergraduate: 2,
            required_postgraduate: 2,
        }
    }
}

impl ModuleSpec {
    pub fn status(mut self, status: ModuleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn hours(mut self, hours: f64) -> Self {
        self.required_ta_hours = hours;
        self
    }

    pub fn positions(mut self, undergraduate: i32, postgraduate: i32) -> Self {
        self.required_undergraduate = undergraduate;
        self.required_postgraduate = postgraduate;
        self
    }
}

pub struct WorkflowFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> WorkflowFixtures<'a> {
    /// Insert a user with a unique generated email
    pub async fn insert_user(&self, role: UserRole) -> Result<entity::user::Model, TestError> {
        let existing = entity::prelude::User::find()
            .count(&self.context.db)
            .await?;
        let n = existing + 1;

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(format!("user{}@example.ac.uk", n)),
            name: ActiveValue::Set(format!("Test User {}", n)),
            role: ActiveValue::Set(role),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    /// Insert an active series using the default 6 and 10 hour limits
    pub async fn insert_series(&self) -> Result<entity::recruitment_series::Model, TestError> {
        self.insert_series_with_limits(6.0, 10.0, SeriesStatus::Active)
            .await
    }

    pub async fn insert_series_with_limits(
        &self,
        undergrad_hour_limit: f64,
        postgrad_hour_limit: f64,
        status: SeriesStatus,
    ) -> Result<entity::recruitment_series::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::RecruitmentSeries::insert(entity::recruitment_series::ActiveModel {
                name: ActiveValue::Set("Semester 1 2026/27".to_string()),
                application_due_date: ActiveValue::Set(now + Duration::days(30)),
                undergrad_hour_limit: ActiveValue::Set(undergrad_hour_limit),
                postgrad_hour_limit: ActiveValue::Set(postgrad_hour_limit),
                status: ActiveValue::Set(status),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert a module with untouched counters, `remaining` equal to `required` for each role
    pub async fn insert_module(
        &self,
        recruitment_series_id: i32,
        spec: ModuleSpec,
    ) -> Result<entity::module::Model, TestError> {
        let now = Utc::now().naive_utc();
        let existing = entity::prelude::Module::find()
            .count(&self.context.db)
            .await?;

        Ok(entity::prelude::Module::insert(entity::module::ActiveModel {
            recruitment_series_id: ActiveValue::Set(recruitment_series_id),
            code: ActiveValue::Set(format!("COMP{}", 1000 + existing)),
            name: ActiveValue::Set(format!("Test Module {}", existing + 1)),
            semester: ActiveValue::Set("1".to_string()),
            module_status: ActiveValue::Set(spec.status),
            required_ta_hours: ActiveValue::Set(spec.required_ta_hours),
            required_undergraduate_ta_count: ActiveValue::Set(spec.required_undergraduate),
            applied_undergraduate_count: ActiveValue::Set(0),
            undergraduate_remaining: ActiveValue::Set(spec.required_undergraduate),
            undergraduate_reviewed: ActiveValue::Set(0),
            undergraduate_accepted: ActiveValue::Set(0),
            undergraduate_doc_submitted: ActiveValue::Set(0),
            undergraduate_appointed: ActiveValue::Set(0),
            required_postgraduate_ta_count: ActiveValue::Set(spec.required_postgraduate),
            applied_postgraduate_count: ActiveValue::Set(0),
            postgraduate_remaining: ActiveValue::Set(spec.required_postgraduate),
            postgraduate_reviewed: ActiveValue::Set(0),
            postgraduate_accepted: ActiveValue::Set(0),
            postgraduate_doc_submitted: ActiveValue::Set(0),
            postgraduate_appointed: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn insert_coordinator(
        &self,
        module_id: i32,
        user_id: i32,
    ) -> Result<entity::module_coordinator::Model, TestError> {
        Ok(
            entity::prelude::ModuleCoordinator::insert(entity::module_coordinator::ActiveModel {
                module_id: ActiveValue::Set(module_id),
                user_id: ActiveValue::Set(user_id),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert an advertised module in `recruitment_series_id` together with a lecturer
    /// coordinating it
    pub async fn insert_coordinated_module(
        &self,
        recruitment_series_id: i32,
        spec: ModuleSpec,
    ) -> Result<(entity::module::Model, entity::user::Model), TestError> {
        let module = self.insert_module(recruitment_series_id, spec).await?;
        let lecturer = self.insert_user(UserRole::Lecturer).await?;
        self.insert_coordinator(module.id, lecturer.id).await?;

        Ok((module, lecturer))
    }

    /// Insert an application row without touching module counters or the hour ledger
    pub async fn insert_application(
        &self,
        user_id: i32,
        module_id: i32,
        status: ApplicationStatus,
    ) -> Result<entity::ta_application::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::TaApplication::insert(entity::ta_application::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                module_id: ActiveValue::Set(module_id),
                status: ActiveValue::Set(status),
                rejection_reason: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_ledger(
        &self,
        user_id: i32,
        recruitment_series_id: i32,
        available_hours_per_week: f64,
    ) -> Result<entity::applied_modules::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::AppliedModules::insert(entity::applied_modules::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                recruitment_series_id: ActiveValue::Set(recruitment_series_id),
                available_hours_per_week: ActiveValue::Set(available_hours_per_week),
                is_doc_submitted: ActiveValue::Set(false),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_ledger_entry(
        &self,
        applied_modules_id: i32,
        ta_application_id: i32,
    ) -> Result<entity::applied_modules_entry::Model, TestError> {
        Ok(entity::prelude::AppliedModulesEntry::insert(
            entity::applied_modules_entry::ActiveModel {
                applied_modules_id: ActiveValue::Set(applied_modules_id),
                ta_application_id: ActiveValue::Set(ta_application_id),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }
}
