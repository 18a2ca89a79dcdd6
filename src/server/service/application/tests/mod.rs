mod delete;
mod listings;

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use entity::{
    module::ModuleStatus, recruitment_series::SeriesStatus, ta_application::ApplicationStatus,
    user::UserRole,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tarecruit_test_utils::prelude::*;
use tokio::sync::mpsc;

use crate::{
    model::application::ApplyRequestDto,
    server::{
        data::{
            applied_modules::AppliedModulesRepository, module::ModuleRepository,
            ta_application::TaApplicationRepository,
        },
        error::{auth::AuthError, retry::ErrorRetryStrategy, workflow::WorkflowError, Error},
        model::db::{AppliedModulesModel, ModuleModel, UserModel},
        notify::{AcceptanceNotice, LogNotifier, Notifier},
        service::application::{
            apply::{application_insert_error, ledger_insert_error},
            refund_hours, ApplicationService,
        },
    },
};

/// Forwards every notice to a channel the test can await
struct ChannelNotifier(mpsc::UnboundedSender<AcceptanceNotice>);

#[async_trait]
impl Notifier for ChannelNotifier {
    async fn application_accepted(&self, notice: &AcceptanceNotice) -> Result<(), Error> {
        let _ = self.0.send(notice.clone());
        Ok(())
    }
}

fn service(db: &DatabaseConnection) -> ApplicationService<'_> {
    ApplicationService::new(db, Arc::new(LogNotifier))
}

fn request(user: &UserModel, module: &ModuleModel) -> ApplyRequestDto {
    ApplyRequestDto {
        user_id: user.id,
        user_role: user.role,
        module_id: module.id,
        rec_series_id: module.recruitment_series_id,
        ta_hours: Some(module.required_ta_hours),
    }
}

async fn reload_module(db: &DatabaseConnection, module_id: i32) -> ModuleModel {
    ModuleRepository::new(db)
        .get(module_id)
        .await
        .unwrap()
        .unwrap()
}

async fn ledger(
    db: &DatabaseConnection,
    user_id: i32,
    recruitment_series_id: i32,
) -> Option<AppliedModulesModel> {
    AppliedModulesRepository::new(db)
        .find_by_user_and_series(user_id, recruitment_series_id)
        .await
        .unwrap()
}

async fn ledger_application_ids(db: &DatabaseConnection, ledger_id: i32) -> Vec<i32> {
    AppliedModulesRepository::new(db)
        .get_application_ids(ledger_id)
        .await
        .unwrap()
}

async fn application_count(db: &DatabaseConnection) -> u64 {
    entity::prelude::TaApplication::find()
        .count(db)
        .await
        .unwrap()
}
