pub use sea_orm_migration::prelude::*;

mod m20260302_000001_user;
mod m20260302_000002_recruitment_series;
mod m20260302_000003_module;
mod m20260302_000004_module_coordinator;
mod m20260302_000005_ta_application;
mod m20260302_000006_applied_modules;
mod m20260302_000007_applied_modules_entry;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260302_000001_user::Migration),
            Box::new(m20260302_000002_recruitment_series::Migration),
            Box::new(m20260302_000003_module::Migration),
            Box::new(m20260302_000004_module_coordinator::Migration),
            Box::new(m20260302_000005_ta_application::Migration),
            Box::new(m20260302_000006_applied_modules::Migration),
            Box::new(m20260302_000007_applied_modules_entry::Migration),
        ]
    }
}
