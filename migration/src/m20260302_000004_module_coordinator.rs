use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260302_000001_user::Users, m20260302_000003_module::Module};

static IDX_MODULE_COORDINATOR_MODULE_USER: &str = "idx-module_coordinator-module_id-user_id";
static FK_MODULE_COORDINATOR_MODULE_ID: &str = "fk-module_coordinator-module_id";
static FK_MODULE_COORDINATOR_USER_ID: &str = "fk-module_coordinator-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ModuleCoordinator::Table)
                    .if_not_exists()
                    .col(pk_auto(ModuleCoordinator::Id))
                    .col(integer(ModuleCoordinator::ModuleId))
                    .col(integer(ModuleCoordinator::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MODULE_COORDINATOR_MODULE_USER)
                    .table(ModuleCoordinator::Table)
                    .col(ModuleCoordinator::ModuleId)
                    .col(ModuleCoordinator::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MODULE_COORDINATOR_MODULE_ID)
                    .from_tbl(ModuleCoordinator::Table)
                    .from_col(ModuleCoordinator::ModuleId)
                    .to_tbl(Module::Table)
                    .to_col(Module::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MODULE_COORDINATOR_USER_ID)
                    .from_tbl(ModuleCoordinator::Table)
                    .from_col(ModuleCoordinator::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ModuleCoordinator::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ModuleCoordinator {
    Table,
    Id,
    ModuleId,
    UserId,
}
