use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260302_000005_ta_application::TaApplication,
    m20260302_000006_applied_modules::AppliedModules,
};

static IDX_APPLIED_MODULES_ENTRY_LEDGER_ID: &str = "idx-applied_modules_entry-applied_modules_id";
static FK_APPLIED_MODULES_ENTRY_LEDGER_ID: &str = "fk-applied_modules_entry-applied_modules_id";
static FK_APPLIED_MODULES_ENTRY_APPLICATION_ID: &str =
    "fk-applied_modules_entry-ta_application_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppliedModulesEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(AppliedModulesEntry::Id))
                    .col(integer(AppliedModulesEntry::AppliedModulesId))
                    .col(integer_uniq(AppliedModulesEntry::TaApplicationId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLIED_MODULES_ENTRY_LEDGER_ID)
                    .table(AppliedModulesEntry::Table)
                    .col(AppliedModulesEntry::AppliedModulesId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLIED_MODULES_ENTRY_LEDGER_ID)
                    .from_tbl(AppliedModulesEntry::Table)
                    .from_col(AppliedModulesEntry::AppliedModulesId)
                    .to_tbl(AppliedModules::Table)
                    .to_col(AppliedModules::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLIED_MODULES_ENTRY_APPLICATION_ID)
                    .from_tbl(AppliedModulesEntry::Table)
                    .from_col(AppliedModulesEntry::TaApplicationId)
                    .to_tbl(TaApplication::Table)
                    .to_col(TaApplication::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppliedModulesEntry::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AppliedModulesEntry {
    Table,
    Id,
    AppliedModulesId,
    TaApplicationId,
}
