use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260302_000001_user::Users, m20260302_000003_module::Module};

static IDX_TA_APPLICATION_USER_MODULE: &str = "idx-ta_application-user_id-module_id";
static IDX_TA_APPLICATION_MODULE_ID: &str = "idx-ta_application-module_id";
static FK_TA_APPLICATION_USER_ID: &str = "fk-ta_application-user_id";
static FK_TA_APPLICATION_MODULE_ID: &str = "fk-ta_application-module_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TaApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(TaApplication::Id))
                    .col(integer(TaApplication::UserId))
                    .col(integer(TaApplication::ModuleId))
                    .col(string_len(TaApplication::Status, 16))
                    .col(text_null(TaApplication::RejectionReason))
                    .col(timestamp(TaApplication::CreatedAt))
                    .col(timestamp(TaApplication::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // One application per user per module
        manager
            .create_index(
                Index::create()
                    .name(IDX_TA_APPLICATION_USER_MODULE)
                    .table(TaApplication::Table)
                    .col(TaApplication::UserId)
                    .col(TaApplication::ModuleId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TA_APPLICATION_MODULE_ID)
                    .table(TaApplication::Table)
                    .col(TaApplication::ModuleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TA_APPLICATION_USER_ID)
                    .from_tbl(TaApplication::Table)
                    .from_col(TaApplication::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TA_APPLICATION_MODULE_ID)
                    .from_tbl(TaApplication::Table)
                    .from_col(TaApplication::ModuleId)
                    .to_tbl(Module::Table)
                    .to_col(Module::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TaApplication::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TaApplication {
    Table,
    Id,
    UserId,
    ModuleId,
    Status,
    RejectionReason,
    CreatedAt,
    UpdatedAt,
}
