use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260302_000001_user::Users, m20260302_000002_recruitment_series::RecruitmentSeries,
};

static IDX_APPLIED_MODULES_USER_SERIES: &str = "idx-applied_modules-user_id-recruitment_series_id";
static FK_APPLIED_MODULES_USER_ID: &str = "fk-applied_modules-user_id";
static FK_APPLIED_MODULES_RECRUITMENT_SERIES_ID: &str = "fk-applied_modules-recruitment_series_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppliedModules::Table)
                    .if_not_exists()
                    .col(pk_auto(AppliedModules::Id))
                    .col(integer(AppliedModules::UserId))
                    .col(integer(AppliedModules::RecruitmentSeriesId))
                    .col(double(AppliedModules::AvailableHoursPerWeek))
                    .col(boolean(AppliedModules::IsDocSubmitted).default(false))
                    .col(timestamp(AppliedModules::CreatedAt))
                    .col(timestamp(AppliedModules::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // One ledger per user per recruitment series
        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLIED_MODULES_USER_SERIES)
                    .table(AppliedModules::Table)
                    .col(AppliedModules::UserId)
                    .col(AppliedModules::RecruitmentSeriesId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLIED_MODULES_USER_ID)
                    .from_tbl(AppliedModules::Table)
                    .from_col(AppliedModules::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLIED_MODULES_RECRUITMENT_SERIES_ID)
                    .from_tbl(AppliedModules::Table)
                    .from_col(AppliedModules::RecruitmentSeriesId)
                    .to_tbl(RecruitmentSeries::Table)
                    .to_col(RecruitmentSeries::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppliedModules::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AppliedModules {
    Table,
    Id,
    UserId,
    RecruitmentSeriesId,
    AvailableHoursPerWeek,
    IsDocSubmitted,
    CreatedAt,
    UpdatedAt,
}
