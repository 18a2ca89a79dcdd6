use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260302_000002_recruitment_series::RecruitmentSeries;

static IDX_MODULE_RECRUITMENT_SERIES_ID: &str = "idx-module-recruitment_series_id";
static FK_MODULE_RECRUITMENT_SERIES_ID: &str = "fk-module-recruitment_series_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Module::Table)
                    .if_not_exists()
                    .col(pk_auto(Module::Id))
                    .col(integer(Module::RecruitmentSeriesId))
                    .col(string(Module::Code))
                    .col(string(Module::Name))
                    .col(string(Module::Semester))
                    .col(string_len(Module::ModuleStatus, 16))
                    .col(double(Module::RequiredTaHours))
                    .col(integer(Module::RequiredUndergraduateTaCount).default(0))
                    .col(integer(Module::AppliedUndergraduateCount).default(0))
                    .col(integer(Module::UndergraduateRemaining).default(0))
                    .col(integer(Module::UndergraduateReviewed).default(0))
                    .col(integer(Module::UndergraduateAccepted).default(0))
                    .col(integer(Module::UndergraduateDocSubmitted).default(0))
                    .col(integer(Module::UndergraduateAppointed).default(0))
                    .col(integer(Module::RequiredPostgraduateTaCount).default(0))
                    .col(integer(Module::AppliedPostgraduateCount).default(0))
                    .col(integer(Module::PostgraduateRemaining).default(0))
                    .col(integer(Module::PostgraduateReviewed).default(0))
                    .col(integer(Module::PostgraduateAccepted).default(0))
                    .col(integer(Module::PostgraduateDocSubmitted).default(0))
                    .col(integer(Module::PostgraduateAppointed).default(0))
                    .col(timestamp(Module::CreatedAt))
                    .col(timestamp(Module::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MODULE_RECRUITMENT_SERIES_ID)
                    .table(Module::Table)
                    .col(Module::RecruitmentSeriesId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MODULE_RECRUITMENT_SERIES_ID)
                    .from_tbl(Module::Table)
                    .from_col(Module::RecruitmentSeriesId)
                    .to_tbl(RecruitmentSeries::Table)
                    .to_col(RecruitmentSeries::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MODULE_RECRUITMENT_SERIES_ID)
                    .table(Module::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MODULE_RECRUITMENT_SERIES_ID)
                    .table(Module::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Module::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Module {
    Table,
    Id,
    RecruitmentSeriesId,
    Code,
    Name,
    Semester,
    ModuleStatus,
    RequiredTaHours,
    RequiredUndergraduateTaCount,
    AppliedUndergraduateCount,
    UndergraduateRemaining,
    UndergraduateReviewed,
    UndergraduateAccepted,
    UndergraduateDocSubmitted,
    UndergraduateAppointed,
    RequiredPostgraduateTaCount,
    AppliedPostgraduateCount,
    PostgraduateRemaining,
    PostgraduateReviewed,
    PostgraduateAccepted,
    PostgraduateDocSubmitted,
    PostgraduateAppointed,
    CreatedAt,
    UpdatedAt,
}
