use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecruitmentSeries::Table)
                    .if_not_exists()
                    .col(pk_auto(RecruitmentSeries::Id))
                    .col(string(RecruitmentSeries::Name))
                    .col(timestamp(RecruitmentSeries::ApplicationDueDate))
                    .col(double(RecruitmentSeries::UndergradHourLimit).default(6.0))
                    .col(double(RecruitmentSeries::PostgradHourLimit).default(10.0))
                    .col(string_len(RecruitmentSeries::Status, 16))
                    .col(timestamp(RecruitmentSeries::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecruitmentSeries::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RecruitmentSeries {
    Table,
    Id,
    Name,
    ApplicationDueDate,
    UndergradHourLimit,
    PostgradHourLimit,
    Status,
    CreatedAt,
}
