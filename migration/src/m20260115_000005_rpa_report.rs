use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_profile::Profile;

static FK_RPA_REPORT_OWNER_ID: &str = "fk_rpa_report_owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RpaReport::Table)
                    .if_not_exists()
                    .col(pk_auto(RpaReport::Id))
                    .col(uuid(RpaReport::OwnerId))
                    .col(string_len(RpaReport::Month, 7))
                    .col(integer(RpaReport::IncomingMailCount))
                    .col(integer(RpaReport::DistributedMailCount))
                    .col(json(RpaReport::TopUnits))
                    .col(timestamp(RpaReport::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RPA_REPORT_OWNER_ID)
                    .from_tbl(RpaReport::Table)
                    .from_col(RpaReport::OwnerId)
                    .to_tbl(Profile::Table)
                    .to_col(Profile::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RPA_REPORT_OWNER_ID)
                    .table(RpaReport::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RpaReport::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RpaReport {
    Table,
    Id,
    OwnerId,
    Month,
    IncomingMailCount,
    DistributedMailCount,
    TopUnits,
    CreatedAt,
}
