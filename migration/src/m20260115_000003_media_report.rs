use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_profile::Profile;

static FK_MEDIA_REPORT_OWNER_ID: &str = "fk_media_report_owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MediaReport::Table)
                    .if_not_exists()
                    .col(pk_auto(MediaReport::Id))
                    .col(uuid(MediaReport::OwnerId))
                    .col(string_len(MediaReport::Month, 7))
                    .col(string_len(MediaReport::Status, 16))
                    .col(string(MediaReport::Subject))
                    .col(string(MediaReport::AccessLink))
                    .col(json(MediaReport::Sources))
                    .col(timestamp(MediaReport::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MEDIA_REPORT_OWNER_ID)
                    .from_tbl(MediaReport::Table)
                    .from_col(MediaReport::OwnerId)
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
                    .name(FK_MEDIA_REPORT_OWNER_ID)
                    .table(MediaReport::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MediaReport::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MediaReport {
    Table,
    Id,
    OwnerId,
    Month,
    Status,
    Subject,
    AccessLink,
    Sources,
    CreatedAt,
}
