use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_profile::Profile;

static FK_SOCIAL_MEDIA_REPORT_OWNER_ID: &str = "fk_social_media_report_owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocialMediaReport::Table)
                    .if_not_exists()
                    .col(pk_auto(SocialMediaReport::Id))
                    .col(uuid(SocialMediaReport::OwnerId))
                    .col(string_len(SocialMediaReport::Month, 7))
                    .col(integer(SocialMediaReport::FollowerCount))
                    .col(integer(SocialMediaReport::PostCount))
                    .col(string(SocialMediaReport::HighestEngagementLink))
                    .col(string(SocialMediaReport::LowestEngagementLink))
                    .col(timestamp(SocialMediaReport::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SOCIAL_MEDIA_REPORT_OWNER_ID)
                    .from_tbl(SocialMediaReport::Table)
                    .from_col(SocialMediaReport::OwnerId)
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
                    .name(FK_SOCIAL_MEDIA_REPORT_OWNER_ID)
                    .table(SocialMediaReport::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SocialMediaReport::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SocialMediaReport {
    Table,
    Id,
    OwnerId,
    Month,
    FollowerCount,
    PostCount,
    HighestEngagementLink,
    LowestEngagementLink,
    CreatedAt,
}
