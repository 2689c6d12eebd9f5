use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_profile::Profile;

static FK_WEBSITE_ANALYTICS_OWNER_ID: &str = "fk_website_analytics_owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WebsiteAnalytics::Table)
                    .if_not_exists()
                    .col(pk_auto(WebsiteAnalytics::Id))
                    .col(uuid(WebsiteAnalytics::OwnerId))
                    .col(string_len(WebsiteAnalytics::Month, 7))
                    .col(integer(WebsiteAnalytics::VisitorCount))
                    .col(integer(WebsiteAnalytics::PageViews))
                    .col(float(WebsiteAnalytics::BounceRate))
                    .col(float(WebsiteAnalytics::AvgSessionDuration))
                    .col(integer(WebsiteAnalytics::Conversions))
                    .col(json(WebsiteAnalytics::TopPages))
                    .col(timestamp(WebsiteAnalytics::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WEBSITE_ANALYTICS_OWNER_ID)
                    .from_tbl(WebsiteAnalytics::Table)
                    .from_col(WebsiteAnalytics::OwnerId)
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
                    .name(FK_WEBSITE_ANALYTICS_OWNER_ID)
                    .table(WebsiteAnalytics::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WebsiteAnalytics::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WebsiteAnalytics {
    Table,
    Id,
    OwnerId,
    Month,
    VisitorCount,
    PageViews,
    BounceRate,
    AvgSessionDuration,
    Conversions,
    TopPages,
    CreatedAt,
}
