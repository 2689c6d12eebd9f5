use sea_orm::DatabaseConnection;

use crate::{
    data::report::{
        media::MediaReportRepository, rpa::RpaReportRepository,
        social_media::SocialMediaReportRepository,
        website_analytics::WebsiteAnalyticsRepository,
    },
    error::Error,
    model::{auth::Caller, report::ReportCountsDto},
};

/// Read-only dashboard aggregation.
pub struct ReportStatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportStatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts records per kind under the same ownership filter as `list`.
    ///
    /// Counting happens in SQL; rows are never fetched, so staff callers
    /// cannot learn of other owners' records through this path.
    pub async fn count_by_kind(&self, caller: &Caller) -> Result<ReportCountsDto, Error> {
        let social_media = SocialMediaReportRepository::new(self.db);
        let media = MediaReportRepository::new(self.db);
        let website_analytics = WebsiteAnalyticsRepository::new(self.db);
        let rpa = RpaReportRepository::new(self.db);

        let counts = if caller.is_admin() {
            ReportCountsDto {
                social_media: social_media.count_all().await?,
                media: media.count_all().await?,
                website_analytics: website_analytics.count_all().await?,
                rpa: rpa.count_all().await?,
            }
        } else {
            ReportCountsDto {
                social_media: social_media.count_by_owner(caller.id).await?,
                media: media.count_by_owner(caller.id).await?,
                website_analytics: website_analytics.count_by_owner(caller.id).await?,
                rpa: rpa.count_by_owner(caller.id).await?,
            }
        };

        Ok(counts)
    }
}
