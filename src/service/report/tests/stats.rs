use pulseboard_test_utils::prelude::*;

use crate::{
    data::report::{
        media, rpa,
        social_media::{self, SocialMediaReportRepository},
        website_analytics,
    },
    service::report::{stats::ReportStatsService, tests::insert_caller},
};

mod count_by_kind {
    use super::*;

    /// All counts are zero when nothing has been stored
    #[tokio::test]
    async fn zero_counts_for_empty_store() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let caller = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;

        let service = ReportStatsService::new(&test.state.db);
        let counts = service.count_by_kind(&caller).await.unwrap();

        assert_eq!(counts.social_media, 0);
        assert_eq!(counts.media, 0);
        assert_eq!(counts.website_analytics, 0);
        assert_eq!(counts.rpa, 0);

        Ok(())
    }

    /// Staff counts cover only the caller's own records
    #[tokio::test]
    async fn staff_counts_own_records_only() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let caller = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;
        let other = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;

        let repo = SocialMediaReportRepository::new(&test.state.db);
        repo.create(caller.id, &social_media::tests::mock_payload("2024-04"))
            .await?;
        repo.create(caller.id, &social_media::tests::mock_payload("2024-05"))
            .await?;
        repo.create(other.id, &social_media::tests::mock_payload("2024-05"))
            .await?;

        let service = ReportStatsService::new(&test.state.db);
        let counts = service.count_by_kind(&caller).await.unwrap();

        assert_eq!(counts.social_media, 2);
        assert_eq!(counts.media, 0);

        Ok(())
    }

    /// Admin counts span every owner and every kind
    #[tokio::test]
    async fn admin_counts_all_records() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let staff_a = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;
        let staff_b = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;
        let admin = insert_caller(&test.state.db, entity::profile::Role::Admin).await?;

        SocialMediaReportRepository::new(&test.state.db)
            .create(staff_a.id, &social_media::tests::mock_payload("2024-05"))
            .await?;
        media::MediaReportRepository::new(&test.state.db)
            .create(staff_b.id, &media::tests::mock_payload("2024-05"))
            .await?;
        website_analytics::WebsiteAnalyticsRepository::new(&test.state.db)
            .create(staff_a.id, &website_analytics::tests::mock_payload("2024-05"))
            .await?;
        rpa::RpaReportRepository::new(&test.state.db)
            .create(staff_b.id, &rpa::tests::mock_payload("2024-05"))
            .await?;

        let service = ReportStatsService::new(&test.state.db);
        let counts = service.count_by_kind(&admin).await.unwrap();

        assert_eq!(counts.social_media, 1);
        assert_eq!(counts.media, 1);
        assert_eq!(counts.website_analytics, 1);
        assert_eq!(counts.rpa, 1);

        Ok(())
    }
}
