use pulseboard_test_utils::prelude::*;

use crate::{
    data::report::social_media::tests::mock_payload,
    error::{report::ReportError, Error},
    service::report::{social_media::SocialMediaReportService, tests::insert_caller},
};

mod list {
    use super::*;

    /// A staff caller never sees another owner's records
    #[tokio::test]
    async fn staff_sees_only_own_records() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let caller_a = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;
        let caller_b = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;

        let service = SocialMediaReportService::new(&test.state.db);
        service.create(&caller_a, &mock_payload("2024-05")).await.unwrap();
        service.create(&caller_b, &mock_payload("2024-05")).await.unwrap();

        let reports = service.list(&caller_a).await.unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].owner_id, caller_a.id);

        Ok(())
    }

    /// An admin caller sees records from all owners
    #[tokio::test]
    async fn admin_sees_all_owners() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let staff_a = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;
        let staff_b = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;
        let admin = insert_caller(&test.state.db, entity::profile::Role::Admin).await?;

        let service = SocialMediaReportService::new(&test.state.db);
        service.create(&staff_a, &mock_payload("2024-04")).await.unwrap();
        service.create(&staff_b, &mock_payload("2024-05")).await.unwrap();

        let reports = service.list(&admin).await.unwrap();

        assert_eq!(reports.len(), 2);

        Ok(())
    }

    /// Listing with no records succeeds with an empty result
    #[tokio::test]
    async fn returns_empty_for_new_caller() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let caller = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;

        let service = SocialMediaReportService::new(&test.state.db);
        let reports = service.list(&caller).await.unwrap();

        assert!(reports.is_empty());

        Ok(())
    }
}

mod create {
    use super::*;

    /// The stored owner is always the caller, never payload-controlled
    #[tokio::test]
    async fn sets_owner_from_caller() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let caller = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;

        let service = SocialMediaReportService::new(&test.state.db);
        let report = service.create(&caller, &mock_payload("2024-05")).await.unwrap();

        assert_eq!(report.owner_id, caller.id);
        assert_eq!(report.month, "2024-05");
        assert_eq!(report.follower_count, 1000);
        assert_eq!(report.post_count, 12);

        Ok(())
    }

    /// Expect a validation error naming the offending field
    #[tokio::test]
    async fn rejects_negative_follower_count() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let caller = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;

        let service = SocialMediaReportService::new(&test.state.db);
        let mut payload = mock_payload("2024-05");
        payload.follower_count = -1;

        let result = service.create(&caller, &payload).await;

        assert!(matches!(
            result,
            Err(Error::ReportError(ReportError::Validation {
                field: "follower_count",
                ..
            }))
        ));

        // Nothing was persisted
        assert!(service.list(&caller).await.unwrap().is_empty());

        Ok(())
    }
}

mod update {
    use super::*;

    /// Staff U creates; staff V's update fails; admin's update succeeds and
    /// the owner is still U
    #[tokio::test]
    async fn enforces_ownership_with_admin_override() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let staff_u = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;
        let staff_v = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;
        let admin = insert_caller(&test.state.db, entity::profile::Role::Admin).await?;

        let service = SocialMediaReportService::new(&test.state.db);
        let report = service.create(&staff_u, &mock_payload("2024-05")).await.unwrap();

        let listed = service.list(&staff_u).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, report.id);

        let result = service
            .update(&staff_v, report.id, &mock_payload("2024-06"))
            .await;
        assert!(matches!(
            result,
            Err(Error::ReportError(ReportError::Forbidden))
        ));

        let updated = service
            .update(&admin, report.id, &mock_payload("2024-06"))
            .await
            .unwrap();
        assert_eq!(updated.month, "2024-06");
        assert_eq!(updated.owner_id, staff_u.id);

        Ok(())
    }

    /// The owner may update their own record; owner and created_at survive
    #[tokio::test]
    async fn preserves_owner_and_created_at() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let caller = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;

        let service = SocialMediaReportService::new(&test.state.db);
        let report = service.create(&caller, &mock_payload("2024-05")).await.unwrap();

        let mut payload = mock_payload("2024-05");
        payload.post_count = 30;
        let updated = service.update(&caller, report.id, &payload).await.unwrap();

        assert_eq!(updated.post_count, 30);
        assert_eq!(updated.owner_id, report.owner_id);
        assert_eq!(updated.created_at, report.created_at);

        Ok(())
    }

    /// Expect NotFound when the record id does not exist
    #[tokio::test]
    async fn fails_for_unknown_id() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let caller = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;

        let service = SocialMediaReportService::new(&test.state.db);
        let result = service.update(&caller, 42, &mock_payload("2024-05")).await;

        assert!(matches!(
            result,
            Err(Error::ReportError(ReportError::NotFound(_)))
        ));

        Ok(())
    }

    /// An invalid payload is rejected after the ownership check and leaves
    /// the stored record unchanged
    #[tokio::test]
    async fn rejects_invalid_payload_without_applying() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let caller = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;

        let service = SocialMediaReportService::new(&test.state.db);
        let report = service.create(&caller, &mock_payload("2024-05")).await.unwrap();

        let mut payload = mock_payload("not-a-month");
        payload.follower_count = 9999;
        let result = service.update(&caller, report.id, &payload).await;

        assert!(matches!(
            result,
            Err(Error::ReportError(ReportError::Validation { field: "month", .. }))
        ));

        let stored = service.list(&caller).await.unwrap();
        assert_eq!(stored[0].month, "2024-05");
        assert_eq!(stored[0].follower_count, 1000);

        Ok(())
    }
}

mod delete {
    use super::*;

    /// The owner may delete their own record
    #[tokio::test]
    async fn owner_deletes_own_record() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let caller = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;

        let service = SocialMediaReportService::new(&test.state.db);
        let report = service.create(&caller, &mock_payload("2024-05")).await.unwrap();

        service.delete(&caller, report.id).await.unwrap();

        assert!(service.list(&caller).await.unwrap().is_empty());

        Ok(())
    }

    /// Staff may not delete another owner's record; the record survives
    #[tokio::test]
    async fn other_staff_forbidden() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let owner = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;
        let other = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;

        let service = SocialMediaReportService::new(&test.state.db);
        let report = service.create(&owner, &mock_payload("2024-05")).await.unwrap();

        let result = service.delete(&other, report.id).await;

        assert!(matches!(
            result,
            Err(Error::ReportError(ReportError::Forbidden))
        ));
        assert_eq!(service.list(&owner).await.unwrap().len(), 1);

        Ok(())
    }

    /// An admin may delete any record
    #[tokio::test]
    async fn admin_deletes_any_record() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let owner = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;
        let admin = insert_caller(&test.state.db, entity::profile::Role::Admin).await?;

        let service = SocialMediaReportService::new(&test.state.db);
        let report = service.create(&owner, &mock_payload("2024-05")).await.unwrap();

        service.delete(&admin, report.id).await.unwrap();

        assert!(service.list(&owner).await.unwrap().is_empty());

        Ok(())
    }

    /// Deleting a missing id succeeds; deleting twice is safe
    #[tokio::test]
    async fn delete_is_idempotent() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let caller = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;

        let service = SocialMediaReportService::new(&test.state.db);

        assert!(service.delete(&caller, 42).await.is_ok());

        let report = service.create(&caller, &mock_payload("2024-05")).await.unwrap();
        service.delete(&caller, report.id).await.unwrap();
        service.delete(&caller, report.id).await.unwrap();

        Ok(())
    }
}
