use pulseboard_test_utils::prelude::*;

use crate::{
    data::report::media::tests::mock_payload,
    error::{report::ReportError, Error},
    service::report::{media::MediaReportService, tests::insert_caller},
};

mod list {
    use super::*;

    /// A staff caller never sees another owner's records
    #[tokio::test]
    async fn staff_sees_only_own_records() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let caller_a = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;
        let caller_b = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;

        let service = MediaReportService::new(&test.state.db);
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
        let staff = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;
        let admin = insert_caller(&test.state.db, entity::profile::Role::Admin).await?;

        let service = MediaReportService::new(&test.state.db);
        service.create(&staff, &mock_payload("2024-04")).await.unwrap();
        service.create(&admin, &mock_payload("2024-05")).await.unwrap();

        let reports = service.list(&admin).await.unwrap();

        assert_eq!(reports.len(), 2);

        Ok(())
    }
}

mod create {
    use super::*;

    /// Blank and whitespace-only source names never reach storage
    #[tokio::test]
    async fn sparsifies_sources() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let caller = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;

        let service = MediaReportService::new(&test.state.db);
        let mut payload = mock_payload("2024-05");
        payload.sources = vec![
            " Agency A ".to_string(),
            String::new(),
            "Agency B".to_string(),
            "   ".to_string(),
        ];

        let report = service.create(&caller, &payload).await.unwrap();

        assert_eq!(report.sources, vec!["Agency A", "Agency B"]);

        Ok(())
    }

    /// Expect a validation error when the subject is blank
    #[tokio::test]
    async fn rejects_blank_subject() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let caller = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;

        let service = MediaReportService::new(&test.state.db);
        let mut payload = mock_payload("2024-05");
        payload.subject = "   ".to_string();

        let result = service.create(&caller, &payload).await;

        assert!(matches!(
            result,
            Err(Error::ReportError(ReportError::Validation {
                field: "subject",
                ..
            }))
        ));

        Ok(())
    }
}

mod update {
    use super::*;

    /// Another staff caller may not change the record; an admin may
    #[tokio::test]
    async fn enforces_ownership_with_admin_override() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let owner = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;
        let other = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;
        let admin = insert_caller(&test.state.db, entity::profile::Role::Admin).await?;

        let service = MediaReportService::new(&test.state.db);
        let report = service.create(&owner, &mock_payload("2024-05")).await.unwrap();

        let mut payload = mock_payload("2024-05");
        payload.status = entity::media_report::MediaStatus::Critical;

        let result = service.update(&other, report.id, &payload).await;
        assert!(matches!(
            result,
            Err(Error::ReportError(ReportError::Forbidden))
        ));

        let updated = service.update(&admin, report.id, &payload).await.unwrap();
        assert_eq!(updated.status, entity::media_report::MediaStatus::Critical);
        assert_eq!(updated.owner_id, owner.id);

        Ok(())
    }
}

mod delete {
    use super::*;

    /// Deleting a missing id succeeds for any caller
    #[tokio::test]
    async fn missing_id_is_not_an_error() -> Result<(), TestError> {
        let test = test_setup_with_report_tables!()?;
        let caller = insert_caller(&test.state.db, entity::profile::Role::Staff).await?;

        let service = MediaReportService::new(&test.state.db);

        assert!(service.delete(&caller, 9000).await.is_ok());

        Ok(())
    }
}
