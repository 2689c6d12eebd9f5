use sea_orm::DatabaseConnection;

use crate::{
    data::report::website_analytics::WebsiteAnalyticsRepository,
    error::{report::ReportError, Error},
    model::{
        auth::Caller,
        report::{WebsiteAnalyticsDto, WebsiteAnalyticsPayload},
    },
    service::report::access,
};

/// Role-scoped operations for monthly website analytics reports.
pub struct WebsiteAnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WebsiteAnalyticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, caller: &Caller) -> Result<Vec<WebsiteAnalyticsDto>, Error> {
        let repo = WebsiteAnalyticsRepository::new(self.db);

        let reports = if caller.is_admin() {
            repo.get_all().await?
        } else {
            repo.get_by_owner(caller.id).await?
        };

        Ok(reports.into_iter().map(Into::into).collect())
    }

    pub async fn create(
        &self,
        caller: &Caller,
        payload: &WebsiteAnalyticsPayload,
    ) -> Result<WebsiteAnalyticsDto, Error> {
        payload.validate()?;

        let repo = WebsiteAnalyticsRepository::new(self.db);
        let report = repo.create(caller.id, payload).await?;

        Ok(report.into())
    }

    pub async fn update(
        &self,
        caller: &Caller,
        report_id: i32,
        payload: &WebsiteAnalyticsPayload,
    ) -> Result<WebsiteAnalyticsDto, Error> {
        let repo = WebsiteAnalyticsRepository::new(self.db);

        let Some(report) = repo.get_by_id(report_id).await? else {
            return Err(ReportError::NotFound(report_id.to_string()).into());
        };

        access::ensure_can_modify(caller, report.owner_id)?;
        payload.validate()?;

        let report = repo.update(report, payload).await?;

        Ok(report.into())
    }

    pub async fn delete(&self, caller: &Caller, report_id: i32) -> Result<(), Error> {
        let repo = WebsiteAnalyticsRepository::new(self.db);

        let Some(report) = repo.get_by_id(report_id).await? else {
            return Ok(());
        };

        access::ensure_can_modify(caller, report.owner_id)?;
        repo.delete(report_id).await?;

        Ok(())
    }
}
