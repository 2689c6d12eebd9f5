use sea_orm::DatabaseConnection;

use crate::{
    data::report::social_media::SocialMediaReportRepository,
    error::{report::ReportError, Error},
    model::{
        auth::Caller,
        report::{SocialMediaReportDto, SocialMediaReportPayload},
    },
    service::report::access,
};

/// Role-scoped operations for monthly social media reports.
pub struct SocialMediaReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SocialMediaReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists what the caller may see: every record for admins, only the
    /// caller's own records otherwise. Most recent first; empty is fine.
    pub async fn list(&self, caller: &Caller) -> Result<Vec<SocialMediaReportDto>, Error> {
        let repo = SocialMediaReportRepository::new(self.db);

        let reports = if caller.is_admin() {
            repo.get_all().await?
        } else {
            repo.get_by_owner(caller.id).await?
        };

        Ok(reports.into_iter().map(Into::into).collect())
    }

    /// Validates the payload and stores a new report owned by the caller.
    /// The owner is always the caller; the payload cannot set it.
    pub async fn create(
        &self,
        caller: &Caller,
        payload: &SocialMediaReportPayload,
    ) -> Result<SocialMediaReportDto, Error> {
        payload.validate()?;

        let repo = SocialMediaReportRepository::new(self.db);
        let report = repo.create(caller.id, payload).await?;

        Ok(report.into())
    }

    pub async fn update(
        &self,
        caller: &Caller,
        report_id: i32,
        payload: &SocialMediaReportPayload,
    ) -> Result<SocialMediaReportDto, Error> {
        let repo = SocialMediaReportRepository::new(self.db);

        let Some(report) = repo.get_by_id(report_id).await? else {
            return Err(ReportError::NotFound(report_id.to_string()).into());
        };

        access::ensure_can_modify(caller, report.owner_id)?;
        payload.validate()?;

        let report = repo.update(report, payload).await?;

        Ok(report.into())
    }

    /// Deletes the report if it exists; deleting a record that is already
    /// gone succeeds.
    pub async fn delete(&self, caller: &Caller, report_id: i32) -> Result<(), Error> {
        let repo = SocialMediaReportRepository::new(self.db);

        let Some(report) = repo.get_by_id(report_id).await? else {
            return Ok(());
        };

        access::ensure_can_modify(caller, report.owner_id)?;
        repo.delete(report_id).await?;

        Ok(())
    }
}
