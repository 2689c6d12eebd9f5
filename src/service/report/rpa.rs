use sea_orm::DatabaseConnection;

use crate::{
    data::report::rpa::RpaReportRepository,
    error::{report::ReportError, Error},
    model::{
        auth::Caller,
        report::{RpaReportDto, RpaReportPayload},
    },
    service::report::access,
};

/// Role-scoped operations for monthly mail-automation (RPA) reports.
pub struct RpaReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RpaReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, caller: &Caller) -> Result<Vec<RpaReportDto>, Error> {
        let repo = RpaReportRepository::new(self.db);

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
        payload: &RpaReportPayload,
    ) -> Result<RpaReportDto, Error> {
        payload.validate()?;

        let repo = RpaReportRepository::new(self.db);
        let report = repo.create(caller.id, payload).await?;

        Ok(report.into())
    }

    pub async fn update(
        &self,
        caller: &Caller,
        report_id: i32,
        payload: &RpaReportPayload,
    ) -> Result<RpaReportDto, Error> {
        let repo = RpaReportRepository::new(self.db);

        let Some(report) = repo.get_by_id(report_id).await? else {
            return Err(ReportError::NotFound(report_id.to_string()).into());
        };

        access::ensure_can_modify(caller, report.owner_id)?;
        payload.validate()?;

        let report = repo.update(report, payload).await?;

        Ok(report.into())
    }

    pub async fn delete(&self, caller: &Caller, report_id: i32) -> Result<(), Error> {
        let repo = RpaReportRepository::new(self.db);

        let Some(report) = repo.get_by_id(report_id).await? else {
            return Ok(());
        };

        access::ensure_can_modify(caller, report.owner_id)?;
        repo.delete(report_id).await?;

        Ok(())
    }
}
