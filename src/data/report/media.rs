use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::report::MediaReportPayload;

pub struct MediaReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MediaReportRepository<'a, C> {
    /// Creates a new instance of [`MediaReportRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        owner_id: Uuid,
        payload: &MediaReportPayload,
    ) -> Result<entity::media_report::Model, DbErr> {
        let report = entity::media_report::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            month: ActiveValue::Set(payload.month.clone()),
            status: ActiveValue::Set(payload.status),
            subject: ActiveValue::Set(payload.subject.clone()),
            access_link: ActiveValue::Set(payload.access_link.clone()),
            sources: ActiveValue::Set(payload.sources_list()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        report.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::media_report::Model>, DbErr> {
        entity::prelude::MediaReport::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::media_report::Model>, DbErr> {
        entity::prelude::MediaReport::find()
            .order_by_desc(entity::media_report::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn get_by_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<entity::media_report::Model>, DbErr> {
        entity::prelude::MediaReport::find()
            .filter(entity::media_report::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::media_report::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        report: entity::media_report::Model,
        payload: &MediaReportPayload,
    ) -> Result<entity::media_report::Model, DbErr> {
        let mut report_am = report.into_active_model();
        report_am.month = ActiveValue::Set(payload.month.clone());
        report_am.status = ActiveValue::Set(payload.status);
        report_am.subject = ActiveValue::Set(payload.subject.clone());
        report_am.access_link = ActiveValue::Set(payload.access_link.clone());
        report_am.sources = ActiveValue::Set(payload.sources_list());

        report_am.update(self.db).await
    }

    /// Deletes a report
    ///
    /// Returns OK regardless of the report existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::MediaReport::delete_by_id(id).exec(self.db).await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::MediaReport::find().count(self.db).await
    }

    pub async fn count_by_owner(&self, owner_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::MediaReport::find()
            .filter(entity::media_report::Column::OwnerId.eq(owner_id))
            .count(self.db)
            .await
    }
}
