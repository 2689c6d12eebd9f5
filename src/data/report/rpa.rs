use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::report::RpaReportPayload;

pub struct RpaReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RpaReportRepository<'a, C> {
    /// Creates a new instance of [`RpaReportRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        owner_id: Uuid,
        payload: &RpaReportPayload,
    ) -> Result<entity::rpa_report::Model, DbErr> {
        let report = entity::rpa_report::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            month: ActiveValue::Set(payload.month.clone()),
            incoming_mail_count: ActiveValue::Set(payload.incoming_mail_count),
            distributed_mail_count: ActiveValue::Set(payload.distributed_mail_count),
            top_units: ActiveValue::Set(payload.top_units_list()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        report.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::rpa_report::Model>, DbErr> {
        entity::prelude::RpaReport::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::rpa_report::Model>, DbErr> {
        entity::prelude::RpaReport::find()
            .order_by_desc(entity::rpa_report::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn get_by_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<entity::rpa_report::Model>, DbErr> {
        entity::prelude::RpaReport::find()
            .filter(entity::rpa_report::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::rpa_report::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        report: entity::rpa_report::Model,
        payload: &RpaReportPayload,
    ) -> Result<entity::rpa_report::Model, DbErr> {
        let mut report_am = report.into_active_model();
        report_am.month = ActiveValue::Set(payload.month.clone());
        report_am.incoming_mail_count = ActiveValue::Set(payload.incoming_mail_count);
        report_am.distributed_mail_count = ActiveValue::Set(payload.distributed_mail_count);
        report_am.top_units = ActiveValue::Set(payload.top_units_list());

        report_am.update(self.db).await
    }

    /// Deletes a report
    ///
    /// Returns OK regardless of the report existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::RpaReport::delete_by_id(id).exec(self.db).await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::RpaReport::find().count(self.db).await
    }

    pub async fn count_by_owner(&self, owner_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::RpaReport::find()
            .filter(entity::rpa_report::Column::OwnerId.eq(owner_id))
            .count(self.db)
            .await
    }
}
