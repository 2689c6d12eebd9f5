use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::report::WebsiteAnalyticsPayload;

pub struct WebsiteAnalyticsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WebsiteAnalyticsRepository<'a, C> {
    /// Creates a new instance of [`WebsiteAnalyticsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        owner_id: Uuid,
        payload: &WebsiteAnalyticsPayload,
    ) -> Result<entity::website_analytics::Model, DbErr> {
        let report = entity::website_analytics::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            month: ActiveValue::Set(payload.month.clone()),
            visitor_count: ActiveValue::Set(payload.visitor_count),
            page_views: ActiveValue::Set(payload.page_views),
            bounce_rate: ActiveValue::Set(payload.bounce_rate),
            avg_session_duration: ActiveValue::Set(payload.avg_session_duration),
            conversions: ActiveValue::Set(payload.conversions),
            top_pages: ActiveValue::Set(payload.top_pages_list()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        report.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::website_analytics::Model>, DbErr> {
        entity::prelude::WebsiteAnalytics::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::website_analytics::Model>, DbErr> {
        entity::prelude::WebsiteAnalytics::find()
            .order_by_desc(entity::website_analytics::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn get_by_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<entity::website_analytics::Model>, DbErr> {
        entity::prelude::WebsiteAnalytics::find()
            .filter(entity::website_analytics::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::website_analytics::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        report: entity::website_analytics::Model,
        payload: &WebsiteAnalyticsPayload,
    ) -> Result<entity::website_analytics::Model, DbErr> {
        let mut report_am = report.into_active_model();
        report_am.month = ActiveValue::Set(payload.month.clone());
        report_am.visitor_count = ActiveValue::Set(payload.visitor_count);
        report_am.page_views = ActiveValue::Set(payload.page_views);
        report_am.bounce_rate = ActiveValue::Set(payload.bounce_rate);
        report_am.avg_session_duration = ActiveValue::Set(payload.avg_session_duration);
        report_am.conversions = ActiveValue::Set(payload.conversions);
        report_am.top_pages = ActiveValue::Set(payload.top_pages_list());

        report_am.update(self.db).await
    }

    /// Deletes a report
    ///
    /// Returns OK regardless of the report existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::WebsiteAnalytics::delete_by_id(id)
            .exec(self.db)
            .await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::WebsiteAnalytics::find().count(self.db).await
    }

    pub async fn count_by_owner(&self, owner_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::WebsiteAnalytics::find()
            .filter(entity::website_analytics::Column::OwnerId.eq(owner_id))
            .count(self.db)
            .await
    }
}
