use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::report::SocialMediaReportPayload;

pub struct SocialMediaReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SocialMediaReportRepository<'a, C> {
    /// Creates a new instance of [`SocialMediaReportRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a report owned by `owner_id` with a server-side creation
    /// timestamp.
    pub async fn create(
        &self,
        owner_id: Uuid,
        payload: &SocialMediaReportPayload,
    ) -> Result<entity::social_media_report::Model, DbErr> {
        let report = entity::social_media_report::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            month: ActiveValue::Set(payload.month.clone()),
            follower_count: ActiveValue::Set(payload.follower_count),
            post_count: ActiveValue::Set(payload.post_count),
            highest_engagement_link: ActiveValue::Set(payload.highest_engagement_link.clone()),
            lowest_engagement_link: ActiveValue::Set(payload.lowest_engagement_link.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        report.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::social_media_report::Model>, DbErr> {
        entity::prelude::SocialMediaReport::find_by_id(id)
            .one(self.db)
            .await
    }

    /// All reports of this kind, most recent first.
    pub async fn get_all(&self) -> Result<Vec<entity::social_media_report::Model>, DbErr> {
        entity::prelude::SocialMediaReport::find()
            .order_by_desc(entity::social_media_report::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Reports owned by `owner_id`, most recent first.
    pub async fn get_by_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<entity::social_media_report::Model>, DbErr> {
        entity::prelude::SocialMediaReport::find()
            .filter(entity::social_media_report::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::social_media_report::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Applies the payload to an existing report; `owner_id` and
    /// `created_at` are never written.
    pub async fn update(
        &self,
        report: entity::social_media_report::Model,
        payload: &SocialMediaReportPayload,
    ) -> Result<entity::social_media_report::Model, DbErr> {
        let mut report_am = report.into_active_model();
        report_am.month = ActiveValue::Set(payload.month.clone());
        report_am.follower_count = ActiveValue::Set(payload.follower_count);
        report_am.post_count = ActiveValue::Set(payload.post_count);
        report_am.highest_engagement_link =
            ActiveValue::Set(payload.highest_engagement_link.clone());
        report_am.lowest_engagement_link = ActiveValue::Set(payload.lowest_engagement_link.clone());

        report_am.update(self.db).await
    }

    /// Deletes a report
    ///
    /// Returns OK regardless of the report existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::SocialMediaReport::delete_by_id(id)
            .exec(self.db)
            .await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::SocialMediaReport::find().count(self.db).await
    }

    pub async fn count_by_owner(&self, owner_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::SocialMediaReport::find()
            .filter(entity::social_media_report::Column::OwnerId.eq(owner_id))
            .count(self.db)
            .await
    }
}
