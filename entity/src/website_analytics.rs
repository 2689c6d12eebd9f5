use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::StringList;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "website_analytics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: Uuid,
    pub month: String,
    pub visitor_count: i32,
    pub page_views: i32,
    /// Percentage in [0, 100].
    pub bounce_rate: f32,
    /// Minutes.
    pub avg_session_duration: f32,
    pub conversions: i32,
    #[sea_orm(column_type = "Json")]
    pub top_pages: StringList,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::OwnerId",
        to = "super::profile::Column::Id"
    )]
    Profile,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
