use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The sole authorization discriminant: admins see and mutate everything,
/// staff only what they own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "staff")]
    Staff,
}

/// One profile per authenticated identity. The id is issued by the identity
/// provider; profiles are created at first sign-in and never deleted here.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub role: Role,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::social_media_report::Entity")]
    SocialMediaReports,
    #[sea_orm(has_many = "super::media_report::Entity")]
    MediaReports,
    #[sea_orm(has_many = "super::website_analytics::Entity")]
    WebsiteAnalytics,
    #[sea_orm(has_many = "super::rpa_report::Entity")]
    RpaReports,
}

impl Related<super::social_media_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SocialMediaReports.def()
    }
}

impl Related<super::media_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaReports.def()
    }
}

impl Related<super::website_analytics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WebsiteAnalytics.def()
    }
}

impl Related<super::rpa_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RpaReports.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
