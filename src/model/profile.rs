use chrono::NaiveDateTime;
use entity::profile::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub id: Uuid,
    pub email: String,
    #[schema(value_type = String)]
    pub role: Role,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::profile::Model> for ProfileDto {
    fn from(profile: entity::profile::Model) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            role: profile.role,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

/// Body of an admin role-change request.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateRoleDto {
    #[schema(value_type = String)]
    pub role: Role,
}
