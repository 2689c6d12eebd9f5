use entity::profile::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// The resolved identity and role making a repository request.
///
/// Built from the session-resolved profile before any service call; the
/// services derive every visibility and mutation decision from this value
/// alone, never from client-supplied flags.
#[derive(Clone, Copy, Debug)]
pub struct Caller {
    pub id: Uuid,
    pub role: Role,
}

impl Caller {
    pub fn from_profile(profile: &entity::profile::Model) -> Self {
        Self {
            id: profile.id,
            role: profile.role,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// A verified identity assertion from the upstream identity provider.
///
/// The provider authenticates the user and hands over an opaque identity
/// key plus email; this server trusts both as-is.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ProviderIdentity {
    pub id: Uuid,
    pub email: String,
}
