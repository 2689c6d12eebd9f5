use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};
use uuid::Uuid;

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a profile for a newly signed-up identity.
    ///
    /// The identity key comes from the identity provider; the role always
    /// starts as staff and is only changed by admin role-change actions.
    pub async fn create(&self, id: Uuid, email: &str) -> Result<entity::profile::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let profile = entity::profile::ActiveModel {
            id: ActiveValue::Set(id),
            email: ActiveValue::Set(email.to_string()),
            role: ActiveValue::Set(entity::profile::Role::Staff),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        profile.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find_by_id(id).one(self.db).await
    }

    /// All profiles, most recently created first.
    pub async fn get_all(&self) -> Result<Vec<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .order_by_desc(entity::profile::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Changes a profile's role, touching `updated_at`.
    ///
    /// Returns `Ok(None)` when no profile with that id exists.
    pub async fn update_role(
        &self,
        id: Uuid,
        role: entity::profile::Role,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        let profile = match entity::prelude::Profile::find_by_id(id).one(self.db).await? {
            Some(profile) => profile,
            None => return Ok(None),
        };

        let mut profile_am = profile.into_active_model();
        profile_am.role = ActiveValue::Set(role);
        profile_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let profile = profile_am.update(self.db).await?;

        Ok(Some(profile))
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use pulseboard_test_utils::prelude::*;
        use uuid::Uuid;

        use crate::data::profile::ProfileRepository;

        /// Expect success and a staff role when creating a new profile
        #[tokio::test]
        async fn creates_profile_with_staff_role() -> Result<(), TestError> {
            let test = test_setup_with_report_tables!()?;

            let repo = ProfileRepository::new(&test.state.db);
            let result = repo.create(Uuid::new_v4(), "staff@example.com").await;

            assert!(result.is_ok());
            let profile = result.unwrap();
            assert_eq!(profile.role, entity::profile::Role::Staff);
            assert_eq!(profile.email, "staff@example.com");

            Ok(())
        }

        /// Expect Error when inserting a second profile with the same email
        #[tokio::test]
        async fn fails_for_duplicate_email() -> Result<(), TestError> {
            let test = test_setup_with_report_tables!()?;

            let repo = ProfileRepository::new(&test.state.db);
            repo.create(Uuid::new_v4(), "dup@example.com").await?;
            let result = repo.create(Uuid::new_v4(), "dup@example.com").await;

            assert!(result.is_err());

            Ok(())
        }

        /// Expect Error when required database tables don't exist
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let repo = ProfileRepository::new(&test.state.db);
            let result = repo.create(Uuid::new_v4(), "staff@example.com").await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_id {
        use pulseboard_test_utils::prelude::*;
        use uuid::Uuid;

        use crate::data::profile::ProfileRepository;

        /// Expect Ok(Some(_)) when the profile exists
        #[tokio::test]
        async fn finds_existing_profile() -> Result<(), TestError> {
            let test = test_setup_with_report_tables!()?;
            let profile =
                data::insert_profile(&test.state.db, entity::profile::Role::Staff).await?;

            let repo = ProfileRepository::new(&test.state.db);
            let result = repo.get_by_id(profile.id).await;

            assert!(matches!(result, Ok(Some(_))));

            Ok(())
        }

        /// Expect Ok(None) for an id with no profile
        #[tokio::test]
        async fn returns_none_for_unknown_id() -> Result<(), TestError> {
            let test = test_setup_with_report_tables!()?;

            let repo = ProfileRepository::new(&test.state.db);
            let result = repo.get_by_id(Uuid::new_v4()).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod update_role {
        use pulseboard_test_utils::prelude::*;
        use uuid::Uuid;

        use crate::data::profile::ProfileRepository;

        /// Expect the role and updated_at to change on an existing profile
        #[tokio::test]
        async fn updates_existing_profile() -> Result<(), TestError> {
            let test = test_setup_with_report_tables!()?;
            let profile =
                data::insert_profile(&test.state.db, entity::profile::Role::Staff).await?;

            let repo = ProfileRepository::new(&test.state.db);
            let result = repo
                .update_role(profile.id, entity::profile::Role::Admin)
                .await;

            assert!(matches!(result, Ok(Some(_))));
            let updated = result.unwrap().unwrap();
            assert_eq!(updated.role, entity::profile::Role::Admin);
            assert_eq!(updated.created_at, profile.created_at);

            Ok(())
        }

        /// Expect Ok(None) when the profile does not exist
        #[tokio::test]
        async fn returns_none_for_unknown_id() -> Result<(), TestError> {
            let test = test_setup_with_report_tables!()?;

            let repo = ProfileRepository::new(&test.state.db);
            let result = repo
                .update_role(Uuid::new_v4(), entity::profile::Role::Admin)
                .await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }
}
