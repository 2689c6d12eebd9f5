use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
    pub session: Session,
}

impl TestSetup {
    /// Convert TestAppState into any type that can be constructed from a
    /// database connection. This allows conversion to AppState without
    /// creating a circular dependency.
    pub fn state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.state.db.clone())
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            state: TestAppState { db },
            session,
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_report_tables {
    // Pattern 1: No extra entities provided
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Profile),
                schema.create_table_from_entity(entity::prelude::SocialMediaReport),
                schema.create_table_from_entity(entity::prelude::MediaReport),
                schema.create_table_from_entity(entity::prelude::WebsiteAnalytics),
                schema.create_table_from_entity(entity::prelude::RpaReport),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};

    // Pattern 2: Extra entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Profile),
                schema.create_table_from_entity(entity::prelude::SocialMediaReport),
                schema.create_table_from_entity(entity::prelude::MediaReport),
                schema.create_table_from_entity(entity::prelude::WebsiteAnalytics),
                schema.create_table_from_entity(entity::prelude::RpaReport),
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
