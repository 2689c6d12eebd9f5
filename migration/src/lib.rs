pub use sea_orm_migration::prelude::*;

mod m20260115_000001_profile;
mod m20260115_000002_social_media_report;
mod m20260115_000003_media_report;
mod m20260115_000004_website_analytics;
mod m20260115_000005_rpa_report;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_profile::Migration),
            Box::new(m20260115_000002_social_media_report::Migration),
            Box::new(m20260115_000003_media_report::Migration),
            Box::new(m20260115_000004_website_analytics::Migration),
            Box::new(m20260115_000005_rpa_report::Migration),
        ]
    }
}
