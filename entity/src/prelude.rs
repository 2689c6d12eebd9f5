pub use super::media_report::Entity as MediaReport;
pub use super::profile::Entity as Profile;
pub use super::rpa_report::Entity as RpaReport;
pub use super::social_media_report::Entity as SocialMediaReport;
pub use super::website_analytics::Entity as WebsiteAnalytics;
