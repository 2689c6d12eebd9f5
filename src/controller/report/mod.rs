pub mod media;
pub mod rpa;
pub mod social_media;
pub mod website_analytics;

pub static REPORT_TAG: &str = "report";
