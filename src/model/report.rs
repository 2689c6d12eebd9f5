//! Payloads and DTOs for the five report record kinds.
//!
//! Payloads carry the caller-editable fields only; `owner_id`, record ids
//! and creation timestamps are always set server-side. `validate` checks the
//! field constraints and names the offending field on violation; the
//! list-valued fields are normalized (trimmed, blanks dropped, rank order
//! preserved) before anything is persisted.

use chrono::{NaiveDate, NaiveDateTime};
use entity::media_report::MediaStatus;
use entity::StringList;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::report::ReportError;

/// Ranked lists (top pages, top distribution units) keep at most this many
/// meaningful entries; the submission forms render exactly three inputs.
pub const RANKED_LIST_LIMIT: usize = 3;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SocialMediaReportPayload {
    pub month: String,
    pub follower_count: i32,
    pub post_count: i32,
    pub highest_engagement_link: String,
    pub lowest_engagement_link: String,
}

impl SocialMediaReportPayload {
    pub fn validate(&self) -> Result<(), ReportError> {
        require_month(&self.month)?;
        require_non_negative("follower_count", self.follower_count)?;
        require_non_negative("post_count", self.post_count)?;

        Ok(())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MediaReportPayload {
    pub month: String,
    #[schema(value_type = String)]
    pub status: MediaStatus,
    pub subject: String,
    pub access_link: String,
    pub sources: Vec<String>,
}

impl MediaReportPayload {
    pub fn validate(&self) -> Result<(), ReportError> {
        require_month(&self.month)?;
        require_non_blank("subject", &self.subject)?;

        Ok(())
    }

    /// News sources with blank entries stripped, order preserved.
    pub fn sources_list(&self) -> StringList {
        normalize_list(&self.sources, None)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct WebsiteAnalyticsPayload {
    pub month: String,
    pub visitor_count: i32,
    pub page_views: i32,
    pub bounce_rate: f32,
    pub avg_session_duration: f32,
    pub conversions: i32,
    pub top_pages: Vec<String>,
}

impl WebsiteAnalyticsPayload {
    pub fn validate(&self) -> Result<(), ReportError> {
        require_month(&self.month)?;
        require_non_negative("visitor_count", self.visitor_count)?;
        require_non_negative("page_views", self.page_views)?;
        require_bounded_rate("bounce_rate", self.bounce_rate)?;
        require_non_negative_duration("avg_session_duration", self.avg_session_duration)?;
        require_non_negative("conversions", self.conversions)?;

        Ok(())
    }

    /// Top pages, blanks stripped and capped at [`RANKED_LIST_LIMIT`].
    pub fn top_pages_list(&self) -> StringList {
        normalize_list(&self.top_pages, Some(RANKED_LIST_LIMIT))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RpaReportPayload {
    pub month: String,
    pub incoming_mail_count: i32,
    pub distributed_mail_count: i32,
    pub top_units: Vec<String>,
}

impl RpaReportPayload {
    pub fn validate(&self) -> Result<(), ReportError> {
        require_month(&self.month)?;
        require_non_negative("incoming_mail_count", self.incoming_mail_count)?;
        require_non_negative("distributed_mail_count", self.distributed_mail_count)?;

        Ok(())
    }

    /// Top distribution units, blanks stripped and capped at
    /// [`RANKED_LIST_LIMIT`].
    pub fn top_units_list(&self) -> StringList {
        normalize_list(&self.top_units, Some(RANKED_LIST_LIMIT))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SocialMediaReportDto {
    pub id: i32,
    pub owner_id: Uuid,
    pub month: String,
    pub follower_count: i32,
    pub post_count: i32,
    pub highest_engagement_link: String,
    pub lowest_engagement_link: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::social_media_report::Model> for SocialMediaReportDto {
    fn from(report: entity::social_media_report::Model) -> Self {
        Self {
            id: report.id,
            owner_id: report.owner_id,
            month: report.month,
            follower_count: report.follower_count,
            post_count: report.post_count,
            highest_engagement_link: report.highest_engagement_link,
            lowest_engagement_link: report.lowest_engagement_link,
            created_at: report.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MediaReportDto {
    pub id: i32,
    pub owner_id: Uuid,
    pub month: String,
    #[schema(value_type = String)]
    pub status: MediaStatus,
    pub subject: String,
    pub access_link: String,
    pub sources: Vec<String>,
    pub created_at: NaiveDateTime,
}

impl From<entity::media_report::Model> for MediaReportDto {
    fn from(report: entity::media_report::Model) -> Self {
        Self {
            id: report.id,
            owner_id: report.owner_id,
            month: report.month,
            status: report.status,
            subject: report.subject,
            access_link: report.access_link,
            sources: report.sources.0,
            created_at: report.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct WebsiteAnalyticsDto {
    pub id: i32,
    pub owner_id: Uuid,
    pub month: String,
    pub visitor_count: i32,
    pub page_views: i32,
    pub bounce_rate: f32,
    pub avg_session_duration: f32,
    pub conversions: i32,
    pub top_pages: Vec<String>,
    pub created_at: NaiveDateTime,
}

impl From<entity::website_analytics::Model> for WebsiteAnalyticsDto {
    fn from(report: entity::website_analytics::Model) -> Self {
        Self {
            id: report.id,
            owner_id: report.owner_id,
            month: report.month,
            visitor_count: report.visitor_count,
            page_views: report.page_views,
            bounce_rate: report.bounce_rate,
            avg_session_duration: report.avg_session_duration,
            conversions: report.conversions,
            top_pages: report.top_pages.0,
            created_at: report.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RpaReportDto {
    pub id: i32,
    pub owner_id: Uuid,
    pub month: String,
    pub incoming_mail_count: i32,
    pub distributed_mail_count: i32,
    pub top_units: Vec<String>,
    pub created_at: NaiveDateTime,
}

impl From<entity::rpa_report::Model> for RpaReportDto {
    fn from(report: entity::rpa_report::Model) -> Self {
        Self {
            id: report.id,
            owner_id: report.owner_id,
            month: report.month,
            incoming_mail_count: report.incoming_mail_count,
            distributed_mail_count: report.distributed_mail_count,
            top_units: report.top_units.0,
            created_at: report.created_at,
        }
    }
}

/// Per-kind record counts under the caller's visibility filter.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ReportCountsDto {
    pub social_media: u64,
    pub media: u64,
    pub website_analytics: u64,
    pub rpa: u64,
}

fn require_month(month: &str) -> Result<(), ReportError> {
    let parses = month.len() == 7
        && NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d").is_ok();

    if !parses {
        return Err(ReportError::validation(
            "month",
            "must be a year-month in YYYY-MM format",
        ));
    }

    Ok(())
}

fn require_non_blank(field: &'static str, value: &str) -> Result<(), ReportError> {
    if value.trim().is_empty() {
        return Err(ReportError::validation(field, "must not be blank"));
    }

    Ok(())
}

fn require_non_negative(field: &'static str, value: i32) -> Result<(), ReportError> {
    if value < 0 {
        return Err(ReportError::validation(field, "must not be negative"));
    }

    Ok(())
}

fn require_non_negative_duration(field: &'static str, value: f32) -> Result<(), ReportError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ReportError::validation(field, "must not be negative"));
    }

    Ok(())
}

fn require_bounded_rate(field: &'static str, value: f32) -> Result<(), ReportError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(ReportError::validation(
            field,
            "must be between 0 and 100",
        ));
    }

    Ok(())
}

/// Strips blank and whitespace-only entries while preserving rank order;
/// ranked lists are additionally capped at `limit` meaningful entries.
fn normalize_list(entries: &[String], limit: Option<usize>) -> StringList {
    let mut kept: Vec<String> = entries
        .iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect();

    if let Some(limit) = limit {
        kept.truncate(limit);
    }

    StringList(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analytics_payload() -> WebsiteAnalyticsPayload {
        WebsiteAnalyticsPayload {
            month: "2024-05".to_string(),
            visitor_count: 1200,
            page_views: 5400,
            bounce_rate: 38.5,
            avg_session_duration: 3.2,
            conversions: 17,
            top_pages: vec!["/home".to_string(), "/about".to_string()],
        }
    }

    #[test]
    fn accepts_valid_analytics_payload() {
        assert!(analytics_payload().validate().is_ok());
    }

    #[test]
    fn rejects_bounce_rate_above_bound() {
        let mut payload = analytics_payload();
        payload.bounce_rate = 101.0;

        let err = payload.validate().unwrap_err();
        assert!(matches!(
            err,
            ReportError::Validation {
                field: "bounce_rate",
                ..
            }
        ));
    }

    #[test]
    fn accepts_bounce_rate_at_bound() {
        let mut payload = analytics_payload();
        payload.bounce_rate = 100.0;

        assert!(payload.validate().is_ok());
    }

    #[test]
    fn rejects_negative_bounce_rate() {
        let mut payload = analytics_payload();
        payload.bounce_rate = -1.0;

        assert!(payload.validate().is_err());
    }

    #[test]
    fn rejects_negative_visitor_count() {
        let mut payload = analytics_payload();
        payload.visitor_count = -1;

        let err = payload.validate().unwrap_err();
        assert!(matches!(
            err,
            ReportError::Validation {
                field: "visitor_count",
                ..
            }
        ));
    }

    #[test]
    fn rejects_malformed_month() {
        for month in ["", "2024", "2024-13", "05-2024", "2024-05-01"] {
            let mut payload = analytics_payload();
            payload.month = month.to_string();

            assert!(payload.validate().is_err(), "month {:?} accepted", month);
        }
    }

    #[test]
    fn strips_blank_list_entries_preserving_order() {
        let entries = vec!["A".to_string(), "".to_string(), "B".to_string()];

        let list = normalize_list(&entries, None);

        assert_eq!(list.0, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn trims_whitespace_only_entries() {
        let entries = vec!["  /home ".to_string(), "   ".to_string()];

        let list = normalize_list(&entries, Some(RANKED_LIST_LIMIT));

        assert_eq!(list.0, vec!["/home".to_string()]);
    }

    #[test]
    fn caps_ranked_lists_at_three_meaningful_entries() {
        let entries = vec![
            "unit-a".to_string(),
            "".to_string(),
            "unit-b".to_string(),
            "unit-c".to_string(),
            "unit-d".to_string(),
        ];

        let list = normalize_list(&entries, Some(RANKED_LIST_LIMIT));

        assert_eq!(
            list.0,
            vec![
                "unit-a".to_string(),
                "unit-b".to_string(),
                "unit-c".to_string()
            ]
        );
    }
}
