pub mod media_report;
pub mod profile;
pub mod rpa_report;
pub mod social_media_report;
pub mod website_analytics;

pub mod prelude;

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Ordered list of strings persisted as a JSON column.
///
/// Order is meaningful (rank 1..N); blank entries are stripped before a
/// value of this type is ever stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

impl StringList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<String>> for StringList {
    fn from(entries: Vec<String>) -> Self {
        Self(entries)
    }
}
