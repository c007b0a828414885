//! Inbound post payload.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// JSON body accepted by the create and update endpoints.
///
/// Every field is optional; the create and update rules in [`crate::domain::NewPost`]
/// and [`crate::domain::Post`] decide what an absent field means.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostInput {
    pub title: Option<String>,
    pub body: Option<String>,
    pub published: Option<bool>,
    pub publication_date: Option<String>,
    /// Tag names. Anything other than an array is ignored.
    #[serde(default, alias = "tag")]
    pub tags: Option<Value>,
}

impl PostInput {
    /// Non-empty string entries of the `tags` array, in payload order.
    pub fn tag_names(&self) -> Vec<String> {
        match &self.tags {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .filter(|name| !name.is_empty())
                .map(str::to_owned)
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Parse a publication date as RFC 3339, `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD`. Zone-less values are taken as UTC.
pub fn parse_publication_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
