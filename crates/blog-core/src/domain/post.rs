use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::input::{PostInput, parse_publication_date};
use crate::error::DomainError;

const NOT_BLANK: &str = "This value should not be blank.";
const NOT_A_DATETIME: &str = "This value is not a valid datetime.";

/// Post entity - a persisted blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub published: bool,
    pub publication_date: DateTime<Utc>,
}

/// Field values of a post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub published: bool,
    pub publication_date: DateTime<Utc>,
}

impl NewPost {
    /// Build a post from a create payload.
    ///
    /// Missing `title` and `body` become empty strings and then fail validation,
    /// a missing `published` is `false` and a missing `publication_date` is `now`.
    /// A present but blank or unparseable `publication_date` is a violation.
    pub fn from_input(input: &PostInput, now: DateTime<Utc>) -> Result<Self, DomainError> {
        let title = input.title.clone().unwrap_or_default();
        let body = input.body.clone().unwrap_or_default();
        let published = input.published.unwrap_or(false);

        let mut violations = Vec::new();
        if is_blank(&title) {
            violations.push(violation("title", NOT_BLANK));
        }
        if is_blank(&body) {
            violations.push(violation("body", NOT_BLANK));
        }

        let publication_date = match input.publication_date.as_deref() {
            None => Some(now),
            Some(raw) if is_blank(raw) => {
                violations.push(violation("publication_date", NOT_BLANK));
                None
            }
            Some(raw) => {
                let parsed = parse_publication_date(raw);
                if parsed.is_none() {
                    violations.push(violation("publication_date", NOT_A_DATETIME));
                }
                parsed
            }
        };

        match publication_date {
            Some(publication_date) if violations.is_empty() => Ok(Self {
                title,
                body,
                published,
                publication_date,
            }),
            _ => Err(DomainError::Validation(violations)),
        }
    }
}

impl Post {
    /// Build a stored post from its generated id and field values.
    pub fn from_new(id: i32, post: NewPost) -> Self {
        Self {
            id,
            title: post.title,
            body: post.body,
            published: post.published,
            publication_date: post.publication_date,
        }
    }

    /// Apply a partial update.
    ///
    /// Only non-empty incoming values overwrite. `published: false` counts as
    /// empty and leaves the flag unchanged. Nothing is applied when the
    /// incoming `publication_date` cannot be parsed.
    pub fn apply_update(&mut self, input: &PostInput) -> Result<(), DomainError> {
        let publication_date = match non_empty(&input.publication_date) {
            Some(raw) => Some(parse_publication_date(raw).ok_or_else(|| {
                DomainError::Validation(vec![violation("publication_date", NOT_A_DATETIME)])
            })?),
            None => None,
        };

        if let Some(title) = non_empty(&input.title) {
            self.title = title.to_owned();
        }
        if let Some(body) = non_empty(&input.body) {
            self.body = body.to_owned();
        }
        if input.published == Some(true) {
            self.published = true;
        }
        if let Some(publication_date) = publication_date {
            self.publication_date = publication_date;
        }

        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !is_blank(v))
}

/// Empty or whitespace only. Shared by create and update.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn violation(field: &str, message: &str) -> String {
    format!("{field}: {message}")
}
