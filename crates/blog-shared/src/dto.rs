//! Data Transfer Objects - response payloads placed in the envelope `result`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public projection of a post. `id` and tags are not exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    pub title: String,
    pub body: String,
    pub publication_date: DateTime<Utc>,
    pub published: bool,
}

/// `result` of the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResult {
    pub posts: Vec<PostResponse>,
}

/// `result` of the get-one and update endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResult {
    pub posts: PostResponse,
}

/// `result` of the create endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResult {
    pub id: i32,
}
