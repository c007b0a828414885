use serde::{Deserialize, Serialize};

/// Tag entity - a named label shared between posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}
