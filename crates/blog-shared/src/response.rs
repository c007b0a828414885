//! The uniform response envelope.

use serde::{Deserialize, Serialize};

/// Every endpoint answers with `{success, error, result}`.
///
/// On success `success` is `true` and `error` is `null`; on failure `success`
/// is `null`, `error` is `true` and `result` carries a human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: Option<bool>,
    pub error: Option<bool>,
    pub result: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(result: T) -> Self {
        Self {
            success: Some(true),
            error: None,
            result,
        }
    }
}

impl ApiResponse<String> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: None,
            error: Some(true),
            result: message.into(),
        }
    }
}
