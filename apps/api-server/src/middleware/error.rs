//! Error handling - failures rendered as the `{success, error, result}` envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::error::{DomainError, RepoError};
use blog_shared::ApiResponse;
use std::fmt;

pub const POST_NOT_FOUND: &str = "Post not found";

/// Application-level error type that converts to envelope responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Validation(Vec<String>),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(detail) | AppError::BadRequest(detail) => {
                ApiResponse::failure(detail.as_str())
            }
            AppError::Validation(errors) => ApiResponse::failure(errors.join("\n")),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ApiResponse::failure("Internal server error")
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => AppError::NotFound(POST_NOT_FOUND.to_string()),
            DomainError::Validation(errors) => AppError::Validation(errors),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound(POST_NOT_FOUND.to_string()),
            RepoError::Constraint(msg) => AppError::BadRequest(msg),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_validation_is_422_with_messages() {
        let (status, body) = body_json(AppError::Validation(vec![
            "title: This value should not be blank.".into(),
            "body: This value should not be blank.".into(),
        ]))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], serde_json::Value::Null);
        assert_eq!(body["error"], true);
        assert_eq!(
            body["result"],
            "title: This value should not be blank.\nbody: This value should not be blank."
        );
    }

    #[actix_web::test]
    async fn test_internal_error_hides_detail() {
        let (status, body) = body_json(AppError::from(RepoError::Query("boom".into()))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["result"], "Internal server error");
    }

    #[test]
    fn test_repo_not_found_maps_to_post_not_found() {
        let err = AppError::from(RepoError::NotFound);
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == POST_NOT_FOUND));
    }
}
