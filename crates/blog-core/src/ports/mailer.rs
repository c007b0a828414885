//! Outbound mail port.

use async_trait::async_trait;
use serde::Serialize;

/// A single outbound email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
    pub content_type: String,
}

/// Mailer trait - abstraction over mail delivery backends.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<(), MailError>;
}

/// Mail delivery errors.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Failed to send mail: {0}")]
    Send(String),

    #[error("Mail relay rejected message with status {0}")]
    Rejected(u16),
}
