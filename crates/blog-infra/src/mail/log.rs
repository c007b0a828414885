//! Log mailer - writes messages to the trace log instead of delivering them.

use async_trait::async_trait;

use blog_core::ports::{EmailMessage, MailError, Mailer};

/// Used when no mail relay is configured (development).
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), MailError> {
        tracing::info!(
            from = %message.from,
            to = %message.to,
            subject = %message.subject,
            "Mail not delivered (no relay configured)"
        );
        Ok(())
    }
}
