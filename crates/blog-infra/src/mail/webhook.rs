//! Webhook mailer - hands messages to an HTTP mail relay.

use async_trait::async_trait;

use blog_core::ports::{EmailMessage, MailError, Mailer};

/// Posts each message as JSON to the relay URL.
pub struct WebhookMailer {
    url: String,
    client: reqwest::Client,
}

impl WebhookMailer {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Mailer for WebhookMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), MailError> {
        let response = self
            .client
            .post(&self.url)
            .json(&message)
            .send()
            .await
            .map_err(|e| MailError::Send(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MailError::Rejected(status.as_u16()));
        }

        tracing::debug!(to = %message.to, "Mail handed to relay");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_relay_is_a_send_error() {
        let mailer = WebhookMailer::new("http://127.0.0.1:1/mail".to_string());
        let message = EmailMessage {
            from: "no-reply@example.com".into(),
            to: "admin@example.com".into(),
            subject: "Post Created".into(),
            body: "Post created".into(),
            content_type: "text/html".into(),
        };

        let result = mailer.send(message).await;
        assert!(matches!(result, Err(MailError::Send(_))));
    }
}
