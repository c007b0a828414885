//! Post-created notice sent to the site administrator.

use std::sync::Arc;

use crate::ports::{EmailMessage, MailError, Mailer};

pub const POST_CREATED_SUBJECT: &str = "Post Created";
pub const POST_CREATED_BODY: &str = "Post created";

/// Sends the fixed post-created notice to the configured admin address.
///
/// With no admin address every send is skipped.
#[derive(Clone)]
pub struct PostCreatedNotifier {
    mailer: Arc<dyn Mailer>,
    from: String,
    admin_email: Option<String>,
}

impl PostCreatedNotifier {
    pub fn new(mailer: Arc<dyn Mailer>, from: impl Into<String>, admin_email: Option<String>) -> Self {
        Self {
            mailer,
            from: from.into(),
            admin_email: admin_email
                .map(|email| email.trim().to_owned())
                .filter(|email| !email.is_empty()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.admin_email.is_some()
    }

    /// The notice as it would be sent, if notifications are enabled.
    pub fn notice(&self) -> Option<EmailMessage> {
        self.admin_email.as_ref().map(|to| EmailMessage {
            from: self.from.clone(),
            to: to.clone(),
            subject: POST_CREATED_SUBJECT.to_owned(),
            body: POST_CREATED_BODY.to_owned(),
            content_type: "text/html".to_owned(),
        })
    }

    /// Send the notice. Returns `false` when skipped.
    pub async fn send_post_created_notice(&self) -> Result<bool, MailError> {
        let Some(message) = self.notice() else {
            return Ok(false);
        };

        self.mailer.send(message).await?;
        Ok(true)
    }
}
