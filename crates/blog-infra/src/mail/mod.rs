//! Mail delivery backends.

mod log;
mod webhook;

pub use self::log::LogMailer;
pub use webhook::WebhookMailer;
