//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::notification::PostCreatedNotifier;
use blog_core::ports::{Mailer, PostRepository, TagRepository};
use blog_infra::{InMemoryStore, LogMailer, WebhookMailer};

#[cfg(feature = "postgres")]
use blog_infra::{PostgresPostRepository, PostgresTagRepository, database};

use crate::config::{AppConfig, MailConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub notifier: PostCreatedNotifier,
    /// Storage backend name, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let notifier = build_notifier(&config.mail);

        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                match database::connect(db_config).await {
                    Ok(conn) => {
                        tracing::info!("Application state initialized (postgres)");
                        return Self {
                            posts: Arc::new(PostgresPostRepository::new(conn.clone())),
                            tags: Arc::new(PostgresTagRepository::new(conn)),
                            notifier,
                            storage: "postgres",
                        };
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        tracing::info!("Running without postgres feature - using in-memory store");

        tracing::info!("Application state initialized (in-memory)");
        Self::in_memory(Arc::new(InMemoryStore::new()), notifier)
    }

    /// State backed by a single in-memory store.
    pub fn in_memory(store: Arc<InMemoryStore>, notifier: PostCreatedNotifier) -> Self {
        Self {
            posts: store.clone(),
            tags: store,
            notifier,
            storage: "memory",
        }
    }
}

fn build_notifier(config: &MailConfig) -> PostCreatedNotifier {
    let mailer: Arc<dyn Mailer> = match &config.webhook_url {
        Some(url) => {
            tracing::info!("Mail relay configured");
            Arc::new(WebhookMailer::new(url.clone()))
        }
        None => Arc::new(LogMailer),
    };

    if config.admin_email.is_none() {
        tracing::info!("ADMIN_EMAIL not set. Post-created notices are disabled.");
    }

    PostCreatedNotifier::new(mailer, config.from.clone(), config.admin_email.clone())
}
