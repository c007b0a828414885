//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! This crate contains the database repositories, the in-memory store and
//! the mail delivery backends.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repositories via SeaORM
//! - `minimal` - No database driver, in-memory store only

pub mod database;
pub mod mail;

// Re-exports
pub use database::{DatabaseConfig, InMemoryStore};
pub use mail::{LogMailer, WebhookMailer};

#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, PostgresTagRepository};
