//! # Blog Core
//!
//! The domain layer of the blog service.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! post and tag entities, payload mapping rules, repository and mailer ports,
//! tag association and the post-created notification.

pub mod domain;
pub mod error;
pub mod notification;
pub mod ports;
pub mod tagging;

pub use error::{DomainError, RepoError};
