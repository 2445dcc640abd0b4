//! Feed use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations into interaction-level APIs.
//! - Keep presentation callers decoupled from store details.

pub mod comment_service;
pub mod feed_service;
