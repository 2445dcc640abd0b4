//! Feed domain model.
//!
//! # Responsibility
//! - Define canonical data structures shared by store, feed, and session.
//! - Keep the per-viewer vote state machine free of storage concerns.
//!
//! # Invariants
//! - Every feed item is identified by a stable `ItemId`.
//! - Comments are immutable once created.

pub mod category;
pub mod feed_item;
pub mod vote;
