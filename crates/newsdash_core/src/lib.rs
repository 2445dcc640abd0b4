//! Core interaction logic for the NewsDash feed.
//! This crate is the single source of truth for vote, comment, and feed
//! ordering invariants.

pub mod config;
pub mod dates;
pub mod feed;
pub mod logging;
pub mod model;
pub mod service;
pub mod session;
pub mod store;
pub mod view;

pub use config::{ConfigError, FeedConfig};
pub use feed::filter::{feed_heading, visible_items, ParseViewModeError, ViewMode};
pub use logging::{default_log_dir, init_logging, logging_status, LogLevel};
pub use model::category::{Category, CategoryFilter, ParseCategoryError, SIDEBAR_FILTERS};
pub use model::feed_item::{Comment, CommentId, FeedItem, ItemId, ItemValidationError};
pub use model::vote::{reduce_vote, UserVote, VoteDelta, VoteDirection, VoteTransition};
pub use service::comment_service::{CommentAppender, CommentIdSource};
pub use service::feed_service::FeedService;
pub use session::{CardView, CommentView, FeedIntent, FeedSession, FeedView};
pub use store::item_store::{InMemoryItemStore, ItemStore, StoreError, StoreResult};
pub use store::seed::{seed_items, FeedSource, MockFeedSource, StaticFeedSource};
pub use view::item_view::{ItemViewState, ViewStateMap};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
