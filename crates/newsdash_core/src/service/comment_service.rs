//! Comment appender.
//!
//! # Responsibility
//! - Build viewer comments with a fresh id, the static viewer identity, and
//!   the current UTC date.
//! - Append them to the store in arrival order.
//!
//! # Invariants
//! - Comment ids issued by one source strictly increase.
//! - The body is stored exactly as drafted; blank drafts are rejected before
//!   this layer is reached.

use crate::config::FeedConfig;
use crate::dates::today_utc;
use crate::model::feed_item::{Comment, CommentId, ItemId};
use crate::store::item_store::ItemStore;
use chrono::{DateTime, Utc};
use log::debug;

/// Monotonic comment id source seeded by wall-clock milliseconds.
#[derive(Debug, Clone, Default)]
pub struct CommentIdSource {
    last: Option<CommentId>,
}

impl CommentIdSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `max(now_ms, last + 1)`.
    pub fn next(&mut self, now_ms: i64) -> CommentId {
        let id = match self.last {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last = Some(id);
        id
    }
}

/// Creates and appends comments authored by the session viewer.
#[derive(Debug, Clone)]
pub struct CommentAppender {
    ids: CommentIdSource,
    author: String,
    avatar: String,
}

impl CommentAppender {
    pub fn new(author: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            ids: CommentIdSource::new(),
            author: author.into(),
            avatar: avatar.into(),
        }
    }

    /// Uses the viewer identity from `config`.
    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(config.viewer_name(), config.viewer_avatar())
    }

    /// Builds one viewer comment stamped at `now`.
    pub fn compose(&mut self, body: impl Into<String>, now: DateTime<Utc>) -> Comment {
        let id = self.ids.next(now.timestamp_millis());
        Comment::new(
            id,
            self.author.as_str(),
            self.avatar.as_str(),
            body,
            today_utc(now),
        )
    }

    /// Composes a comment and appends it to `item_id`.
    ///
    /// Returns the new comment id, or `None` when the item is unknown. No id
    /// is consumed for an unknown item.
    pub fn append<S: ItemStore>(
        &mut self,
        store: &mut S,
        item_id: ItemId,
        body: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Option<CommentId> {
        if store.get_item(item_id).is_none() {
            debug!("event=comment_append module=comments status=skipped reason=unknown_item item_id={item_id}");
            return None;
        }
        let comment = self.compose(body, now);
        let comment_id = comment.id;
        store
            .append_comment(item_id, comment)
            .then_some(comment_id)
    }
}
