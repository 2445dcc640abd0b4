//! Feed interaction service.
//!
//! # Responsibility
//! - Turn vote clicks and comment submits into store mutations.
//! - Keep the viewer's per-item state in sync with what was applied.
//! - Expose the derived feed for one filter and tab.
//!
//! # Invariants
//! - Vote transitions come only from `reduce_vote`; each delta is one
//!   `ItemStore::apply_vote` call.
//! - A blank draft never reaches the comment appender.

use crate::config::FeedConfig;
use crate::feed::filter::{visible_items, ViewMode};
use crate::model::category::CategoryFilter;
use crate::model::feed_item::{CommentId, FeedItem, ItemId};
use crate::model::vote::{reduce_vote, VoteDirection, VoteTransition};
use crate::service::comment_service::CommentAppender;
use crate::store::item_store::ItemStore;
use crate::view::item_view::ItemViewState;
use chrono::{DateTime, Utc};
use log::debug;

/// Service facade over one item store.
pub struct FeedService<S: ItemStore> {
    store: S,
    comments: CommentAppender,
    trending_threshold: i64,
}

impl<S: ItemStore> FeedService<S> {
    /// Creates a service using the provided store and session config.
    pub fn new(store: S, config: &FeedConfig) -> Self {
        Self {
            store,
            comments: CommentAppender::from_config(config),
            trending_threshold: config.trending_threshold(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn get_item(&self, id: ItemId) -> Option<&FeedItem> {
        self.store.get_item(id)
    }

    /// Applies one vote click from the viewer owning `view`.
    ///
    /// The viewer state always advances; store deltas against an unknown id
    /// are no-ops.
    pub fn vote(
        &mut self,
        view: &mut ItemViewState,
        item_id: ItemId,
        direction: VoteDirection,
    ) -> VoteTransition {
        let transition = reduce_vote(view.user_vote(), direction);
        // Switches replay the unit delta as two separate calls; see
        // `reduce_vote`.
        for delta in transition.deltas {
            self.store.apply_vote(item_id, *delta);
        }
        view.set_user_vote(transition.next);
        debug!(
            "event=vote module=feed status=ok item_id={item_id} direction={direction:?} deltas={} next={:?}",
            transition.deltas.len(),
            transition.next
        );
        transition
    }

    /// Submits the draft held by `view` as a comment stamped with the
    /// current time.
    pub fn submit_comment(&mut self, view: &mut ItemViewState, item_id: ItemId) -> Option<CommentId> {
        self.submit_comment_at(view, item_id, Utc::now())
    }

    /// Submits the draft held by `view` as a comment stamped at `now`.
    ///
    /// Returns `None` without touching the store when the draft is blank,
    /// and `None` when the item is unknown. The draft is cleared whenever it
    /// was non-blank.
    pub fn submit_comment_at(
        &mut self,
        view: &mut ItemViewState,
        item_id: ItemId,
        now: DateTime<Utc>,
    ) -> Option<CommentId> {
        let Some(body) = view.take_draft() else {
            debug!("event=comment_submit module=feed status=skipped reason=blank_draft item_id={item_id}");
            return None;
        };
        self.comments.append(&mut self.store, item_id, body, now)
    }

    /// Derives the displayed items for one category filter and tab.
    pub fn visible(&self, filter: CategoryFilter, mode: ViewMode) -> Vec<&FeedItem> {
        visible_items(
            self.store.list_items(),
            filter,
            mode,
            self.trending_threshold,
        )
    }
}
