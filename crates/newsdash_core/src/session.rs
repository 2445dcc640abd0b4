//! Dashboard feed session.
//!
//! # Responsibility
//! - Run the one-shot simulated feed load.
//! - Track the active category filter and tab.
//! - Mount and unmount per-item view state as items enter and leave the
//!   displayed feed.
//! - Route presentation intents and project the feed for rendering.
//!
//! # Invariants
//! - The deferred load fires at most once per mount and never retries.
//! - Intents arriving before the load, or aimed at items that are not
//!   displayed, are ignored.
//! - A view-state record exists exactly for the currently displayed items.

use crate::config::FeedConfig;
use crate::dates::format_relative;
use crate::feed::filter::{feed_heading, ViewMode};
use crate::model::category::{Category, CategoryFilter};
use crate::model::feed_item::{Comment, CommentId, FeedItem, ItemId};
use crate::model::vote::{UserVote, VoteDirection};
use crate::service::feed_service::FeedService;
use crate::store::item_store::{InMemoryItemStore, StoreResult};
use crate::store::seed::FeedSource;
use crate::view::item_view::{ItemViewState, ViewStateMap};
use chrono::{DateTime, Utc};
use log::{debug, error, info};
use std::time::Instant;

/// Message shown in the latest tab when nothing matches the filter.
pub const EMPTY_FEED_MESSAGE: &str = "No news found in this category";

/// User intent forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedIntent {
    Vote {
        item_id: ItemId,
        direction: VoteDirection,
    },
    ToggleComments(ItemId),
    /// "Read more".
    Expand(ItemId),
    ToggleBookmark(ItemId),
    EditDraft {
        item_id: ItemId,
        text: String,
    },
    SubmitComment(ItemId),
    SelectCategory(CategoryFilter),
    SelectViewMode(ViewMode),
}

#[derive(Debug, Clone, Copy)]
struct DeferredLoad {
    ready_at: Instant,
}

impl DeferredLoad {
    fn is_due(&self, now: Instant) -> bool {
        now >= self.ready_at
    }
}

/// One mounted dashboard feed.
pub struct FeedSession<F: FeedSource> {
    config: FeedConfig,
    source: F,
    pending: Option<DeferredLoad>,
    service: Option<FeedService<InMemoryItemStore>>,
    category: CategoryFilter,
    mode: ViewMode,
    views: ViewStateMap,
}

impl<F: FeedSource> FeedSession<F> {
    /// Mounts a session at `now`; items appear once `poll` passes the load
    /// delay.
    pub fn start(config: FeedConfig, source: F, now: Instant) -> Self {
        let pending = Some(DeferredLoad {
            ready_at: now + config.load_delay(),
        });
        debug!(
            "event=feed_mount module=session status=loading delay_ms={}",
            config.load_delay().as_millis()
        );
        Self {
            config,
            source,
            pending,
            service: None,
            category: CategoryFilter::All,
            mode: ViewMode::Latest,
            views: ViewStateMap::new(),
        }
    }

    /// Completes the deferred load when it is due.
    ///
    /// Returns `Ok(true)` on the call that performed the load.
    ///
    /// # Errors
    /// - Returns `StoreError` when the source yields invalid or duplicate
    ///   items; the session then stays loading and will not retry.
    pub fn poll(&mut self, now: Instant) -> StoreResult<bool> {
        let Some(pending) = self.pending else {
            return Ok(false);
        };
        if !pending.is_due(now) {
            return Ok(false);
        }
        self.pending = None;

        let store = InMemoryItemStore::from_items(self.source.fetch()).map_err(|err| {
            error!("event=feed_load module=session status=error error={err}");
            err
        })?;
        info!(
            "event=feed_load module=session status=ok items={}",
            store.len()
        );
        self.service = Some(FeedService::new(store, &self.config));
        self.sync_mounts();
        Ok(true)
    }

    /// Recreates the feed as if navigating away and back: store and view
    /// state are discarded and the deferred load restarts.
    pub fn remount(&mut self, now: Instant) {
        self.service = None;
        self.views.unmount_all();
        self.category = CategoryFilter::All;
        self.mode = ViewMode::Latest;
        self.pending = Some(DeferredLoad {
            ready_at: now + self.config.load_delay(),
        });
        debug!("event=feed_mount module=session status=loading reason=remount");
    }

    pub fn is_loading(&self) -> bool {
        self.service.is_none()
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn view_mode(&self) -> ViewMode {
        self.mode
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    pub fn get_item(&self, id: ItemId) -> Option<&FeedItem> {
        self.service.as_ref().and_then(|service| service.get_item(id))
    }

    /// View state of a displayed item.
    pub fn view_state(&self, id: ItemId) -> Option<&ItemViewState> {
        self.views.get(id)
    }

    /// Displayed items for the active filter and tab.
    pub fn visible(&self) -> Vec<&FeedItem> {
        match &self.service {
            Some(service) => service.visible(self.category, self.mode),
            None => Vec::new(),
        }
    }

    pub fn visible_ids(&self) -> Vec<ItemId> {
        self.visible().into_iter().map(|item| item.id).collect()
    }

    /// Handles one intent stamped with the current wall clock.
    pub fn dispatch(&mut self, intent: FeedIntent) -> bool {
        self.dispatch_at(intent, Utc::now())
    }

    /// Handles one intent; `now` stamps submitted comments.
    ///
    /// Returns whether the intent was accepted.
    pub fn dispatch_at(&mut self, intent: FeedIntent, now: DateTime<Utc>) -> bool {
        if self.service.is_none() {
            debug!("event=intent module=session status=skipped reason=loading");
            return false;
        }

        let handled = match intent {
            FeedIntent::SelectCategory(filter) => {
                self.category = filter;
                true
            }
            FeedIntent::SelectViewMode(mode) => {
                if mode != self.mode {
                    self.mode = mode;
                    // Tab panels are rebuilt, so every card starts fresh.
                    self.views.unmount_all();
                }
                true
            }
            FeedIntent::Vote { item_id, direction } => {
                self.with_item(item_id, |service, view| {
                    service.vote(view, item_id, direction);
                })
            }
            FeedIntent::ToggleComments(item_id) => {
                self.with_item(item_id, |_, view| view.toggle_comments())
            }
            FeedIntent::Expand(item_id) => self.with_item(item_id, |_, view| view.expand()),
            FeedIntent::ToggleBookmark(item_id) => {
                self.with_item(item_id, |_, view| view.toggle_bookmark())
            }
            FeedIntent::EditDraft { item_id, text } => {
                self.with_item(item_id, |_, view| view.set_draft(text))
            }
            FeedIntent::SubmitComment(item_id) => {
                let mut submitted: Option<CommentId> = None;
                let mounted = self.with_item(item_id, |service, view| {
                    submitted = service.submit_comment_at(view, item_id, now);
                });
                mounted && submitted.is_some()
            }
        };

        self.sync_mounts();
        handled
    }

    fn with_item(
        &mut self,
        item_id: ItemId,
        action: impl FnOnce(&mut FeedService<InMemoryItemStore>, &mut ItemViewState),
    ) -> bool {
        let Some(service) = self.service.as_mut() else {
            return false;
        };
        if !self.views.is_mounted(item_id) {
            debug!("event=intent module=session status=skipped reason=not_displayed item_id={item_id}");
            return false;
        }
        action(service, self.views.mount(item_id));
        true
    }

    fn sync_mounts(&mut self) {
        let displayed = self.visible_ids();
        self.views.retain_mounted(&displayed);
        for id in displayed {
            self.views.mount(id);
        }
    }

    /// Projects the session against the current wall clock.
    pub fn render_now(&self) -> FeedView {
        self.render(Utc::now())
    }

    /// Projects the session for rendering; relative dates use `now`.
    pub fn render(&self, now: DateTime<Utc>) -> FeedView {
        let cards: Vec<CardView> = self
            .visible()
            .into_iter()
            .map(|item| {
                let view = self.views.get(item.id).cloned().unwrap_or_default();
                CardView::project(item, &view, now)
            })
            .collect();

        let empty_message = (!self.is_loading()
            && self.mode == ViewMode::Latest
            && cards.is_empty())
        .then_some(EMPTY_FEED_MESSAGE);

        FeedView {
            heading: feed_heading(self.category),
            category: self.category,
            mode: self.mode,
            loading: self.is_loading(),
            cards,
            empty_message,
        }
    }
}

/// Render projection of the whole feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedView {
    pub heading: &'static str,
    pub category: CategoryFilter,
    pub mode: ViewMode,
    /// Spinner state while the deferred load is pending.
    pub loading: bool,
    pub cards: Vec<CardView>,
    pub empty_message: Option<&'static str>,
}

/// Render projection of one feed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub item_id: ItemId,
    pub title: String,
    pub category: Category,
    pub image: String,
    pub excerpt: String,
    /// Present once expanded.
    pub full_content: Option<String>,
    pub show_read_more: bool,
    pub date: String,
    pub votes: i64,
    pub user_vote: UserVote,
    pub bookmarked: bool,
    pub comment_count: usize,
    /// Present while the comments panel is open.
    pub comments: Option<Vec<CommentView>>,
    pub draft: String,
    pub can_submit: bool,
}

impl CardView {
    fn project(item: &FeedItem, view: &ItemViewState, now: DateTime<Utc>) -> Self {
        Self {
            item_id: item.id,
            title: item.title.clone(),
            category: item.category,
            image: item.image.clone(),
            excerpt: item.excerpt.clone(),
            full_content: view.is_expanded().then(|| item.content.clone()),
            show_read_more: !view.is_expanded(),
            date: format_relative(&item.date, now),
            votes: item.votes,
            user_vote: view.user_vote(),
            bookmarked: view.is_bookmarked(),
            comment_count: item.comment_count(),
            comments: view.comments_open().then(|| {
                item.comments
                    .iter()
                    .map(|comment| CommentView::project(comment, now))
                    .collect()
            }),
            draft: view.draft().to_string(),
            can_submit: view.can_submit(),
        }
    }
}

/// Render projection of one comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub id: CommentId,
    pub author: String,
    /// Avatar fallback letter.
    pub initial: Option<char>,
    pub avatar: String,
    pub content: String,
    pub date: String,
}

impl CommentView {
    fn project(comment: &Comment, now: DateTime<Utc>) -> Self {
        Self {
            id: comment.id,
            author: comment.author.clone(),
            initial: comment.author_initial(),
            avatar: comment.avatar.clone(),
            content: comment.content.clone(),
            date: format_relative(&comment.date, now),
        }
    }
}
