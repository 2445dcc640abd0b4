//! Item store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide list/get access over the current feed snapshot.
//! - Apply unit vote deltas and append comments by item id.
//!
//! # Invariants
//! - Item ids are unique inside one store; seeding rejects duplicates.
//! - `apply_vote` and `append_comment` return `false` and change nothing when
//!   the id is unknown.

use crate::model::feed_item::{Comment, FeedItem, ItemId, ItemValidationError};
use crate::model::vote::VoteDelta;
use log::debug;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while building a store from seed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Two seed records share one id.
    DuplicateItemId(ItemId),
    /// Seed record failed validation.
    InvalidItem(ItemValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateItemId(id) => write!(f, "duplicate feed item id: {id}"),
            Self::InvalidItem(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateItemId(_) => None,
            Self::InvalidItem(err) => Some(err),
        }
    }
}

impl From<ItemValidationError> for StoreError {
    fn from(value: ItemValidationError) -> Self {
        Self::InvalidItem(value)
    }
}

/// Store interface for feed items.
pub trait ItemStore {
    /// Returns every item in store order.
    fn list_items(&self) -> &[FeedItem];
    fn get_item(&self, id: ItemId) -> Option<&FeedItem>;
    /// Adds one unit delta to the item's vote count.
    fn apply_vote(&mut self, id: ItemId, delta: VoteDelta) -> bool;
    /// Appends one comment at the end of the item's comment list.
    fn append_comment(&mut self, id: ItemId, comment: Comment) -> bool;
}

/// Vec-backed item store. Single-threaded; every mutation is visible
/// immediately to the next read.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemStore {
    items: Vec<FeedItem>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from seed items, preserving their order.
    ///
    /// # Errors
    /// - `StoreError::InvalidItem` when a record fails `FeedItem::validate`.
    /// - `StoreError::DuplicateItemId` when an id appears twice.
    pub fn from_items(items: Vec<FeedItem>) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            item.validate()?;
            if !seen.insert(item.id) {
                return Err(StoreError::DuplicateItemId(item.id));
            }
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut FeedItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

impl ItemStore for InMemoryItemStore {
    fn list_items(&self) -> &[FeedItem] {
        &self.items
    }

    fn get_item(&self, id: ItemId) -> Option<&FeedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn apply_vote(&mut self, id: ItemId, delta: VoteDelta) -> bool {
        let Some(item) = self.item_mut(id) else {
            debug!("event=vote_apply module=store status=skipped reason=unknown_item item_id={id}");
            return false;
        };
        item.votes += delta.value();
        debug!(
            "event=vote_apply module=store status=ok item_id={id} delta={} votes={}",
            delta.value(),
            item.votes
        );
        true
    }

    fn append_comment(&mut self, id: ItemId, comment: Comment) -> bool {
        let Some(item) = self.item_mut(id) else {
            debug!(
                "event=comment_append module=store status=skipped reason=unknown_item item_id={id}"
            );
            return false;
        };
        let comment_id = comment.id;
        item.comments.push(comment);
        debug!(
            "event=comment_append module=store status=ok item_id={id} comment_id={comment_id} count={}",
            item.comments.len()
        );
        true
    }
}
