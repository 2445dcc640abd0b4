//! Feed item and comment domain model.
//!
//! # Responsibility
//! - Define the canonical article record shown in the feed.
//! - Define immutable comment records attached to an item.
//!
//! # Invariants
//! - `id` is non-zero, unique within a store, and never changes.
//! - `votes` is the cumulative effect of every applied vote delta and may go
//!   negative.
//! - `comments` is append-only and kept in arrival order.

use crate::model::category::Category;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier of a feed item.
pub type ItemId = u64;

/// Identifier of a comment, unique within its item.
pub type CommentId = i64;

/// Validation errors for feed item records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Item id `0` is reserved.
    ZeroId,
    /// Title is blank after trim.
    BlankTitle(ItemId),
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroId => write!(f, "feed item id must be non-zero"),
            Self::BlankTitle(id) => write!(f, "feed item {id} has a blank title"),
        }
    }
}

impl Error for ItemValidationError {}

/// One comment on a feed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    /// Author display name.
    pub author: String,
    /// Avatar image reference.
    pub avatar: String,
    /// Comment body as typed by the author.
    pub content: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
}

impl Comment {
    pub fn new(
        id: CommentId,
        author: impl Into<String>,
        avatar: impl Into<String>,
        content: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            avatar: avatar.into(),
            content: content.into(),
            date: date.into(),
        }
    }

    /// First character of the author name, used as avatar fallback.
    pub fn author_initial(&self) -> Option<char> {
        self.author.chars().next()
    }
}

/// Canonical feed article record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: ItemId,
    pub title: String,
    /// Short summary shown while collapsed.
    pub excerpt: String,
    /// Full article body shown once expanded.
    pub content: String,
    /// Image reference.
    pub image: String,
    pub category: Category,
    /// Publish date as supplied by the source. Not parsed at ingest.
    pub date: String,
    pub votes: i64,
    pub comments: Vec<Comment>,
}

impl FeedItem {
    /// Checks record-level invariants before the item enters a store.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.id == 0 {
            return Err(ItemValidationError::ZeroId);
        }
        if self.title.trim().is_empty() {
            return Err(ItemValidationError::BlankTitle(self.id));
        }
        Ok(())
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}
