//! Category filter and view-mode ordering.
//!
//! # Responsibility
//! - Derive the displayed item sequence from a store snapshot.
//!
//! # Invariants
//! - Derivation is pure; the snapshot is never reordered in place.
//! - `Popular` ties keep store order (stable sort).
//! - `Trending` keeps store order and only drops items.

use crate::model::category::CategoryFilter;
use crate::model::feed_item::FeedItem;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Default vote threshold for the trending tab.
pub const DEFAULT_TRENDING_THRESHOLD: i64 = 5;

/// Feed tab selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Store order.
    #[default]
    Latest,
    /// Vote count descending.
    Popular,
    /// Vote count above the trending threshold, store order.
    Trending,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Latest, ViewMode::Popular, ViewMode::Trending];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Popular => "popular",
            Self::Trending => "trending",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::Popular => "Popular",
            Self::Trending => "Trending",
        }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseViewModeError(pub String);

impl Display for ParseViewModeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown view mode `{}`; expected latest|popular|trending",
            self.0
        )
    }
}

impl Error for ParseViewModeError {}

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.slug() == normalized)
            .ok_or(ParseViewModeError(normalized))
    }
}

/// Keeps items matching `filter`, in store order.
pub fn filter_items(items: &[FeedItem], filter: CategoryFilter) -> Vec<&FeedItem> {
    items
        .iter()
        .filter(|item| filter.matches(item.category))
        .collect()
}

/// Derives the displayed sequence for one category filter and tab.
pub fn visible_items(
    items: &[FeedItem],
    filter: CategoryFilter,
    mode: ViewMode,
    trending_threshold: i64,
) -> Vec<&FeedItem> {
    let mut visible = filter_items(items, filter);
    match mode {
        ViewMode::Latest => {}
        ViewMode::Popular => visible.sort_by(|a, b| b.votes.cmp(&a.votes)),
        ViewMode::Trending => visible.retain(|item| item.votes > trending_threshold),
    }
    visible
}

/// Feed title for the active category filter.
pub fn feed_heading(filter: CategoryFilter) -> &'static str {
    match filter {
        CategoryFilter::All => "Latest News",
        CategoryFilter::Only(category) => category.label(),
    }
}
