//! Per-item view flags and the item-id keyed view-state map.

use crate::model::feed_item::ItemId;
use crate::model::vote::UserVote;
use std::collections::HashMap;

/// Ephemeral UI state of one mounted item view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemViewState {
    expanded: bool,
    comments_open: bool,
    bookmarked: bool,
    user_vote: UserVote,
    draft: String,
}

impl ItemViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the full content is shown.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Shows the full content. There is no collapse while mounted.
    pub fn expand(&mut self) {
        self.expanded = true;
    }

    pub fn comments_open(&self) -> bool {
        self.comments_open
    }

    pub fn toggle_comments(&mut self) {
        self.comments_open = !self.comments_open;
    }

    pub fn is_bookmarked(&self) -> bool {
        self.bookmarked
    }

    /// Cosmetic only; no bookmark list exists.
    pub fn toggle_bookmark(&mut self) {
        self.bookmarked = !self.bookmarked;
    }

    pub fn user_vote(&self) -> UserVote {
        self.user_vote
    }

    pub fn set_user_vote(&mut self, vote: UserVote) {
        self.user_vote = vote;
    }

    /// Comment text being composed.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Submit is enabled only for a non-blank draft.
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Takes the draft for submission, leaving it empty.
    ///
    /// Returns `None` and keeps the draft when it is blank.
    pub fn take_draft(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        Some(std::mem::take(&mut self.draft))
    }
}

/// View states keyed by item id, owned by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct ViewStateMap {
    states: HashMap<ItemId, ItemViewState>,
}

impl ViewStateMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mounted state for `id`, mounting a default one if absent.
    pub fn mount(&mut self, id: ItemId) -> &mut ItemViewState {
        self.states.entry(id).or_default()
    }

    pub fn unmount(&mut self, id: ItemId) {
        self.states.remove(&id);
    }

    /// Drops every record whose id is not in `mounted`.
    pub fn retain_mounted(&mut self, mounted: &[ItemId]) {
        self.states.retain(|id, _| mounted.contains(id));
    }

    pub fn unmount_all(&mut self) {
        self.states.clear();
    }

    pub fn get(&self, id: ItemId) -> Option<&ItemViewState> {
        self.states.get(&id)
    }

    pub fn is_mounted(&self, id: ItemId) -> bool {
        self.states.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
