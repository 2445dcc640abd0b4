//! Presentation-owned view state.
//!
//! # Responsibility
//! - Hold ephemeral per-item UI flags outside the item store.
//!
//! # Invariants
//! - Nothing here is written back to the store.
//! - A record lives exactly as long as its item view is mounted.

pub mod item_view;
