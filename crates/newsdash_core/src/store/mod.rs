//! Item store abstractions, in-memory implementation, and mock seed source.
//!
//! # Responsibility
//! - Own the authoritative feed items and their comments.
//! - Expose the only two mutation paths: unit vote deltas and comment appends.
//!
//! # Invariants
//! - Mutations against an unknown item id are silent no-ops.
//! - Store order is insertion order and is never rearranged by mutations.

pub mod item_store;
pub mod seed;
