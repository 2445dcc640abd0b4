//! Feed derivation over item store snapshots.

pub mod filter;
