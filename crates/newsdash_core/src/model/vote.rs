//! Per-viewer vote state machine.
//!
//! # Responsibility
//! - Map `(current user vote, requested direction)` to the unit deltas the
//!   store must apply and the viewer's next vote state.
//!
//! # Invariants
//! - The reducer is pure; it never touches the store.
//! - Every delta is a unit step (`+1` or `-1`). Multi-step transitions are
//!   emitted as separate deltas and applied as separate store mutations.

use serde::{Deserialize, Serialize};

/// Direction of a vote click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    fn delta(self) -> VoteDelta {
        match self {
            Self::Up => VoteDelta::Increment,
            Self::Down => VoteDelta::Decrement,
        }
    }
}

/// The viewer's current vote on one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserVote {
    #[default]
    Unvoted,
    UpVoted,
    DownVoted,
}

impl UserVote {
    fn from_direction(direction: VoteDirection) -> Self {
        match direction {
            VoteDirection::Up => Self::UpVoted,
            VoteDirection::Down => Self::DownVoted,
        }
    }

    /// Direction currently held, if any.
    pub fn direction(self) -> Option<VoteDirection> {
        match self {
            Self::Unvoted => None,
            Self::UpVoted => Some(VoteDirection::Up),
            Self::DownVoted => Some(VoteDirection::Down),
        }
    }
}

/// Unit change applied to an item's vote count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteDelta {
    Increment,
    Decrement,
}

impl VoteDelta {
    /// Signed value of this delta.
    pub fn value(self) -> i64 {
        match self {
            Self::Increment => 1,
            Self::Decrement => -1,
        }
    }

    fn inverse(self) -> Self {
        match self {
            Self::Increment => Self::Decrement,
            Self::Decrement => Self::Increment,
        }
    }
}

/// Result of one vote click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTransition {
    /// Deltas to apply, in order, one store mutation each.
    pub deltas: &'static [VoteDelta],
    /// Viewer vote state after the click.
    pub next: UserVote,
}

impl VoteTransition {
    /// Net change of the vote count once every delta is applied.
    pub fn net(&self) -> i64 {
        self.deltas.iter().map(|delta| delta.value()).sum()
    }
}

const INCREMENT_ONCE: &[VoteDelta] = &[VoteDelta::Increment];
const DECREMENT_ONCE: &[VoteDelta] = &[VoteDelta::Decrement];
const INCREMENT_TWICE: &[VoteDelta] = &[VoteDelta::Increment, VoteDelta::Increment];
const DECREMENT_TWICE: &[VoteDelta] = &[VoteDelta::Decrement, VoteDelta::Decrement];

fn once(delta: VoteDelta) -> &'static [VoteDelta] {
    match delta {
        VoteDelta::Increment => INCREMENT_ONCE,
        VoteDelta::Decrement => DECREMENT_ONCE,
    }
}

fn twice(delta: VoteDelta) -> &'static [VoteDelta] {
    match delta {
        VoteDelta::Increment => INCREMENT_TWICE,
        VoteDelta::Decrement => DECREMENT_TWICE,
    }
}

/// Computes the transition for a vote click.
///
/// | current     | requested | deltas     | next        |
/// |-------------|-----------|------------|-------------|
/// | `Unvoted`   | `d`       | `[d]`      | `d`         |
/// | `UpVoted`   | `Up`      | `[-1]`     | `Unvoted`   |
/// | `DownVoted` | `Down`    | `[+1]`     | `Unvoted`   |
/// | `UpVoted`   | `Down`    | `[-1, -1]` | `DownVoted` |
/// | `DownVoted` | `Up`      | `[+1, +1]` | `UpVoted`   |
pub fn reduce_vote(current: UserVote, requested: VoteDirection) -> VoteTransition {
    match current.direction() {
        None => VoteTransition {
            deltas: once(requested.delta()),
            next: UserVote::from_direction(requested),
        },
        Some(held) if held == requested => VoteTransition {
            deltas: once(requested.delta().inverse()),
            next: UserVote::Unvoted,
        },
        // Carried-over quirk: a switch issues the requested unit delta twice
        // as two separate mutations instead of one net adjustment.
        Some(_) => VoteTransition {
            deltas: twice(requested.delta()),
            next: UserVote::from_direction(requested),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{reduce_vote, UserVote, VoteDelta, VoteDirection};

    #[test]
    fn switch_emits_two_unit_deltas() {
        let transition = reduce_vote(UserVote::UpVoted, VoteDirection::Down);
        assert_eq!(
            transition.deltas,
            &[VoteDelta::Decrement, VoteDelta::Decrement]
        );
        assert_eq!(transition.next, UserVote::DownVoted);
        assert_eq!(transition.net(), -2);
    }

    #[test]
    fn toggle_off_inverts_the_held_direction() {
        let transition = reduce_vote(UserVote::DownVoted, VoteDirection::Down);
        assert_eq!(transition.deltas, &[VoteDelta::Increment]);
        assert_eq!(transition.next, UserVote::Unvoted);
    }
}
