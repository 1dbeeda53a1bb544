//! Vote state machine
//!
//! Each (post, voter) pair is in one of three states. A like or dislike
//! request moves the pair along this table:
//!
//! | from     | request | to       | rating delta      |
//! |----------|---------|----------|-------------------|
//! | NoVote   | like    | Liked    | +1                |
//! | NoVote   | dislike | Disliked | -1                |
//! | Liked    | like    | Liked    | 0 (repeated)      |
//! | Liked    | dislike | NoVote   | -1 (reverted)     |
//! | Disliked | dislike | Disliked | 0 (repeated)      |
//! | Disliked | like    | NoVote   | +1 (reverted)     |
//!
//! Voting against your own vote cancels it rather than flipping it, so a
//! like followed by a dislike returns the post to its previous rating.

use serde::{Deserialize, Serialize};

use crate::entities::VoteKind;

/// Ledger state of one (post, voter) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VoteState {
    #[default]
    NoVote,
    Liked,
    Disliked,
}

/// What the ledger must do to reach the next state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerChange {
    Insert(VoteKind),
    Delete,
    None,
}

/// Result of a vote request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// A new vote was recorded
    Applied { delta: i64 },
    /// An opposite vote cancelled the existing one
    Reverted { delta: i64 },
    /// Same vote again; nothing changed
    Repeated,
    /// Anonymous caller; nothing changed
    NotAuthorized,
}

/// Wire status reported to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoteStatus {
    Ok,
    Repeated,
    NotAuthorized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTransition {
    pub next: VoteState,
    pub outcome: VoteOutcome,
    pub change: LedgerChange,
}

impl VoteState {
    pub fn from_kind(kind: Option<VoteKind>) -> Self {
        match kind {
            None => Self::NoVote,
            Some(VoteKind::Like) => Self::Liked,
            Some(VoteKind::Dislike) => Self::Disliked,
        }
    }

    /// Kind of the stored vote, if any
    pub fn kind(self) -> Option<VoteKind> {
        match self {
            Self::NoVote => None,
            Self::Liked => Some(VoteKind::Like),
            Self::Disliked => Some(VoteKind::Dislike),
        }
    }

    pub fn transition(self, requested: VoteKind) -> VoteTransition {
        match self.kind() {
            None => VoteTransition {
                next: Self::from_kind(Some(requested)),
                outcome: VoteOutcome::Applied {
                    delta: requested.delta(),
                },
                change: LedgerChange::Insert(requested),
            },
            Some(existing) if existing == requested => VoteTransition {
                next: self,
                outcome: VoteOutcome::Repeated,
                change: LedgerChange::None,
            },
            Some(existing) => VoteTransition {
                next: Self::NoVote,
                outcome: VoteOutcome::Reverted {
                    delta: -existing.delta(),
                },
                change: LedgerChange::Delete,
            },
        }
    }
}

impl VoteOutcome {
    /// Rating change carried by this outcome
    pub fn delta(self) -> i64 {
        match self {
            Self::Applied { delta } | Self::Reverted { delta } => delta,
            Self::Repeated | Self::NotAuthorized => 0,
        }
    }

    pub fn status(self) -> VoteStatus {
        match self {
            Self::Applied { .. } | Self::Reverted { .. } => VoteStatus::Ok,
            Self::Repeated => VoteStatus::Repeated,
            Self::NotAuthorized => VoteStatus::NotAuthorized,
        }
    }

    /// Label used in log events
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied { .. } => "applied",
            Self::Reverted { .. } => "reverted",
            Self::Repeated => "repeated",
            Self::NotAuthorized => "not_authorized",
        }
    }
}
