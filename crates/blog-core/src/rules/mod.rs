//! Business rules - pure decision logic shared by every storage backend

pub mod feed;
mod follow;
mod voting;

pub use follow::{FollowEdge, FollowOutcome, SelfFollow, UnfollowOutcome};
pub use voting::{LedgerChange, VoteOutcome, VoteState, VoteStatus, VoteTransition};
