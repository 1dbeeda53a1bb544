//! # blog-core
//!
//! Domain layer for the blog platform: entities, value objects, the vote
//! state machine, follow rules, feed ordering and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod rules;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Follow, Group, Post, User, Vote, VoteKind};
pub use error::DomainError;
pub use rules::{
    FollowEdge, FollowOutcome, LedgerChange, SelfFollow, UnfollowOutcome, VoteOutcome, VoteState,
    VoteStatus, VoteTransition,
};
pub use traits::{
    FollowRepository, GroupRepository, PostQuery, PostRepository, RepoResult, UserRepository,
    VoteRecord, VoteRepository,
};
pub use value_objects::{Identity, Snowflake, SnowflakeGenerator, SnowflakeParseError};
