//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] for the duration of one
//! request and orchestrates repositories and domain rules.

pub mod context;
pub mod error;
pub mod feed;
pub mod follow;
pub mod post;
pub mod profile;
pub mod vote;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use feed::FeedService;
pub use follow::FollowService;
pub use post::PostService;
pub use profile::ProfileService;
pub use vote::VoteService;
