//! PostgreSQL implementations of the repository traits defined in blog-core

mod error;
mod follow;
mod group;
mod post;
mod user;
mod vote;

pub use follow::PgFollowRepository;
pub use group::PgGroupRepository;
pub use post::PgPostRepository;
pub use user::PgUserRepository;
pub use vote::PgVoteRepository;
