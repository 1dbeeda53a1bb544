//! Domain entities - core business objects

mod follow;
mod group;
mod post;
mod user;
mod vote;

pub use follow::Follow;
pub use group::Group;
pub use post::Post;
pub use user::User;
pub use vote::{Vote, VoteKind};
