//! Database models - SQLx row structs for the PostgreSQL tables

mod group;
mod post;
mod user;
mod vote;

pub use group::GroupModel;
pub use post::PostModel;
pub use user::UserModel;
pub use vote::VoteModel;
