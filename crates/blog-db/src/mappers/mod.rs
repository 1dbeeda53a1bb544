//! Model -> entity mappers
//!
//! `From<Model> for Entity` for every table; votes use `TryFrom` because the
//! stored kind is free text to SQLx.

mod group;
mod post;
mod user;
mod vote;

pub use vote::parse_vote_kind;
