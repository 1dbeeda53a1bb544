//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod feed;
pub mod follows;
pub mod groups;
pub mod health;
pub mod posts;
pub mod profiles;
pub mod votes;
