//! # blog-db
//!
//! Storage layer implementing the `blog-core` repository traits.
//!
//! - [`repositories`]: PostgreSQL via SQLx, one repository per table
//! - [`memory`]: an in-process store behind a single lock, for tests and
//!   database-less local runs
//! - [`pool`]: connection pool and schema migrations
//!
//! ```rust,ignore
//! use blog_db::{create_pool, run_migrations, DatabaseConfig, PgVoteRepository};
//!
//! let pool = create_pool(&DatabaseConfig::from(&app_config.database)).await?;
//! run_migrations(&pool).await?;
//! let votes = PgVoteRepository::new(pool);
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

pub use memory::MemoryStore;
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgFollowRepository, PgGroupRepository, PgPostRepository, PgUserRepository, PgVoteRepository,
};
