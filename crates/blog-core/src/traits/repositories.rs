//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; `blog-db` provides a PostgreSQL
//! implementation and an in-process one.

use async_trait::async_trait;

use crate::entities::{Follow, Group, Post, User, Vote, VoteKind};
use crate::error::DomainError;
use crate::rules::{VoteOutcome, VoteState};
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Query options
// ============================================================================

/// Offset window over an ordered post sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostQuery {
    pub offset: i64,
    pub limit: i64,
}

impl PostQuery {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset: offset.max(0),
            limit: limit.max(0),
        }
    }

    /// Window for a 1-based page number
    pub fn page(page: u32, per_page: u32) -> Self {
        let page = i64::from(page.max(1));
        let per_page = i64::from(per_page);
        Self::new((page - 1) * per_page, per_page)
    }

    /// Apply the window to an already ordered list
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset as usize)
            .take(self.limit as usize)
            .collect()
    }
}

impl Default for PostQuery {
    fn default() -> Self {
        Self::new(0, 10)
    }
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by the username used in profile URLs
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Create a new user (`UsernameTaken` on duplicate)
    async fn create(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Group Repository
// ============================================================================

#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Group>>;

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Group>>;

    /// Create a new group (`GroupSlugTaken` on duplicate)
    async fn create(&self, group: &Group) -> RepoResult<()>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Add `delta` to the stored rating and return the new rating.
    /// Fails with `PostNotFound` if the post does not exist.
    async fn apply_rating_delta(&self, post_id: Snowflake, delta: i64) -> RepoResult<i64>;

    /// All posts, newest first
    async fn find_latest(&self, query: PostQuery) -> RepoResult<Vec<Post>>;

    /// All posts by rating descending, newest first among ties
    async fn find_best(&self, query: PostQuery) -> RepoResult<Vec<Post>>;

    /// Posts by one author, newest first
    async fn find_by_author(&self, author_id: Snowflake, query: PostQuery)
        -> RepoResult<Vec<Post>>;

    async fn count_by_author(&self, author_id: Snowflake) -> RepoResult<i64>;

    /// Posts in one group, newest first
    async fn find_by_group(&self, group_id: Snowflake, query: PostQuery) -> RepoResult<Vec<Post>>;

    /// Posts whose author is followed by `follower_id`, newest first
    async fn find_by_followed_authors(
        &self,
        follower_id: Snowflake,
        query: PostQuery,
    ) -> RepoResult<Vec<Post>>;
}

// ============================================================================
// Vote Repository
// ============================================================================

/// Result of an atomic vote: what happened, where the pair ended up, and
/// the post's rating after the change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteRecord {
    pub outcome: VoteOutcome,
    pub state: VoteState,
    pub rating: i64,
}

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Current vote of `voter_id` on `post_id`
    async fn find(&self, post_id: Snowflake, voter_id: Snowflake) -> RepoResult<Option<Vote>>;

    /// Run one vote through the state machine and apply the resulting ledger
    /// change and rating delta as a single atomic step. `vote_id` is used
    /// only if a new vote row is inserted.
    ///
    /// Fails with `PostNotFound` if the post does not exist.
    async fn record(
        &self,
        vote_id: Snowflake,
        post_id: Snowflake,
        voter_id: Snowflake,
        kind: VoteKind,
    ) -> RepoResult<VoteRecord>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Insert the edge if absent. Returns `true` if a row was created.
    async fn create(&self, follow: &Follow) -> RepoResult<bool>;

    /// Remove the edge if present. Returns `true` if a row was deleted.
    async fn delete(&self, follower_id: Snowflake, followee_id: Snowflake) -> RepoResult<bool>;

    async fn exists(&self, follower_id: Snowflake, followee_id: Snowflake) -> RepoResult<bool>;
}
