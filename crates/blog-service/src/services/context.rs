//! Service context - dependency container for services
//!
//! Holds the repositories, the JWT service and the id generator.

use std::sync::Arc;

use blog_common::auth::JwtService;
use blog_core::traits::{
    FollowRepository, GroupRepository, PostRepository, UserRepository, VoteRepository,
};
use blog_core::{Snowflake, SnowflakeGenerator};
use blog_db::{
    MemoryStore, PgFollowRepository, PgGroupRepository, PgPool, PgPostRepository,
    PgUserRepository, PgVoteRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// `pool` is present only when the repositories are PostgreSQL-backed; the
/// readiness probe uses it to check the database.
#[derive(Clone)]
pub struct ServiceContext {
    pool: Option<PgPool>,

    user_repo: Arc<dyn UserRepository>,
    group_repo: Arc<dyn GroupRepository>,
    post_repo: Arc<dyn PostRepository>,
    vote_repo: Arc<dyn VoteRepository>,
    follow_repo: Arc<dyn FollowRepository>,

    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Wire every repository to PostgreSQL
    pub fn postgres(
        pool: PgPool,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            user_repo: Arc::new(PgUserRepository::new(pool.clone())),
            group_repo: Arc::new(PgGroupRepository::new(pool.clone())),
            post_repo: Arc::new(PgPostRepository::new(pool.clone())),
            vote_repo: Arc::new(PgVoteRepository::new(pool.clone())),
            follow_repo: Arc::new(PgFollowRepository::new(pool.clone())),
            pool: Some(pool),
            jwt_service,
            snowflake_generator,
        }
    }

    /// Wire every repository to one shared in-process store
    pub fn in_memory(
        store: MemoryStore,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            pool: None,
            user_repo: Arc::new(store.clone()),
            group_repo: Arc::new(store.clone()),
            post_repo: Arc::new(store.clone()),
            vote_repo: Arc::new(store.clone()),
            follow_repo: Arc::new(store),
            jwt_service,
            snowflake_generator,
        }
    }

    // === Database Pool ===

    /// PostgreSQL pool, if the context is database-backed
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn group_repo(&self) -> &dyn GroupRepository {
        self.group_repo.as_ref()
    }

    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    // === Services ===

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish()
    }
}

/// Builder for a context with individually chosen repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    group_repo: Option<Arc<dyn GroupRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    vote_repo: Option<Arc<dyn VoteRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn group_repo(mut self, repo: Arc<dyn GroupRepository>) -> Self {
        self.group_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository or service is
    /// missing. The pool is optional.
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: self.pool,
            user_repo: required(self.user_repo, "user_repo")?,
            group_repo: required(self.group_repo, "group_repo")?,
            post_repo: required(self.post_repo, "post_repo")?,
            vote_repo: required(self.vote_repo, "vote_repo")?,
            follow_repo: required(self.follow_repo, "follow_repo")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            snowflake_generator: required(self.snowflake_generator, "snowflake_generator")?,
        })
    }
}

fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_reports_missing_dependency() {
        let store = MemoryStore::new();
        let err = ServiceContextBuilder::new()
            .user_repo(Arc::new(store.clone()))
            .group_repo(Arc::new(store.clone()))
            .post_repo(Arc::new(store))
            .build()
            .unwrap_err();

        assert_eq!(err.to_string(), "Validation error: vote_repo is required");
    }

    #[test]
    fn test_builder_without_pool() {
        let store = MemoryStore::new();
        let ctx = ServiceContextBuilder::new()
            .user_repo(Arc::new(store.clone()))
            .group_repo(Arc::new(store.clone()))
            .post_repo(Arc::new(store.clone()))
            .vote_repo(Arc::new(store.clone()))
            .follow_repo(Arc::new(store))
            .jwt_service(Arc::new(JwtService::new("secret", 60)))
            .snowflake_generator(Arc::new(SnowflakeGenerator::new(7)))
            .build()
            .unwrap();

        assert!(ctx.pool().is_none());
        assert_eq!(ctx.generate_id().worker_id(), 7);
    }
}
