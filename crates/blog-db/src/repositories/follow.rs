//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Follow;
use blog_core::traits::{FollowRepository, RepoResult};
use blog_core::value_objects::Snowflake;

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self, follow), fields(follower_id = %follow.follower_id, followee_id = %follow.followee_id))]
    async fn create(&self, follow: &Follow) -> RepoResult<bool> {
        // No row back means the pair already existed
        let inserted = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO follows (id, follower_id, followee_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (follower_id, followee_id) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(follow.id.into_inner())
        .bind(follow.follower_id.into_inner())
        .bind(follow.followee_id.into_inner())
        .bind(follow.created_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(inserted.is_some())
    }

    #[instrument(skip(self))]
    async fn delete(&self, follower_id: Snowflake, followee_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM follows WHERE follower_id = $1 AND followee_id = $2
            "#,
        )
        .bind(follower_id.into_inner())
        .bind(followee_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn exists(&self, follower_id: Snowflake, followee_id: Snowflake) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM follows WHERE follower_id = $1 AND followee_id = $2)
            "#,
        )
        .bind(follower_id.into_inner())
        .bind(followee_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
