//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;

use blog_core::entities::Post;
use blog_core::error::DomainError;
use blog_core::traits::{PostQuery, PostRepository, RepoResult};
use blog_core::value_objects::Snowflake;

use crate::models::PostModel;

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `UPDATE ... RETURNING rating` on the given connection, so the vote
/// ledger can run it inside its own transaction
pub(crate) async fn add_to_rating(
    conn: &mut PgConnection,
    post_id: Snowflake,
    delta: i64,
) -> RepoResult<i64> {
    sqlx::query_scalar::<_, i64>(
        r#"
        UPDATE posts SET rating = rating + $2 WHERE id = $1 RETURNING rating
        "#,
    )
    .bind(post_id.into_inner())
    .bind(delta)
    .fetch_optional(conn)
    .await
    .map_err(map_db_error)?
    .ok_or(DomainError::PostNotFound(post_id))
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, author_id, text, group_id, image, rating, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self, post), fields(post_id = %post.id, author_id = %post.author_id))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, author_id, text, group_id, image, rating, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(post.id.into_inner())
        .bind(post.author_id.into_inner())
        .bind(&post.text)
        .bind(post.group_id.map(Snowflake::into_inner))
        .bind(post.image.as_deref())
        .bind(post.rating)
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn apply_rating_delta(&self, post_id: Snowflake, delta: i64) -> RepoResult<i64> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;
        add_to_rating(&mut conn, post_id, delta).await
    }

    #[instrument(skip(self))]
    async fn find_latest(&self, query: PostQuery) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, author_id, text, group_id, image, rating, created_at
            FROM posts
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_best(&self, query: PostQuery) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, author_id, text, group_id, image, rating, created_at
            FROM posts
            ORDER BY rating DESC, created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_author(
        &self,
        author_id: Snowflake,
        query: PostQuery,
    ) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, author_id, text, group_id, image, rating, created_at
            FROM posts
            WHERE author_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(author_id.into_inner())
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_author(&self, author_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM posts WHERE author_id = $1
            "#,
        )
        .bind(author_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_by_group(&self, group_id: Snowflake, query: PostQuery) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, author_id, text, group_id, image, rating, created_at
            FROM posts
            WHERE group_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(group_id.into_inner())
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_followed_authors(
        &self,
        follower_id: Snowflake,
        query: PostQuery,
    ) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT p.id, p.author_id, p.text, p.group_id, p.image, p.rating, p.created_at
            FROM posts p
            JOIN follows f ON f.followee_id = p.author_id
            WHERE f.follower_id = $1
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(follower_id.into_inner())
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }
}
