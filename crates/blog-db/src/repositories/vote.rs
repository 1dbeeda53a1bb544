//! PostgreSQL implementation of VoteRepository
//!
//! A vote runs in one transaction that first locks the post row. Every vote
//! on the same post queues behind that lock, so the read of the voter's
//! current vote, the ledger write and the rating update cannot interleave
//! with another vote on the post.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use blog_core::entities::{Vote, VoteKind};
use blog_core::error::DomainError;
use blog_core::rules::{LedgerChange, VoteState};
use blog_core::traits::{RepoResult, VoteRecord, VoteRepository};
use blog_core::value_objects::Snowflake;

use crate::mappers::parse_vote_kind;
use crate::models::VoteModel;

use super::error::{map_db_error, map_unique_violation};
use super::post::add_to_rating;

#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn find(&self, post_id: Snowflake, voter_id: Snowflake) -> RepoResult<Option<Vote>> {
        let result = sqlx::query_as::<_, VoteModel>(
            r#"
            SELECT id, post_id, voter_id, kind, created_at
            FROM votes
            WHERE post_id = $1 AND voter_id = $2
            "#,
        )
        .bind(post_id.into_inner())
        .bind(voter_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Vote::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn record(
        &self,
        vote_id: Snowflake,
        post_id: Snowflake,
        voter_id: Snowflake,
        kind: VoteKind,
    ) -> RepoResult<VoteRecord> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let rating = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT rating FROM posts WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(post_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::PostNotFound(post_id))?;

        let existing = sqlx::query_scalar::<_, String>(
            r#"
            SELECT kind FROM votes WHERE post_id = $1 AND voter_id = $2
            "#,
        )
        .bind(post_id.into_inner())
        .bind(voter_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .map(|raw| parse_vote_kind(&raw))
        .transpose()?;

        let transition = VoteState::from_kind(existing).transition(kind);

        match transition.change {
            LedgerChange::Insert(kind) => {
                sqlx::query(
                    r#"
                    INSERT INTO votes (id, post_id, voter_id, kind, created_at)
                    VALUES ($1, $2, $3, $4, NOW())
                    "#,
                )
                .bind(vote_id.into_inner())
                .bind(post_id.into_inner())
                .bind(voter_id.into_inner())
                .bind(kind.as_str())
                .execute(&mut *tx)
                .await
                .map_err(|e| map_unique_violation(e, || DomainError::VoteConflict(post_id)))?;
            }
            LedgerChange::Delete => {
                sqlx::query(
                    r#"
                    DELETE FROM votes WHERE post_id = $1 AND voter_id = $2
                    "#,
                )
                .bind(post_id.into_inner())
                .bind(voter_id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
            LedgerChange::None => {}
        }

        let delta = transition.outcome.delta();
        let rating = if delta == 0 {
            rating
        } else {
            add_to_rating(&mut tx, post_id, delta).await?
        };

        tx.commit().await.map_err(map_db_error)?;

        debug!(outcome = transition.outcome.as_str(), rating, "Vote committed");

        Ok(VoteRecord {
            outcome: transition.outcome,
            state: transition.next,
            rating,
        })
    }
}
