//! Vote service - likes and dislikes on posts
//!
//! The repository runs the ledger state machine and the rating update as
//! one atomic step; this service decides who may vote and shapes the result.

use blog_core::{DomainError, Identity, Snowflake, VoteKind, VoteOutcome};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;
use crate::dto::VoteResponse;

pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn like(&self, identity: Identity, post_id: Snowflake) -> ServiceResult<VoteResponse> {
        self.vote(identity, post_id, VoteKind::Like).await
    }

    pub async fn dislike(
        &self,
        identity: Identity,
        post_id: Snowflake,
    ) -> ServiceResult<VoteResponse> {
        self.vote(identity, post_id, VoteKind::Dislike).await
    }

    /// Record a vote by `identity` on `post_id`.
    ///
    /// Anonymous callers get `NOT_AUTHORIZED` with the current rating and
    /// nothing is written. An unknown post is an error for every caller.
    #[instrument(skip(self))]
    pub async fn vote(
        &self,
        identity: Identity,
        post_id: Snowflake,
        kind: VoteKind,
    ) -> ServiceResult<VoteResponse> {
        let Some(voter_id) = identity.user_id() else {
            let post = self
                .ctx
                .post_repo()
                .find_by_id(post_id)
                .await?
                .ok_or(DomainError::PostNotFound(post_id))?;

            info!(post_id = %post_id, kind = %kind, "Anonymous vote ignored");
            return Ok(Self::response(post_id, VoteOutcome::NotAuthorized, post.rating));
        };

        let record = self
            .ctx
            .vote_repo()
            .record(self.ctx.generate_id(), post_id, voter_id, kind)
            .await?;

        info!(
            post_id = %post_id,
            voter_id = %voter_id,
            kind = %kind,
            outcome = record.outcome.as_str(),
            delta = record.outcome.delta(),
            rating = record.rating,
            "Vote recorded"
        );

        Ok(Self::response(post_id, record.outcome, record.rating))
    }

    fn response(post_id: Snowflake, outcome: VoteOutcome, rating: i64) -> VoteResponse {
        VoteResponse {
            post_id: post_id.to_string(),
            new_rating: rating,
            status: outcome.status(),
        }
    }
}
