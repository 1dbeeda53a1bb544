//! Follow service - subscribe to and unsubscribe from authors

use blog_core::{
    DomainError, Follow, FollowEdge, FollowOutcome, Identity, Snowflake, UnfollowOutcome, User,
};
use tracing::{debug, info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Follow the author named `username`.
    ///
    /// Following yourself or someone already followed writes nothing.
    #[instrument(skip(self))]
    pub async fn follow(&self, identity: Identity, username: &str) -> ServiceResult<FollowOutcome> {
        let Some(follower_id) = identity.user_id() else {
            return Ok(FollowOutcome::NotAuthorized);
        };
        let author = self.find_author(username).await?;

        let Ok(edge) = FollowEdge::new(follower_id, author.id) else {
            debug!(user_id = %follower_id, "Self-follow ignored");
            return Ok(FollowOutcome::SelfFollow);
        };

        let follow = Follow::new(self.ctx.generate_id(), edge);
        let outcome = FollowOutcome::from_inserted(self.ctx.follow_repo().create(&follow).await?);

        info!(
            follower_id = %follower_id,
            followee_id = %author.id,
            outcome = outcome.as_str(),
            "Follow processed"
        );

        Ok(outcome)
    }

    /// Stop following the author named `username`; a no-op if not following
    #[instrument(skip(self))]
    pub async fn unfollow(
        &self,
        identity: Identity,
        username: &str,
    ) -> ServiceResult<UnfollowOutcome> {
        let Some(follower_id) = identity.user_id() else {
            return Ok(UnfollowOutcome::NotAuthorized);
        };
        let author = self.find_author(username).await?;

        let deleted = self.ctx.follow_repo().delete(follower_id, author.id).await?;
        let outcome = UnfollowOutcome::from_deleted(deleted);

        info!(
            follower_id = %follower_id,
            followee_id = %author.id,
            outcome = outcome.as_str(),
            "Unfollow processed"
        );

        Ok(outcome)
    }

    pub async fn is_following(
        &self,
        follower_id: Snowflake,
        followee_id: Snowflake,
    ) -> ServiceResult<bool> {
        Ok(self.ctx.follow_repo().exists(follower_id, followee_id).await?)
    }

    async fn find_author(&self, username: &str) -> ServiceResult<User> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UnknownUsername(username.to_string()))?)
    }
}
