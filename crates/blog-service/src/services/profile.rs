//! Profile service - an author's page as seen by a viewer

use blog_core::{DomainError, Identity};
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::feed::to_page;
use crate::dto::{PageRequest, ProfileResponse, UserResponse};

pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Profile of `username` with their posts newest first.
    ///
    /// `following` is true only for an authenticated viewer other than the
    /// author who follows them.
    #[instrument(skip(self))]
    pub async fn profile(
        &self,
        username: &str,
        viewer: Identity,
        page: PageRequest,
    ) -> ServiceResult<ProfileResponse> {
        let author = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UnknownUsername(username.to_string()))?;

        let posts_repo = self.ctx.post_repo();
        let posts = posts_repo
            .find_by_author(author.id, page.lookahead_query())
            .await?;
        let post_count = posts_repo.count_by_author(author.id).await?;

        let following = match viewer.user_id() {
            Some(viewer_id) if viewer_id != author.id => {
                self.ctx.follow_repo().exists(viewer_id, author.id).await?
            }
            _ => false,
        };

        Ok(ProfileResponse {
            user: UserResponse::from(&author),
            post_count,
            following,
            posts: to_page(posts, page),
        })
    }
}
