//! Feed service - ordered, paginated post listings
//!
//! Every listing is a plain read of committed state. Pages are fetched with
//! one row of lookahead to report `has_more`.

use blog_core::{DomainError, Post, Snowflake};
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;
use crate::dto::{GroupPostsResponse, GroupResponse, PageRequest, PaginatedResponse, PostResponse};

pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Posts by authors `user_id` follows, newest first
    #[instrument(skip(self))]
    pub async fn personal_feed(
        &self,
        user_id: Snowflake,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<PostResponse>> {
        let posts = self
            .ctx
            .post_repo()
            .find_by_followed_authors(user_id, page.lookahead_query())
            .await?;
        Ok(to_page(posts, page))
    }

    /// All posts by rating, highest first
    #[instrument(skip(self))]
    pub async fn best_posts(&self, page: PageRequest) -> ServiceResult<PaginatedResponse<PostResponse>> {
        let posts = self.ctx.post_repo().find_best(page.lookahead_query()).await?;
        Ok(to_page(posts, page))
    }

    /// All posts, newest first
    #[instrument(skip(self))]
    pub async fn latest_posts(
        &self,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<PostResponse>> {
        let posts = self.ctx.post_repo().find_latest(page.lookahead_query()).await?;
        Ok(to_page(posts, page))
    }

    /// One group and its posts, newest first
    #[instrument(skip(self))]
    pub async fn group_posts(
        &self,
        slug: &str,
        page: PageRequest,
    ) -> ServiceResult<GroupPostsResponse> {
        let group = self
            .ctx
            .group_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::GroupNotFound(slug.to_string()))?;

        let posts = self
            .ctx
            .post_repo()
            .find_by_group(group.id, page.lookahead_query())
            .await?;

        Ok(GroupPostsResponse {
            group: GroupResponse::from(&group),
            posts: to_page(posts, page),
        })
    }
}

pub(crate) fn to_page(posts: Vec<Post>, page: PageRequest) -> PaginatedResponse<PostResponse> {
    PaginatedResponse::from_lookahead(posts, page).map(PostResponse::from)
}
