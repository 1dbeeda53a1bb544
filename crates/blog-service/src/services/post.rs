//! Post service - publishing and single-post reads

use blog_core::{DomainError, Identity, Post, Snowflake};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use crate::dto::requests::MAX_POST_LENGTH;
use crate::dto::{CreatePostRequest, PostResponse};

pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Publish a post as `identity`. New posts start with a rating of 0.
    #[instrument(skip(self, request), fields(text_len = request.text.len()))]
    pub async fn create(
        &self,
        identity: Identity,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let author_id = identity.user_id().ok_or_else(ServiceError::unauthenticated)?;

        let text = request.text.trim();
        if text.is_empty() {
            return Err(DomainError::EmptyContent.into());
        }
        if text.chars().count() > MAX_POST_LENGTH {
            return Err(DomainError::ContentTooLong {
                max: MAX_POST_LENGTH,
            }
            .into());
        }

        let mut post = Post::new(self.ctx.generate_id(), author_id, text);

        if let Some(slug) = request.group.as_deref() {
            let group = self
                .ctx
                .group_repo()
                .find_by_slug(slug)
                .await?
                .ok_or_else(|| DomainError::GroupNotFound(slug.to_string()))?;
            post = post.with_group(group.id);
        }
        if let Some(image) = request.image.filter(|image| !image.is_empty()) {
            post = post.with_image(image);
        }

        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, author_id = %author_id, "Post created");

        Ok(PostResponse::from(post))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, post_id: Snowflake) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        Ok(PostResponse::from(post))
    }
}
