//! Vote handlers
//!
//! Anonymous callers are accepted and answered with `NOT_AUTHORIZED`.

use axum::{
    extract::{Path, State},
    Json,
};
use blog_service::{VoteResponse, VoteService};

use crate::extractors::{OptionalAuthUser, PostIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Like a post
///
/// POST /posts/{post_id}/like
pub async fn like_post(
    State(state): State<AppState>,
    caller: OptionalAuthUser,
    Path(path): Path<PostIdPath>,
) -> ApiResult<Json<VoteResponse>> {
    let post_id = path.post_id()?;

    let service = VoteService::new(state.service_context());
    let response = service.like(caller.identity(), post_id).await?;
    Ok(Json(response))
}

/// Dislike a post
///
/// POST /posts/{post_id}/dislike
pub async fn dislike_post(
    State(state): State<AppState>,
    caller: OptionalAuthUser,
    Path(path): Path<PostIdPath>,
) -> ApiResult<Json<VoteResponse>> {
    let post_id = path.post_id()?;

    let service = VoteService::new(state.service_context());
    let response = service.dislike(caller.identity(), post_id).await?;
    Ok(Json(response))
}
