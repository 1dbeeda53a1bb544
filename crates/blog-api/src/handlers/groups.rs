//! Group handlers

use axum::{
    extract::{Path, State},
    Json,
};
use blog_service::{FeedService, GroupPostsResponse};

use crate::extractors::Pagination;
use crate::response::ApiResult;
use crate::state::AppState;

/// Posts of one group, newest first
///
/// GET /groups/{slug}/posts
pub async fn group_posts(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Pagination(page): Pagination,
) -> ApiResult<Json<GroupPostsResponse>> {
    let service = FeedService::new(state.service_context());
    Ok(Json(service.group_posts(&slug, page).await?))
}
