//! Post handlers
//!
//! Listings, single-post reads and publishing.

use axum::{
    extract::{Path, State},
    Json,
};
use blog_service::{
    CreatePostRequest, FeedService, PaginatedResponse, PostResponse, PostService,
};

use crate::extractors::{AuthUser, Pagination, PostIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Latest posts
///
/// GET /posts
pub async fn list_posts(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<PostResponse>>> {
    let service = FeedService::new(state.service_context());
    Ok(Json(service.latest_posts(page).await?))
}

/// Posts ranked by rating
///
/// GET /posts/best
pub async fn best_posts(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<PostResponse>>> {
    let service = FeedService::new(state.service_context());
    Ok(Json(service.best_posts(page).await?))
}

/// Get a single post
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(path): Path<PostIdPath>,
) -> ApiResult<Json<PostResponse>> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    Ok(Json(service.get(post_id).await?))
}

/// Publish a post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service.create(auth.identity(), request).await?;
    Ok(Created(post))
}
