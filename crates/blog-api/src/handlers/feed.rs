//! Personal feed handler

use axum::{extract::State, Json};
use blog_service::{FeedService, PaginatedResponse, PostResponse};

use crate::extractors::{AuthUser, Pagination};
use crate::response::ApiResult;
use crate::state::AppState;

/// Posts by followed authors, newest first
///
/// GET /feed
pub async fn get_feed(
    State(state): State<AppState>,
    auth: AuthUser,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<PostResponse>>> {
    let service = FeedService::new(state.service_context());
    let feed = service.personal_feed(auth.user_id, page).await?;
    Ok(Json(feed))
}
