//! Profile handler

use axum::{
    extract::{Path, State},
    Json,
};
use blog_service::{ProfileResponse, ProfileService};

use crate::extractors::{OptionalAuthUser, Pagination};
use crate::response::ApiResult;
use crate::state::AppState;

/// An author's profile and posts
///
/// GET /profiles/{username}
pub async fn get_profile(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(username): Path<String>,
    Pagination(page): Pagination,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let profile = service.profile(&username, viewer.identity(), page).await?;
    Ok(Json(profile))
}
