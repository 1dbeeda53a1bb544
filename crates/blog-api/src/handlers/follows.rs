//! Follow handlers
//!
//! Self-follow, repeated follow and unfollow of a non-followed author all
//! answer 204 like a successful change.

use axum::extract::{Path, State};
use blog_core::{FollowOutcome, UnfollowOutcome};
use blog_service::FollowService;

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// Follow an author
///
/// POST /profiles/{username}/follow
pub async fn follow_author(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<NoContent> {
    let service = FollowService::new(state.service_context());
    match service.follow(auth.identity(), &username).await? {
        FollowOutcome::NotAuthorized => Err(ApiError::MissingAuth),
        FollowOutcome::Followed | FollowOutcome::AlreadyFollowing | FollowOutcome::SelfFollow => {
            Ok(NoContent)
        }
    }
}

/// Unfollow an author
///
/// POST /profiles/{username}/unfollow
pub async fn unfollow_author(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<NoContent> {
    let service = FollowService::new(state.service_context());
    match service.unfollow(auth.identity(), &username).await? {
        UnfollowOutcome::NotAuthorized => Err(ApiError::MissingAuth),
        UnfollowOutcome::Unfollowed | UnfollowOutcome::NotFollowing => Ok(NoContent),
    }
}
