//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{feed, follows, groups, health, posts, profiles, votes};
use crate::state::AppState;

/// API router (health routes are separate so they bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Liveness and readiness probes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(post_routes())
        .merge(profile_routes())
        .route("/feed", get(feed::get_feed))
        .route("/groups/:slug/posts", get(groups::group_posts))
}

fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route("/posts/best", get(posts::best_posts))
        .route("/posts/:post_id", get(posts::get_post))
        .route("/posts/:post_id/like", post(votes::like_post))
        .route("/posts/:post_id/dislike", post(votes::dislike_post))
}

fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profiles/:username", get(profiles::get_profile))
        .route("/profiles/:username/follow", post(follows::follow_author))
        .route("/profiles/:username/unfollow", post(follows::unfollow_author))
}
