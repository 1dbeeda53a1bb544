//! API Integration Tests
//!
//! Each test starts its own in-process server on the memory store, so no
//! external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer, TestUser};
use reqwest::StatusCode;

async fn publish(server: &TestServer, author: &TestUser, post: &NewPost) -> PostView {
    let response = server.post_auth("/api/v1/posts", &author.token, post).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn vote(server: &TestServer, user: &TestUser, post_id: &str, kind: &str) -> VoteResult {
    let path = format!("/api/v1/posts/{post_id}/{kind}");
    let response = server.post_empty_auth(&path, &user.token).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn follow(server: &TestServer, user: &TestUser, username: &str) {
    let path = format!("/api/v1/profiles/{username}/follow");
    let response = server.post_empty_auth(&path, &user.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready_in_memory() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], "in_memory");
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_vote_sequence_adjusts_rating() {
    let server = TestServer::start().await.unwrap();
    let author = server.create_user("author").await.unwrap();
    let a = server.create_user("a").await.unwrap();
    let b = server.create_user("b").await.unwrap();
    let post = publish(&server, &author, &NewPost::text("rate me")).await;
    assert_eq!(post.rating, 0);

    let r = vote(&server, &a, &post.id, "like").await;
    assert_eq!((r.new_rating, r.status.as_str()), (1, "OK"));
    assert_eq!(r.post_id, post.id);

    let r = vote(&server, &a, &post.id, "dislike").await;
    assert_eq!((r.new_rating, r.status.as_str()), (0, "OK"));

    let r = vote(&server, &b, &post.id, "dislike").await;
    assert_eq!((r.new_rating, r.status.as_str()), (-1, "OK"));

    let response = server.get(&format!("/api/v1/posts/{}", post.id)).await.unwrap();
    let stored: PostView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stored.rating, -1);
}

#[tokio::test]
async fn test_repeated_vote_is_reported_and_ignored() {
    let server = TestServer::start().await.unwrap();
    let author = server.create_user("author").await.unwrap();
    let voter = server.create_user("voter").await.unwrap();
    let post = publish(&server, &author, &NewPost::text("again")).await;

    vote(&server, &voter, &post.id, "like").await;
    let r = vote(&server, &voter, &post.id, "like").await;

    assert_eq!(r.status, "REPEATED");
    assert_eq!(r.new_rating, 1);
}

#[tokio::test]
async fn test_anonymous_vote_is_not_authorized() {
    let server = TestServer::start().await.unwrap();
    let author = server.create_user("author").await.unwrap();
    let fan = server.create_user("fan").await.unwrap();
    let post = publish(&server, &author, &NewPost::text("hello")).await;
    vote(&server, &fan, &post.id, "like").await;

    let response = server
        .post_empty(&format!("/api/v1/posts/{}/dislike", post.id))
        .await
        .unwrap();
    let r: VoteResult = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(r.status, "NOT_AUTHORIZED");
    assert_eq!(r.new_rating, 1);
}

#[tokio::test]
async fn test_vote_with_bad_token_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let author = server.create_user("author").await.unwrap();
    let post = publish(&server, &author, &NewPost::text("hello")).await;

    let response = server
        .post_empty_auth(&format!("/api/v1/posts/{}/like", post.id), "not-a-jwt")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_vote_on_unknown_post() {
    let server = TestServer::start().await.unwrap();
    let voter = server.create_user("voter").await.unwrap();

    let response = server
        .post_empty_auth("/api/v1/posts/12345/like", &voter.token)
        .await
        .unwrap();
    let err: ErrorView = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_POST");

    let response = server
        .post_empty_auth("/api/v1/posts/abc/like", &voter.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Follow Tests
// ============================================================================

#[tokio::test]
async fn test_follow_twice_leaves_one_edge() {
    let server = TestServer::start().await.unwrap();
    let a = server.create_user("a").await.unwrap();
    let b = server.create_user("b").await.unwrap();

    follow(&server, &a, &b.username).await;
    follow(&server, &a, &b.username).await;

    assert_eq!(server.store().follow_count(a.id), 1);
}

#[tokio::test]
async fn test_self_follow_answers_like_success() {
    let server = TestServer::start().await.unwrap();
    let a = server.create_user("a").await.unwrap();

    follow(&server, &a, &a.username).await;

    assert_eq!(server.store().follow_count(a.id), 0);
}

#[tokio::test]
async fn test_follow_requires_authentication() {
    let server = TestServer::start().await.unwrap();
    let b = server.create_user("b").await.unwrap();

    let response = server
        .post_empty(&format!("/api/v1/profiles/{}/follow", b.username))
        .await
        .unwrap();
    let err: ErrorView = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(err.error.code, "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_follow_unknown_author() {
    let server = TestServer::start().await.unwrap();
    let a = server.create_user("a").await.unwrap();

    let response = server
        .post_empty_auth("/api/v1/profiles/nobody-here/follow", &a.token)
        .await
        .unwrap();
    let err: ErrorView = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_USER");
}

#[tokio::test]
async fn test_unfollow() {
    let server = TestServer::start().await.unwrap();
    let a = server.create_user("a").await.unwrap();
    let b = server.create_user("b").await.unwrap();
    let path = format!("/api/v1/profiles/{}/unfollow", b.username);

    let response = server.post_empty_auth(&path, &a.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    follow(&server, &a, &b.username).await;
    let response = server.post_empty_auth(&path, &a.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    assert_eq!(server.store().follow_count(a.id), 0);
}

// ============================================================================
// Feed Tests
// ============================================================================

#[tokio::test]
async fn test_feed_shows_followed_authors_only() {
    let server = TestServer::start().await.unwrap();
    let a = server.create_user("a").await.unwrap();
    let b = server.create_user("b").await.unwrap();
    let c = server.create_user("c").await.unwrap();

    follow(&server, &a, &b.username).await;
    let post = publish(&server, &b, &NewPost::text("for my followers")).await;

    let response = server.get_auth("/api/v1/feed", &a.token).await.unwrap();
    let feed: Page<PostView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.ids(), vec![post.id.as_str()]);

    let response = server.get_auth("/api/v1/feed", &c.token).await.unwrap();
    let feed: Page<PostView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.data.is_empty());
}

#[tokio::test]
async fn test_feed_requires_authentication() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/feed").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_latest_posts_pagination() {
    let server = TestServer::start().await.unwrap();
    let author = server.create_user("author").await.unwrap();
    let mut ids = Vec::new();
    for i in 0..3 {
        ids.push(publish(&server, &author, &NewPost::text(&format!("post {i}"))).await.id);
    }

    let response = server.get("/api/v1/posts?page=1&limit=2").await.unwrap();
    let first: Page<PostView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.ids(), vec![ids[2].as_str(), ids[1].as_str()]);
    assert_eq!(first.pagination.page, 1);
    assert_eq!(first.pagination.limit, 2);
    assert!(first.pagination.has_more);

    let response = server.get("/api/v1/posts?page=2&limit=2").await.unwrap();
    let second: Page<PostView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(second.ids(), vec![ids[0].as_str()]);
    assert!(!second.pagination.has_more);

    let response = server.get("/api/v1/posts?page=-1").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_best_posts_ranking() {
    let server = TestServer::start().await.unwrap();
    let author = server.create_user("author").await.unwrap();
    let u1 = server.create_user("u").await.unwrap();
    let u2 = server.create_user("u").await.unwrap();

    let meh = publish(&server, &author, &NewPost::text("meh")).await;
    let good = publish(&server, &author, &NewPost::text("good")).await;
    let bad = publish(&server, &author, &NewPost::text("bad")).await;
    let newest = publish(&server, &author, &NewPost::text("newest")).await;

    vote(&server, &u1, &good.id, "like").await;
    vote(&server, &u2, &good.id, "like").await;
    vote(&server, &u1, &bad.id, "dislike").await;

    let response = server.get("/api/v1/posts/best").await.unwrap();
    let best: Page<PostView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        best.ids(),
        vec![
            good.id.as_str(),
            newest.id.as_str(),
            meh.id.as_str(),
            bad.id.as_str()
        ]
    );
    assert_eq!(best.data[0].rating, 2);
}

// ============================================================================
// Post / Group / Profile Tests
// ============================================================================

#[tokio::test]
async fn test_create_post_validation() {
    let server = TestServer::start().await.unwrap();
    let author = server.create_user("author").await.unwrap();

    let response = server
        .post_auth("/api/v1/posts", &author.token, &NewPost::text(""))
        .await
        .unwrap();
    let err: ErrorView = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "VALIDATION_ERROR");

    let response = server
        .post_auth("/api/v1/posts", &author.token, &NewPost::text("   "))
        .await
        .unwrap();
    let err: ErrorView = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "EMPTY_CONTENT");

    let response = server.post_empty("/api/v1/posts").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_group_posts() {
    let server = TestServer::start().await.unwrap();
    let author = server.create_user("author").await.unwrap();
    let slug = format!("rust{}", unique_suffix());
    server.create_group(&slug).await.unwrap();

    let inside = publish(&server, &author, &NewPost::in_group("in group", &slug)).await;
    publish(&server, &author, &NewPost::text("outside")).await;

    let response = server.get(&format!("/api/v1/groups/{slug}/posts")).await.unwrap();
    let view: GroupPostsView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(view.group.slug, slug);
    assert_eq!(view.group.title, slug.to_uppercase());
    assert_eq!(view.data.len(), 1);
    assert_eq!(view.data[0].id, inside.id);
    assert_eq!(view.data[0].group_id, inside.group_id);
    assert!(!view.pagination.has_more);

    let response = server.get("/api/v1/groups/missing/posts").await.unwrap();
    let err: ErrorView = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_GROUP");
}

#[tokio::test]
async fn test_profile_following_flag() {
    let server = TestServer::start().await.unwrap();
    let author = server.create_user("author").await.unwrap();
    let fan = server.create_user("fan").await.unwrap();
    publish(&server, &author, &NewPost::text("first")).await;
    follow(&server, &fan, &author.username).await;

    let path = format!("/api/v1/profiles/{}", author.username);

    let response = server.get_auth(&path, &fan.token).await.unwrap();
    let profile: ProfileView = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(profile.following);
    assert_eq!(profile.user.username, author.username);
    assert_eq!(profile.user.id, author.id.to_string());
    assert_eq!(profile.post_count, 1);
    assert_eq!(profile.posts.data.len(), 1);

    let response = server.get_auth(&path, &author.token).await.unwrap();
    let profile: ProfileView = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!profile.following);

    let response = server.get(&path).await.unwrap();
    let profile: ProfileView = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!profile.following);
}
