//! Test fixtures: request bodies and typed views of API responses

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique suffix for usernames and slugs
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create post request
#[derive(Debug, Serialize)]
pub struct NewPost {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl NewPost {
    pub fn text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            group: None,
        }
    }

    pub fn in_group(text: &str, slug: &str) -> Self {
        Self {
            text: text.to_string(),
            group: Some(slug.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VoteResult {
    pub post_id: String,
    pub new_rating: i64,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostView {
    pub id: String,
    pub author_id: String,
    pub text: String,
    pub group_id: Option<String>,
    pub rating: i64,
}

#[derive(Debug, Deserialize)]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub has_more: bool,
}

#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

impl Page<PostView> {
    pub fn ids(&self) -> Vec<&str> {
        self.data.iter().map(|p| p.id.as_str()).collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct UserView {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileView {
    pub user: UserView,
    pub post_count: i64,
    pub following: bool,
    pub posts: Page<PostView>,
}

#[derive(Debug, Deserialize)]
pub struct GroupView {
    pub slug: String,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct GroupPostsView {
    pub group: GroupView,
    pub data: Vec<PostView>,
    pub pagination: PageMeta,
}

#[derive(Debug, Deserialize)]
pub struct ErrorView {
    pub error: ErrorDetailView,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetailView {
    pub code: String,
    pub message: String,
}
