//! Request DTOs for API endpoints

use blog_core::PostQuery;
use serde::Deserialize;
use validator::Validate;

/// Maximum post body length in characters
pub const MAX_POST_LENGTH: usize = 10_000;

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 10000, message = "Text must be 1-10000 characters"))]
    pub text: String,

    /// Slug of the group to publish into
    #[validate(length(min = 1, max = 64, message = "Group slug must be 1-64 characters"))]
    pub group: Option<String>,

    /// Opaque image reference
    #[validate(length(max = 512, message = "Image reference must be at most 512 characters"))]
    pub image: Option<String>,
}

// ============================================================================
// Pagination
// ============================================================================

/// A 1-based page over an ordered post sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: u32 = 10;
    pub const MAX_LIMIT: u32 = 100;

    /// Page numbers below 1 become 1; `limit` is clamped to `1..=MAX_LIMIT`
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, Self::MAX_LIMIT),
        }
    }

    /// Window covering this page plus one extra row, so `has_more` is known
    /// without a separate count query
    pub fn lookahead_query(&self) -> PostQuery {
        let window = PostQuery::page(self.page, self.limit);
        PostQuery::new(window.offset, window.limit + 1)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_LIMIT)
    }
}
