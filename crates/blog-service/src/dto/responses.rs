//! Response DTOs for API endpoints
//!
//! Ids are rendered as strings so JavaScript clients keep full precision.

use blog_core::VoteStatus;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::requests::PageRequest;

// ============================================================================
// Common Responses
// ============================================================================

/// Page of results with page-number pagination
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: u32, limit: u32, has_more: bool) -> Self {
        Self {
            data,
            pagination: PaginationMeta {
                page,
                limit,
                has_more,
            },
        }
    }

    /// Build from rows fetched with [`PageRequest::lookahead_query`]; the
    /// extra row, if present, only signals that another page exists
    pub fn from_lookahead(mut data: Vec<T>, page: PageRequest) -> Self {
        let limit = page.limit as usize;
        let has_more = data.len() > limit;
        data.truncate(limit);
        Self::new(data, page.page, page.limit, has_more)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResponse<U> {
        PaginatedResponse {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PaginationMeta {
    /// 1-based page number
    pub page: u32,
    /// Page size used
    pub limit: u32,
    /// Whether a next page exists
    pub has_more: bool,
}

// ============================================================================
// Vote Responses
// ============================================================================

/// Result of a like/dislike request
#[derive(Debug, Clone, Serialize)]
pub struct VoteResponse {
    pub post_id: String,
    pub new_rating: i64,
    pub status: VoteStatus,
}

// ============================================================================
// Post Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub author_id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub rating: i64,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// User / Group Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
}

/// An author's page: who they are, their posts, and whether the viewer
/// follows them
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub post_count: i64,
    pub following: bool,
    pub posts: PaginatedResponse<PostResponse>,
}

/// A group and one page of its posts
#[derive(Debug, Serialize)]
pub struct GroupPostsResponse {
    pub group: GroupResponse,
    #[serde(flatten)]
    pub posts: PaginatedResponse<PostResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Per-dependency check result
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    /// `healthy`, `unhealthy`, or `in_memory` when no database is configured
    pub database: String,
}

impl ReadinessResponse {
    /// `database_healthy` is `None` when the store is in-process
    pub fn ready(database_healthy: Option<bool>) -> Self {
        let (ready, database) = match database_healthy {
            Some(true) => (true, "healthy"),
            Some(false) => (false, "unhealthy"),
            None => (true, "in_memory"),
        };
        Self {
            status: if ready { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: database.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lookahead_detects_next_page() {
        let page = PageRequest::new(2, 3);

        let full = PaginatedResponse::from_lookahead(vec![1, 2, 3, 4], page);
        assert_eq!(full.data, vec![1, 2, 3]);
        assert!(full.pagination.has_more);
        assert_eq!(full.pagination.page, 2);

        let last = PaginatedResponse::from_lookahead(vec![1, 2], page);
        assert_eq!(last.data.len(), 2);
        assert!(!last.pagination.has_more);
    }

    #[test]
    fn test_vote_response_json() {
        let response = VoteResponse {
            post_id: "42".to_string(),
            new_rating: -1,
            status: VoteStatus::NotAuthorized,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "post_id": "42", "new_rating": -1, "status": "NOT_AUTHORIZED" })
        );
    }

    #[test]
    fn test_group_posts_flattens_pagination() {
        let response = GroupPostsResponse {
            group: GroupResponse {
                id: "1".to_string(),
                title: "Rust".to_string(),
                slug: "rust".to_string(),
                description: String::new(),
            },
            posts: PaginatedResponse::new(Vec::new(), 1, 10, false),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["group"]["slug"], "rust");
        assert_eq!(json["pagination"]["limit"], 10);
        assert!(json["data"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(Some(true));
        assert!(ready.is_ready());
        assert_eq!(ready.checks.database, "healthy");

        let not_ready = ReadinessResponse::ready(Some(false));
        assert!(!not_ready.is_ready());
        assert_eq!(not_ready.checks.database, "unhealthy");

        let memory = ReadinessResponse::ready(None);
        assert!(memory.is_ready());
        assert_eq!(memory.checks.database, "in_memory");
    }
}
