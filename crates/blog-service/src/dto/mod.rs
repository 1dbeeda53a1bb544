//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreatePostRequest, PageRequest};
pub use responses::{
    GroupPostsResponse, GroupResponse, HealthChecks, HealthResponse, PaginatedResponse,
    PaginationMeta, PostResponse, ProfileResponse, ReadinessResponse, UserResponse, VoteResponse,
};
