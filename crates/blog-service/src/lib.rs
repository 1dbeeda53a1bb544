//! # blog-service
//!
//! Application layer: the voting, follow, feed and profile use cases, the
//! DTOs they return, and the [`ServiceContext`] that wires repositories in.

pub mod dto;
pub mod services;

pub use dto::{
    CreatePostRequest, GroupPostsResponse, GroupResponse, HealthResponse, PageRequest,
    PaginatedResponse, PaginationMeta, PostResponse, ProfileResponse, ReadinessResponse,
    UserResponse, VoteResponse,
};
pub use services::{
    FeedService, FollowService, PostService, ProfileService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, VoteService,
};
