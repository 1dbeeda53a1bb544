//! Pagination extractor
//!
//! Reads `page` (1-based) and `limit` from the query string. A missing
//! `limit` falls back to the configured feed page size.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Query},
    http::request::Parts,
};
use blog_service::PageRequest;
use serde::Deserialize;

use crate::response::ApiError;
use crate::state::AppState;

/// Raw pagination query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Validated page request
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageRequest);

impl Pagination {
    pub fn from_params(params: PaginationParams, default_limit: u32) -> Self {
        Self(PageRequest::new(
            params.page.unwrap_or(1),
            params.limit.unwrap_or(default_limit),
        ))
    }

    pub fn into_inner(self) -> PageRequest {
        self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        let default_limit = AppState::from_ref(state).default_page_size();
        Ok(Pagination::from_params(params, default_limit))
    }
}
