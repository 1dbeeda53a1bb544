//! # blog-api
//!
//! REST API server built with Axum: voting, follows, feeds and profiles
//! under `/api/v1`, plus liveness and readiness probes.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, create_app_with_config, create_memory_app_state, run};
pub use state::AppState;
