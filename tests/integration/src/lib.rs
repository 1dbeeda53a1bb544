//! Integration test utilities for the blog server
//!
//! Spawns the REST API in-process on top of the memory store and offers
//! request helpers plus typed response fixtures.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
