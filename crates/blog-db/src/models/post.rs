//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of the `posts` table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub author_id: i64,
    pub text: String,
    pub group_id: Option<i64>,
    pub image: Option<String>,
    pub rating: i64,
    pub created_at: DateTime<Utc>,
}
