//! Vote database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of the `votes` table. `kind` is `'like'` or `'dislike'`.
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub id: i64,
    pub post_id: i64,
    pub voter_id: i64,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}
