//! Group database model

use sqlx::FromRow;

/// Row of the `groups` table
#[derive(Debug, Clone, FromRow)]
pub struct GroupModel {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
}
