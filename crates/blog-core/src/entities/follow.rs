//! Follow entity - directed edge from a reader to an author

use chrono::{DateTime, Utc};

use crate::rules::FollowEdge;
use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    pub id: Snowflake,
    pub follower_id: Snowflake,
    pub followee_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    /// Build a follow from an already validated edge, so a self-follow
    /// can never be represented
    pub fn new(id: Snowflake, edge: FollowEdge) -> Self {
        Self {
            id,
            follower_id: edge.follower(),
            followee_id: edge.followee(),
            created_at: Utc::now(),
        }
    }
}
