//! Vote entity - one like or dislike by one user on one post

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Direction of a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Like,
    Dislike,
}

impl VoteKind {
    /// Stored representation (`votes.kind`)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "like" => Some(Self::Like),
            "dislike" => Some(Self::Dislike),
            _ => None,
        }
    }

    /// Rating change when a vote of this kind is cast
    #[inline]
    pub fn delta(self) -> i64 {
        match self {
            Self::Like => 1,
            Self::Dislike => -1,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Like => Self::Dislike,
            Self::Dislike => Self::Like,
        }
    }
}

impl std::fmt::Display for VoteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ledger row. At most one exists per (post, voter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id: Snowflake,
    pub post_id: Snowflake,
    pub voter_id: Snowflake,
    pub kind: VoteKind,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    pub fn new(id: Snowflake, post_id: Snowflake, voter_id: Snowflake, kind: VoteKind) -> Self {
        Self {
            id,
            post_id,
            voter_id,
            kind,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_storage_names() {
        for kind in [VoteKind::Like, VoteKind::Dislike] {
            assert_eq!(VoteKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(VoteKind::parse("meh"), None);
    }

    #[test]
    fn test_opposite_kinds_cancel_out() {
        assert_eq!(VoteKind::Like.opposite(), VoteKind::Dislike);
        assert_eq!(VoteKind::Like.delta() + VoteKind::Dislike.delta(), 0);
    }
}
