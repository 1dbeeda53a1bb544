//! Vote model -> entity

use blog_core::entities::{Vote, VoteKind};
use blog_core::error::DomainError;
use blog_core::value_objects::Snowflake;

use crate::models::VoteModel;

/// Parse `votes.kind`. The column has a CHECK constraint, so a failure
/// here means the schema and the code disagree.
pub fn parse_vote_kind(raw: &str) -> Result<VoteKind, DomainError> {
    VoteKind::parse(raw)
        .ok_or_else(|| DomainError::DatabaseError(format!("unknown vote kind: {raw}")))
}

impl TryFrom<VoteModel> for Vote {
    type Error = DomainError;

    fn try_from(model: VoteModel) -> Result<Self, Self::Error> {
        Ok(Vote {
            id: Snowflake::new(model.id),
            post_id: Snowflake::new(model.post_id),
            voter_id: Snowflake::new(model.voter_id),
            kind: parse_vote_kind(&model.kind)?,
            created_at: model.created_at,
        })
    }
}
