//! Domain errors - error types for the domain layer
//!
//! Voting and following have several "soft" results (a repeated vote, a
//! self-follow, an anonymous caller). Those are outcomes in `crate::rules`,
//! not errors, and never appear here.

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("User not found: {0}")]
    UnknownUsername(String),

    #[error("Post not found: {0}")]
    PostNotFound(Snowflake),

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Post text must not be empty")]
    EmptyContent,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Group slug already taken: {0}")]
    GroupSlugTaken(String),

    /// The ledger changed underneath a vote (unique violation on insert)
    #[error("Concurrent vote on post {0}")]
    VoteConflict(Snowflake),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) | Self::UnknownUsername(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::GroupNotFound(_) => "UNKNOWN_GROUP",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyContent => "EMPTY_CONTENT",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            Self::UsernameTaken(_) => "USERNAME_TAKEN",
            Self::GroupSlugTaken(_) => "GROUP_SLUG_TAKEN",
            Self::VoteConflict(_) => "VOTE_CONFLICT",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::UnknownUsername(_)
                | Self::PostNotFound(_)
                | Self::GroupNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::EmptyContent | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameTaken(_) | Self::GroupSlugTaken(_) | Self::VoteConflict(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::UserNotFound(Snowflake::new(1)).code(), "UNKNOWN_USER");
        assert_eq!(DomainError::UnknownUsername("ghost".into()).code(), "UNKNOWN_USER");
        assert_eq!(DomainError::PostNotFound(Snowflake::new(1)).code(), "UNKNOWN_POST");
        assert_eq!(DomainError::GroupNotFound("cats".into()).code(), "UNKNOWN_GROUP");
    }

    #[test]
    fn test_classifiers() {
        assert!(DomainError::PostNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::EmptyContent.is_not_found());
        assert!(DomainError::EmptyContent.is_validation());
        assert!(DomainError::VoteConflict(Snowflake::new(1)).is_conflict());
        assert!(!DomainError::DatabaseError("x".into()).is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::PostNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Post not found: 123");

        let err = DomainError::ContentTooLong { max: 10_000 };
        assert_eq!(err.to_string(), "Content too long: max 10000 characters");
    }
}
