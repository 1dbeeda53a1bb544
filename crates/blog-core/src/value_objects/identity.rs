//! Caller identity as seen by the domain
//!
//! Every vote and follow action is performed on behalf of an `Identity`.
//! Anonymous callers are a distinct variant rather than a sentinel user id.

use serde::Serialize;

use super::Snowflake;

/// The caller of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "kind", content = "user_id", rename_all = "snake_case")]
pub enum Identity {
    /// A signed-in user
    Authenticated(Snowflake),
    /// No credentials were presented
    #[default]
    Anonymous,
}

impl Identity {
    /// User id of an authenticated caller
    #[inline]
    pub fn user_id(&self) -> Option<Snowflake> {
        match self {
            Self::Authenticated(id) => Some(*id),
            Self::Anonymous => None,
        }
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[inline]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    /// True when the caller is authenticated as `user_id`
    pub fn is_user(&self, user_id: Snowflake) -> bool {
        self.user_id() == Some(user_id)
    }
}

impl From<Option<Snowflake>> for Identity {
    fn from(user_id: Option<Snowflake>) -> Self {
        user_id.map_or(Self::Anonymous, Self::Authenticated)
    }
}

impl From<Snowflake> for Identity {
    fn from(user_id: Snowflake) -> Self {
        Self::Authenticated(user_id)
    }
}
