//! Follow graph rules

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Attempted to follow yourself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("user {0} cannot follow themselves")]
pub struct SelfFollow(pub Snowflake);

/// A directed (follower, followee) pair with distinct ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FollowEdge {
    follower: Snowflake,
    followee: Snowflake,
}

impl FollowEdge {
    pub fn new(follower: Snowflake, followee: Snowflake) -> Result<Self, SelfFollow> {
        if follower == followee {
            return Err(SelfFollow(follower));
        }
        Ok(Self { follower, followee })
    }

    #[inline]
    pub fn follower(&self) -> Snowflake {
        self.follower
    }

    #[inline]
    pub fn followee(&self) -> Snowflake {
        self.followee
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowOutcome {
    Followed,
    AlreadyFollowing,
    SelfFollow,
    NotAuthorized,
}

impl FollowOutcome {
    /// Map the result of an insert-if-absent on the follow table
    pub fn from_inserted(inserted: bool) -> Self {
        if inserted {
            Self::Followed
        } else {
            Self::AlreadyFollowing
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Followed => "followed",
            Self::AlreadyFollowing => "already_following",
            Self::SelfFollow => "self_follow",
            Self::NotAuthorized => "not_authorized",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnfollowOutcome {
    Unfollowed,
    NotFollowing,
    NotAuthorized,
}

impl UnfollowOutcome {
    pub fn from_deleted(deleted: bool) -> Self {
        if deleted {
            Self::Unfollowed
        } else {
            Self::NotFollowing
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unfollowed => "unfollowed",
            Self::NotFollowing => "not_following",
            Self::NotAuthorized => "not_authorized",
        }
    }
}
