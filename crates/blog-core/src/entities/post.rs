//! Post entity - a piece of authored text carrying a vote-derived rating

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub text: String,
    pub group_id: Option<Snowflake>,
    /// Opaque reference to an uploaded image
    pub image: Option<String>,
    /// Sum of vote deltas. Only the vote ledger changes this.
    pub rating: i64,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(id: Snowflake, author_id: Snowflake, text: impl Into<String>) -> Self {
        Self {
            id,
            author_id,
            text: text.into(),
            group_id: None,
            image: None,
            rating: 0,
            created_at: Utc::now(),
        }
    }

    pub fn with_group(mut self, group_id: Snowflake) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Add a vote delta to the rating and return the new value
    pub fn apply_rating_delta(&mut self, delta: i64) -> i64 {
        self.rating = self.rating.saturating_add(delta);
        self.rating
    }

    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }
}
