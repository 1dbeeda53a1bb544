//! Group entity - a themed collection of posts

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: Snowflake,
    pub title: String,
    /// Unique, URL-safe key (`/groups/{slug}/posts`)
    pub slug: String,
    pub description: String,
}

impl Group {
    pub fn new(
        id: Snowflake,
        title: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            slug: slug.into(),
            description: description.into(),
        }
    }
}
