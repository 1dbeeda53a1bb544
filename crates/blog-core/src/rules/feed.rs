//! Feed ordering
//!
//! Storage backends that sort in memory use these comparators; the SQL
//! backend expresses the same orderings in `ORDER BY` clauses.

use std::cmp::Ordering;

use crate::entities::Post;

/// Newest first. Ids are time-ordered, so they break timestamp ties.
pub fn newest_first(a: &Post, b: &Post) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

/// Highest rating first, newest first among equal ratings
pub fn best_first(a: &Post, b: &Post) -> Ordering {
    b.rating.cmp(&a.rating).then_with(|| newest_first(a, b))
}
