//! In-process storage
//!
//! Every table lives behind one `parking_lot::Mutex`, and each repository
//! call holds it for its whole read-modify-write. That gives the same
//! guarantees the PostgreSQL backend gets from row locks and unique
//! constraints: one vote per (post, voter), one edge per (follower, followee),
//! and a rating that always equals the sum of applied deltas.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::instrument;

use blog_core::entities::{Follow, Group, Post, User, Vote, VoteKind};
use blog_core::error::DomainError;
use blog_core::rules::{feed, LedgerChange, VoteState};
use blog_core::traits::{
    FollowRepository, GroupRepository, PostQuery, PostRepository, RepoResult, UserRepository,
    VoteRecord, VoteRepository,
};
use blog_core::value_objects::Snowflake;

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Snowflake, User>,
    groups: HashMap<Snowflake, Group>,
    posts: HashMap<Snowflake, Post>,
    votes: HashMap<(Snowflake, Snowflake), Vote>,
    follows: HashMap<(Snowflake, Snowflake), Follow>,
}

impl Tables {
    fn sorted_posts<P>(&self, predicate: P, query: PostQuery) -> Vec<Post>
    where
        P: Fn(&Post) -> bool,
    {
        let mut posts: Vec<Post> = self.posts.values().filter(|p| predicate(p)).cloned().collect();
        posts.sort_by(feed::newest_first);
        query.slice(posts)
    }
}

/// Cloneable handle; clones share the same tables
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored votes on a post
    pub fn vote_count(&self, post_id: Snowflake) -> usize {
        self.tables
            .lock()
            .votes
            .keys()
            .filter(|(post, _)| *post == post_id)
            .count()
    }

    /// Number of stored follow edges from `follower_id`
    pub fn follow_count(&self, follower_id: Snowflake) -> usize {
        self.tables
            .lock()
            .follows
            .keys()
            .filter(|(follower, _)| *follower == follower_id)
            .count()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.tables.lock().users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .tables
            .lock()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if tables.users.values().any(|u| u.username == user.username) {
            return Err(DomainError::UsernameTaken(user.username.clone()));
        }
        tables.users.insert(user.id, user.clone());
        Ok(())
    }
}

#[async_trait]
impl GroupRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Group>> {
        Ok(self.tables.lock().groups.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Group>> {
        Ok(self
            .tables
            .lock()
            .groups
            .values()
            .find(|g| g.slug == slug)
            .cloned())
    }

    #[instrument(skip(self, group), fields(slug = %group.slug))]
    async fn create(&self, group: &Group) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if tables.groups.values().any(|g| g.slug == group.slug) {
            return Err(DomainError::GroupSlugTaken(group.slug.clone()));
        }
        tables.groups.insert(group.id, group.clone());
        Ok(())
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        Ok(self.tables.lock().posts.get(&id).cloned())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if !tables.users.contains_key(&post.author_id) {
            return Err(DomainError::UserNotFound(post.author_id));
        }
        tables.posts.insert(post.id, post.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn apply_rating_delta(&self, post_id: Snowflake, delta: i64) -> RepoResult<i64> {
        self.tables
            .lock()
            .posts
            .get_mut(&post_id)
            .map(|post| post.apply_rating_delta(delta))
            .ok_or(DomainError::PostNotFound(post_id))
    }

    async fn find_latest(&self, query: PostQuery) -> RepoResult<Vec<Post>> {
        Ok(self.tables.lock().sorted_posts(|_| true, query))
    }

    async fn find_best(&self, query: PostQuery) -> RepoResult<Vec<Post>> {
        let tables = self.tables.lock();
        let mut posts: Vec<Post> = tables.posts.values().cloned().collect();
        posts.sort_by(feed::best_first);
        Ok(query.slice(posts))
    }

    async fn find_by_author(
        &self,
        author_id: Snowflake,
        query: PostQuery,
    ) -> RepoResult<Vec<Post>> {
        Ok(self
            .tables
            .lock()
            .sorted_posts(|p| p.author_id == author_id, query))
    }

    async fn count_by_author(&self, author_id: Snowflake) -> RepoResult<i64> {
        let count = self
            .tables
            .lock()
            .posts
            .values()
            .filter(|p| p.author_id == author_id)
            .count();
        Ok(count as i64)
    }

    async fn find_by_group(&self, group_id: Snowflake, query: PostQuery) -> RepoResult<Vec<Post>> {
        Ok(self
            .tables
            .lock()
            .sorted_posts(|p| p.group_id == Some(group_id), query))
    }

    async fn find_by_followed_authors(
        &self,
        follower_id: Snowflake,
        query: PostQuery,
    ) -> RepoResult<Vec<Post>> {
        let tables = self.tables.lock();
        Ok(tables.sorted_posts(
            |p| tables.follows.contains_key(&(follower_id, p.author_id)),
            query,
        ))
    }
}

#[async_trait]
impl VoteRepository for MemoryStore {
    async fn find(&self, post_id: Snowflake, voter_id: Snowflake) -> RepoResult<Option<Vote>> {
        Ok(self.tables.lock().votes.get(&(post_id, voter_id)).cloned())
    }

    #[instrument(skip(self))]
    async fn record(
        &self,
        vote_id: Snowflake,
        post_id: Snowflake,
        voter_id: Snowflake,
        kind: VoteKind,
    ) -> RepoResult<VoteRecord> {
        let mut tables = self.tables.lock();
        let tables = &mut *tables;

        let post = tables
            .posts
            .get_mut(&post_id)
            .ok_or(DomainError::PostNotFound(post_id))?;

        let key = (post_id, voter_id);
        let current = VoteState::from_kind(tables.votes.get(&key).map(|v| v.kind));
        let transition = current.transition(kind);

        match transition.change {
            LedgerChange::Insert(kind) => {
                tables
                    .votes
                    .insert(key, Vote::new(vote_id, post_id, voter_id, kind));
            }
            LedgerChange::Delete => {
                tables.votes.remove(&key);
            }
            LedgerChange::None => {}
        }

        let rating = post.apply_rating_delta(transition.outcome.delta());

        Ok(VoteRecord {
            outcome: transition.outcome,
            state: transition.next,
            rating,
        })
    }
}

#[async_trait]
impl FollowRepository for MemoryStore {
    #[instrument(skip(self, follow), fields(follower_id = %follow.follower_id, followee_id = %follow.followee_id))]
    async fn create(&self, follow: &Follow) -> RepoResult<bool> {
        let mut tables = self.tables.lock();
        let key = (follow.follower_id, follow.followee_id);
        if tables.follows.contains_key(&key) {
            return Ok(false);
        }
        tables.follows.insert(key, follow.clone());
        Ok(true)
    }

    async fn delete(&self, follower_id: Snowflake, followee_id: Snowflake) -> RepoResult<bool> {
        Ok(self
            .tables
            .lock()
            .follows
            .remove(&(follower_id, followee_id))
            .is_some())
    }

    async fn exists(&self, follower_id: Snowflake, followee_id: Snowflake) -> RepoResult<bool> {
        Ok(self
            .tables
            .lock()
            .follows
            .contains_key(&(follower_id, followee_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::rules::{FollowEdge, VoteOutcome};

    async fn store_with_post() -> (MemoryStore, Snowflake) {
        let store = MemoryStore::new();
        UserRepository::create(&store, &User::new(Snowflake::new(1), "author"))
            .await
            .unwrap();
        let post = Post::new(Snowflake::new(100), Snowflake::new(1), "hello");
        PostRepository::create(&store, &post).await.unwrap();
        (store, post.id)
    }

    #[tokio::test]
    async fn test_vote_ledger_follows_state_machine() {
        let (store, post_id) = store_with_post().await;
        let voter = Snowflake::new(2);

        let r = store.record(Snowflake::new(500), post_id, voter, VoteKind::Like).await.unwrap();
        assert_eq!(r.outcome, VoteOutcome::Applied { delta: 1 });
        assert_eq!(r.rating, 1);
        assert_eq!(store.vote_count(post_id), 1);

        let r = store.record(Snowflake::new(501), post_id, voter, VoteKind::Like).await.unwrap();
        assert_eq!(r.outcome, VoteOutcome::Repeated);
        assert_eq!(r.rating, 1);

        let r = store.record(Snowflake::new(502), post_id, voter, VoteKind::Dislike).await.unwrap();
        assert_eq!(r.outcome, VoteOutcome::Reverted { delta: -1 });
        assert_eq!(r.state, VoteState::NoVote);
        assert_eq!(r.rating, 0);
        assert_eq!(store.vote_count(post_id), 0);
        assert!(store.find(post_id, voter).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_vote_on_missing_post() {
        let store = MemoryStore::new();
        let err = store
            .record(Snowflake::new(1), Snowflake::new(404), Snowflake::new(2), VoteKind::Like)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PostNotFound(_)));
    }

    #[tokio::test]
    async fn test_concurrent_votes_keep_rating_consistent() {
        let (store, post_id) = store_with_post().await;

        let handles: Vec<_> = (0..50_i64)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    let kind = if i % 5 == 0 { VoteKind::Dislike } else { VoteKind::Like };
                    store
                        .record(Snowflake::new(1000 + i), post_id, Snowflake::new(10 + i), kind)
                        .await
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let post = PostRepository::find_by_id(&store, post_id).await.unwrap().unwrap();
        assert_eq!(post.rating, 40 - 10);
        assert_eq!(store.vote_count(post_id), 50);
    }

    #[tokio::test]
    async fn test_follow_edges_are_deduplicated() {
        let store = MemoryStore::new();
        let edge = FollowEdge::new(Snowflake::new(1), Snowflake::new(2)).unwrap();

        assert!(FollowRepository::create(&store, &Follow::new(Snowflake::new(10), edge)).await.unwrap());
        assert!(!FollowRepository::create(&store, &Follow::new(Snowflake::new(11), edge)).await.unwrap());
        assert_eq!(store.follow_count(Snowflake::new(1)), 1);

        assert!(store.delete(Snowflake::new(1), Snowflake::new(2)).await.unwrap());
        assert!(!store.delete(Snowflake::new(1), Snowflake::new(2)).await.unwrap());
        assert!(!store.exists(Snowflake::new(1), Snowflake::new(2)).await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_follows_leave_one_edge() {
        let store = MemoryStore::new();
        let edge = FollowEdge::new(Snowflake::new(1), Snowflake::new(2)).unwrap();

        let handles: Vec<_> = (0..32_i64)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    FollowRepository::create(&store, &Follow::new(Snowflake::new(100 + i), edge))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut inserted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                inserted += 1;
            }
        }
        assert_eq!(inserted, 1);
        assert_eq!(store.follow_count(Snowflake::new(1)), 1);
    }

    #[tokio::test]
    async fn test_followed_authors_feed() {
        let store = MemoryStore::new();
        for (id, name) in [(1, "a"), (2, "b"), (3, "c")] {
            UserRepository::create(&store, &User::new(Snowflake::new(id), name))
                .await
                .unwrap();
        }
        let edge = FollowEdge::new(Snowflake::new(1), Snowflake::new(2)).unwrap();
        FollowRepository::create(&store, &Follow::new(Snowflake::new(10), edge))
            .await
            .unwrap();

        let by_b = Post::new(Snowflake::new(100), Snowflake::new(2), "from b");
        let by_c = Post::new(Snowflake::new(101), Snowflake::new(3), "from c");
        PostRepository::create(&store, &by_b).await.unwrap();
        PostRepository::create(&store, &by_c).await.unwrap();

        let feed = store
            .find_by_followed_authors(Snowflake::new(1), PostQuery::default())
            .await
            .unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].id, by_b.id);

        let feed = store
            .find_by_followed_authors(Snowflake::new(3), PostQuery::default())
            .await
            .unwrap();
        assert!(feed.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let store = MemoryStore::new();
        UserRepository::create(&store, &User::new(Snowflake::new(1), "leo")).await.unwrap();
        let err = UserRepository::create(&store, &User::new(Snowflake::new(2), "leo"))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }
}
