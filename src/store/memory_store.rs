use std::sync::Arc;

use tokio::sync::RwLock;

use super::seed;
use crate::{
    error::{PostboardError, Result},
    model::{NewPost, Post, User},
};

/// Handle shared between resolvers. Every resolver holds the lock for one
/// store call only.
pub type SharedStore = Arc<RwLock<Store>>;

/// Hands out decimal ids from a counter that never goes backwards, so ids
/// freed by a delete are not reused.
#[derive(Debug, Default, Clone, Copy)]
struct IdCounter {
    last: u64,
}

impl IdCounter {
    fn next(&mut self) -> String {
        self.last += 1;
        self.last.to_string()
    }
}

#[derive(Debug, Default)]
pub struct Store {
    users: Vec<User>,
    posts: Vec<Post>,
    user_ids: IdCounter,
    post_ids: IdCounter,
}

impl Store {
    /// An empty store. The first user and the first post both get id `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the demo users and posts.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for name in seed::USERS {
            store.insert_user(*name);
        }
        for (title, content, author_id) in seed::POSTS {
            store.append_post(NewPost::new(*title, *content, *author_id));
        }
        store
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Posts written by `user_id`, in insertion order. Scans the whole
    /// collection on every call.
    pub fn posts_by_author<'a>(&'a self, user_id: &'a str) -> impl Iterator<Item = &'a Post> {
        self.posts.iter().filter(move |p| p.is_by(user_id))
    }

    /// The user a post points at, or `None` once that user has been deleted.
    pub fn author_of(&self, post: &Post) -> Option<&User> {
        self.find_user(&post.author_id)
    }

    pub fn insert_user(&mut self, name: impl Into<String>) -> User {
        let user = User::new(self.user_ids.next(), name);
        tracing::info!(id = %user.id, name = %user.name, "Creating user");
        self.users.push(user.clone());
        user
    }

    /// Appends a post. Fails if `fields.author_id` names no existing user.
    pub fn insert_post(&mut self, fields: NewPost) -> Result<Post> {
        if self.find_user(&fields.author_id).is_none() {
            return Err(PostboardError::user_not_found(fields.author_id));
        }
        Ok(self.append_post(fields))
    }

    fn append_post(&mut self, fields: NewPost) -> Post {
        let post = Post::new(self.post_ids.next(), fields);
        tracing::info!(id = %post.id, title = %post.title, author = %post.author_id, "Creating post");
        self.posts.push(post.clone());
        post
    }

    pub fn update_user(&mut self, id: &str, name: impl Into<String>) -> Result<User> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| PostboardError::user_not_found(id))?;

        user.name = name.into();
        tracing::info!(id = %user.id, name = %user.name, "Updating user");
        Ok(user.clone())
    }

    pub fn update_post(
        &mut self,
        id: &str,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Post> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PostboardError::post_not_found(id))?;

        post.title = title.into();
        post.content = content.into();
        tracing::info!(id = %post.id, title = %post.title, "Updating post");
        Ok(post.clone())
    }

    /// Removes a user and returns it. The user's posts are left in place.
    pub fn delete_user(&mut self, id: &str) -> Result<User> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| PostboardError::user_not_found(id))?;

        let orphaned = self.posts_by_author(id).count();
        tracing::info!(id = %id, orphaned_posts = orphaned, "Deleting user");
        Ok(self.users.remove(index))
    }

    pub fn delete_post(&mut self, id: &str) -> Result<Post> {
        let index = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PostboardError::post_not_found(id))?;

        tracing::info!(id = %id, "Deleting post");
        Ok(self.posts.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EntityKind;

    fn assert_not_found(err: PostboardError, expected_kind: EntityKind, expected_id: &str) {
        match err {
            PostboardError::NotFound { kind, id } => {
                assert_eq!(kind, expected_kind);
                assert_eq!(id, expected_id);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = Store::new();
        assert!(store.users().is_empty());
        assert!(store.posts().is_empty());
    }

    #[test]
    fn test_seeded_store_matches_demo_data() {
        let store = Store::seeded();

        let names: Vec<_> = store.users().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["John Doe", "Jane Doe"]);

        let ids: Vec<_> = store.posts().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);

        assert_eq!(store.posts_by_author("1").count(), 2);
        assert_eq!(store.posts_by_author("2").count(), 1);
    }

    #[test]
    fn test_seeded_counters_continue_after_demo_data() {
        let mut store = Store::seeded();
        assert_eq!(store.insert_user("Alice").id, "3");

        let post = store
            .insert_post(NewPost::new("Hello", "World", "3"))
            .unwrap();
        assert_eq!(post.id, "4");
    }

    #[test]
    fn test_insert_user_assigns_fresh_id_and_lists_it() {
        let mut store = Store::new();
        let alice = store.insert_user("Alice");

        assert_eq!(alice.id, "1");
        assert_eq!(alice.name, "Alice");
        assert_eq!(store.users(), [alice.clone()]);
        assert_eq!(store.find_user("1"), Some(&alice));
    }

    #[test]
    fn test_insert_post_links_to_author() {
        let mut store = Store::new();
        let alice = store.insert_user("Alice");
        let post = store
            .insert_post(NewPost::new("Title", "Body", &alice.id))
            .unwrap();

        let authored: Vec<_> = store.posts_by_author(&alice.id).collect();
        assert_eq!(authored, [&post]);
        assert_eq!(store.author_of(&post), Some(&alice));
        assert_eq!(store.find_post(&post.id), Some(&post));
    }

    #[test]
    fn test_insert_post_rejects_unknown_author() {
        let mut store = Store::new();

        let err = store
            .insert_post(NewPost::new("Title", "Body", "99"))
            .unwrap_err();
        assert_not_found(err, EntityKind::User, "99");
        assert!(store.posts().is_empty());

        // A rejected insert must not burn an id.
        store.insert_user("Alice");
        let post = store
            .insert_post(NewPost::new("Title", "Body", "1"))
            .unwrap();
        assert_eq!(post.id, "1");
    }

    #[test]
    fn test_update_user_changes_only_name() {
        let mut store = Store::seeded();
        let posts_before = store.posts().to_vec();

        let updated = store.update_user("1", "Bob").unwrap();
        assert_eq!(updated, User::new("1", "Bob"));
        assert_eq!(store.find_user("1"), Some(&updated));
        assert_eq!(store.find_user("2").map(|u| u.name.as_str()), Some("Jane Doe"));
        assert_eq!(store.posts(), posts_before.as_slice());
    }

    #[test]
    fn test_update_user_unknown_id_is_not_found() {
        let mut store = Store::seeded();
        let err = store.update_user("404", "X").unwrap_err();
        assert_not_found(err, EntityKind::User, "404");
    }

    #[test]
    fn test_update_post_overwrites_title_and_content() {
        let mut store = Store::seeded();

        let updated = store.update_post("2", "New title", "New content").unwrap();
        assert_eq!(updated.title, "New title");
        assert_eq!(updated.content, "New content");
        assert_eq!(updated.author_id, "1");
        assert_eq!(store.find_post("2"), Some(&updated));
    }

    #[test]
    fn test_update_post_unknown_id_is_not_found() {
        let mut store = Store::seeded();
        let err = store.update_post("404", "t", "c").unwrap_err();
        assert_not_found(err, EntityKind::Post, "404");
    }

    #[test]
    fn test_delete_user_leaves_posts_dangling() {
        let mut store = Store::seeded();

        let removed = store.delete_user("1").unwrap();
        assert_eq!(removed, User::new("1", "John Doe"));
        assert!(store.find_user("1").is_none());
        assert_eq!(store.users().len(), 1);

        // Both of John's posts survive with an author that no longer resolves.
        let orphans: Vec<_> = store.posts().iter().filter(|p| p.is_by("1")).collect();
        assert_eq!(orphans.len(), 2);
        for post in orphans {
            assert!(store.author_of(post).is_none());
        }
    }

    #[test]
    fn test_delete_user_unknown_id_is_not_found() {
        let mut store = Store::seeded();
        let err = store.delete_user("404").unwrap_err();
        assert_not_found(err, EntityKind::User, "404");
        assert_eq!(store.users().len(), 2);
    }

    #[test]
    fn test_delete_post_returns_prior_value() {
        let mut store = Store::seeded();
        let before = store.find_post("3").cloned().unwrap();

        let removed = store.delete_post("3").unwrap();
        assert_eq!(removed, before);
        assert!(store.find_post("3").is_none());
        assert_eq!(store.posts_by_author("2").count(), 0);
    }

    #[test]
    fn test_delete_post_unknown_id_leaves_collection_unchanged() {
        let mut store = Store::seeded();
        let before = store.posts().to_vec();

        let err = store.delete_post("404").unwrap_err();
        assert_not_found(err, EntityKind::Post, "404");
        assert_eq!(store.posts(), before.as_slice());
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut store = Store::new();
        store.insert_user("Alice");
        let bob = store.insert_user("Bob");
        store.delete_user(&bob.id).unwrap();

        let carol = store.insert_user("Carol");
        assert_eq!(carol.id, "3");

        store.delete_user("1").unwrap();
        let dave = store.insert_user("Dave");
        assert_eq!(dave.id, "4");

        let ids: Vec<_> = store.users().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["3", "4"]);
    }

    #[test]
    fn test_listing_twice_is_stable() {
        let mut store = Store::seeded();
        store.insert_user("Alice");

        let first = store.users().to_vec();
        let second = store.users().to_vec();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_shared_store_serializes_access() {
        let shared = Store::new().into_shared();
        shared.write().await.insert_user("Alice");
        assert_eq!(shared.read().await.users().len(), 1);
    }
}
