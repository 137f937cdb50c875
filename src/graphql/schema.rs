use async_graphql::{Context, EmptySubscription, ErrorExtensions, ID, Object, Schema};

use crate::model::NewPost;
use crate::store::{SharedStore, Store};

use super::types::*;

pub type PostboardSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Store) -> PostboardSchema {
    build_schema_with(store.into_shared())
}

/// Builds a schema over a store handle the caller keeps a clone of.
pub fn build_schema_with(store: SharedStore) -> PostboardSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

pub(crate) fn get_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All users, in creation order
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let store = get_store(ctx)?.read().await;
        Ok(store.users().iter().cloned().map(User::from).collect())
    }

    /// All posts, in creation order
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let store = get_store(ctx)?.read().await;
        Ok(store.posts().iter().cloned().map(Post::from).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new user
    async fn create_user(&self, ctx: &Context<'_>, name: String) -> async_graphql::Result<User> {
        let mut store = get_store(ctx)?.write().await;
        Ok(store.insert_user(name).into())
    }

    /// Create a new post for an existing user
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        content: String,
        author_id: ID,
    ) -> async_graphql::Result<Post> {
        let mut store = get_store(ctx)?.write().await;
        let post = store
            .insert_post(NewPost::new(title, content, author_id.0))
            .map_err(|e| e.extend())?;
        Ok(post.into())
    }

    /// Rename a user
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
    ) -> async_graphql::Result<User> {
        let mut store = get_store(ctx)?.write().await;
        let user = store.update_user(&id, name).map_err(|e| e.extend())?;
        Ok(user.into())
    }

    /// Delete a user, returning it. The user's posts are kept.
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<User> {
        let mut store = get_store(ctx)?.write().await;
        let user = store.delete_user(&id).map_err(|e| e.extend())?;
        Ok(user.into())
    }

    /// Replace a post's title and content
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: ID,
        title: String,
        content: String,
    ) -> async_graphql::Result<Post> {
        let mut store = get_store(ctx)?.write().await;
        let post = store
            .update_post(&id, title, content)
            .map_err(|e| e.extend())?;
        Ok(post.into())
    }

    /// Delete a post, returning it
    async fn delete_post(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Post> {
        let mut store = get_store(ctx)?.write().await;
        let post = store.delete_post(&id).map_err(|e| e.extend())?;
        Ok(post.into())
    }
}
