use async_graphql::{ComplexObject, Context, ErrorExtensions, ID, SimpleObject};

use super::schema::get_store;
use crate::error::PostboardError;
use crate::model::{Post as ModelPost, User as ModelUser};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub name: String,
}

#[ComplexObject]
impl User {
    /// Posts written by this user
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let store = get_store(ctx)?.read().await;
        Ok(store
            .posts_by_author(&self.id)
            .cloned()
            .map(Post::from)
            .collect())
    }
}

impl From<ModelUser> for User {
    fn from(u: ModelUser) -> Self {
        Self {
            id: u.id.into(),
            name: u.name,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Post {
    pub id: ID,
    pub title: String,
    pub content: String,

    #[graphql(skip)]
    pub author_id: String,
}

#[ComplexObject]
impl Post {
    /// The user who wrote this post
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<User> {
        let store = get_store(ctx)?.read().await;
        store
            .find_user(&self.author_id)
            .cloned()
            .map(User::from)
            .ok_or_else(|| PostboardError::user_not_found(self.author_id.as_str()).extend())
    }
}

impl From<ModelPost> for Post {
    fn from(p: ModelPost) -> Self {
        Self {
            id: p.id.into(),
            title: p.title,
            content: p.content,
            author_id: p.author_id,
        }
    }
}
