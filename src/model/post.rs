#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
}

impl Post {
    pub fn new(id: impl Into<String>, fields: NewPost) -> Self {
        Self {
            id: id.into(),
            title: fields.title,
            content: fields.content,
            author_id: fields.author_id,
        }
    }

    pub fn is_by(&self, user_id: &str) -> bool {
        self.author_id == user_id
    }
}

/// Fields for a post that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: String,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author_id: author_id.into(),
        }
    }
}
