use serde::{Deserialize, Serialize};

/// Server-assigned post identifier.
pub type PostId = u64;

/// Owner of a post.
pub type UserId = u64;

/// Author used for every post created from the screen.
pub const DEFAULT_USER_ID: UserId = 1;

/// Post entity - a blog-style entry owned by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub user_id: UserId,
}

impl Post {
    /// Copy of this post with title and body taken from the form.
    pub fn with_content(&self, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..self.clone()
        }
    }
}

/// Input to creation - the server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: UserId,
}

impl NewPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>, user_id: UserId) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            user_id,
        }
    }

    /// Attach a server-assigned id.
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            body: self.body,
            user_id: self.user_id,
        }
    }
}
