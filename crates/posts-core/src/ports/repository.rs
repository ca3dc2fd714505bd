use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::RepoError;

/// Remote post store - the REST collection the screen mirrors.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List every post, or only those whose `userId` matches `user_id`.
    async fn list(&self, user_id: Option<&str>) -> Result<Vec<Post>, RepoError>;

    /// Create a post. The returned post carries the server-assigned id.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Replace a post wholesale.
    async fn replace(&self, post: Post) -> Result<Post, RepoError>;

    /// Change only the title of a post.
    async fn patch_title(&self, id: PostId, title: &str) -> Result<Post, RepoError>;

    /// Delete a post by its id.
    async fn delete(&self, id: PostId) -> Result<(), RepoError>;
}
