//! In-memory post repository.
//!
//! Behaves like the REST collection: ids are assigned on create, a title
//! patch leaves body and owner alone, and filtering compares the `userId`
//! text. Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use posts_core::domain::{NewPost, Post, PostId};
use posts_core::error::RepoError;
use posts_core::ports::PostRepository;

struct PostStore {
    posts: Vec<Post>,
    next_id: PostId,
}

impl PostStore {
    fn position(&self, id: PostId) -> Result<usize, RepoError> {
        self.posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound { id })
    }
}

/// In-memory post repository using a Vec behind an async RwLock.
pub struct InMemoryPostRepository {
    store: RwLock<PostStore>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Seed the store. New ids continue after the highest seeded id.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            store: RwLock::new(PostStore { posts, next_id }),
        }
    }

    /// A handful of posts from two authors, for running without a server.
    pub fn sample() -> Self {
        let seed = [
            (1, "Getting started", "First post on the board.", 1),
            (2, "Second thoughts", "Following up on the first one.", 1),
            (3, "Hello from user two", "A different author.", 2),
            (4, "Notes", "Short and to the point.", 2),
        ];
        Self::with_posts(
            seed.into_iter()
                .map(|(id, title, body, user_id)| Post {
                    id,
                    title: title.to_string(),
                    body: body.to_string(),
                    user_id,
                })
                .collect(),
        )
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self, user_id: Option<&str>) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let posts: Vec<Post> = match user_id.filter(|u| !u.is_empty()) {
            Some(user_id) => store
                .posts
                .iter()
                .filter(|p| p.user_id.to_string() == user_id)
                .cloned()
                .collect(),
            None => store.posts.clone(),
        };
        tracing::debug!(user_id = ?user_id, count = posts.len(), "Listed posts from memory");
        Ok(posts)
    }

    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let created = post.into_post(store.next_id);
        store.next_id += 1;
        store.posts.push(created.clone());
        tracing::debug!(post_id = created.id, "Stored new post in memory");
        Ok(created)
    }

    async fn replace(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let index = store.position(post.id)?;
        store.posts[index] = post.clone();
        Ok(post)
    }

    async fn patch_title(&self, id: PostId, title: &str) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let index = store.position(id)?;
        let slot = &mut store.posts[index];
        slot.title = title.to_string();
        Ok(slot.clone())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let index = store.position(id)?;
        store.posts.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let repo = InMemoryPostRepository::sample();
        let created = repo.create(NewPost::new("B", "c", 1)).await.unwrap();
        assert_eq!(created.id, 5);
        assert_eq!(repo.list(None).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_list_filters_by_user_id_text() {
        let repo = InMemoryPostRepository::sample();
        let posts = repo.list(Some("2")).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.user_id == 2));

        assert!(repo.list(Some("abc")).await.unwrap().is_empty());
        assert_eq!(repo.list(Some("")).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_patch_title_keeps_other_fields() {
        let repo = InMemoryPostRepository::sample();
        let patched = repo.patch_title(3, "Renamed").await.unwrap();
        assert_eq!(patched.title, "Renamed");
        assert_eq!(patched.body, "A different author.");
        assert_eq!(patched.user_id, 2);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let repo = InMemoryPostRepository::new();
        assert!(matches!(
            repo.delete(9).await,
            Err(RepoError::NotFound { id: 9 })
        ));
        assert!(matches!(
            repo.patch_title(9, "x").await,
            Err(RepoError::NotFound { id: 9 })
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_post() {
        let repo = InMemoryPostRepository::sample();
        repo.delete(1).await.unwrap();
        let posts = repo.list(None).await.unwrap();
        assert!(posts.iter().all(|p| p.id != 1));
    }
}
