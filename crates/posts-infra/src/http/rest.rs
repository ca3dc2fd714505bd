//! REST implementation of the post repository.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use posts_core::domain::{NewPost, Post, PostId};
use posts_core::error::RepoError;
use posts_core::ports::PostRepository;
use posts_shared::DEFAULT_API_URL;
use posts_shared::dto::{ListPostsQuery, PatchTitleRequest};

/// REST connection configuration.
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// URL of the posts collection (e.g., https://host/posts)
    pub base_url: String,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Post repository backed by a REST collection.
///
/// No timeout, retry or cancellation is applied: every call is exactly one
/// request, and any non-2xx status is an error.
pub struct RestPostRepository {
    client: Client,
    base_url: String,
}

impl RestPostRepository {
    pub fn new(config: RestConfig) -> Result<Self, RepoError> {
        let client = Client::builder()
            .user_agent(concat!("posts-screen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        tracing::info!(url = %base_url, "REST post store configured");

        Ok(Self { client, base_url })
    }

    fn item_url(&self, id: PostId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

fn transport(err: reqwest::Error) -> RepoError {
    RepoError::Connection(err.to_string())
}

fn check_status(response: Response) -> Result<Response, RepoError> {
    let status = response.status();
    if !status.is_success() {
        return Err(RepoError::Status {
            status: status.as_u16(),
        });
    }
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RepoError> {
    check_status(response)?
        .json::<T>()
        .await
        .map_err(|e| RepoError::Decode(e.to_string()))
}

#[async_trait]
impl PostRepository for RestPostRepository {
    async fn list(&self, user_id: Option<&str>) -> Result<Vec<Post>, RepoError> {
        let query = ListPostsQuery::for_user(user_id);
        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(transport)?;

        let posts: Vec<Post> = read_json(response).await?;
        tracing::debug!(user_id = ?query.user_id, count = posts.len(), "Fetched posts");
        Ok(posts)
    }

    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let response = self
            .client
            .post(&self.base_url)
            .json(&post)
            .send()
            .await
            .map_err(transport)?;

        let created: Post = read_json(response).await?;
        tracing::debug!(post = ?created, "Created post");
        Ok(created)
    }

    async fn replace(&self, post: Post) -> Result<Post, RepoError> {
        let response = self
            .client
            .put(self.item_url(post.id))
            .json(&post)
            .send()
            .await
            .map_err(transport)?;

        let updated: Post = read_json(response).await?;
        tracing::debug!(post = ?updated, "Updated post");
        Ok(updated)
    }

    async fn patch_title(&self, id: PostId, title: &str) -> Result<Post, RepoError> {
        let body = PatchTitleRequest {
            title: title.to_string(),
        };
        let response = self
            .client
            .patch(self.item_url(id))
            .json(&body)
            .send()
            .await
            .map_err(transport)?;

        let patched: Post = read_json(response).await?;
        tracing::debug!(post = ?patched, "Patched post title");
        Ok(patched)
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let response = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(transport)?;

        check_status(response)?;
        tracing::debug!(post_id = id, "Deleted post");
        Ok(())
    }
}
