//! Posts controller - issues one request per user action and folds the
//! response into the shared screen state.
//!
//! The state lock is never held across a request. Overlapping actions each
//! fold their own response when it arrives, in whatever order that is.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::Instrument;

use posts_core::domain::{PostId, PostsScreen, Submission};
use posts_core::error::{DomainError, RepoError};
use posts_core::ports::PostRepository;

use crate::observability::action_span;

/// Result type for actions that send a request.
pub type ActionResult = Result<(), RepoError>;

#[derive(Clone)]
pub struct PostsController {
    repo: Arc<dyn PostRepository>,
    screen: Arc<RwLock<PostsScreen>>,
}

impl PostsController {
    pub fn new(repo: Arc<dyn PostRepository>, screen: PostsScreen) -> Self {
        Self {
            repo,
            screen: Arc::new(RwLock::new(screen)),
        }
    }

    /// Copy of the current screen state, for rendering.
    pub async fn snapshot(&self) -> PostsScreen {
        self.screen.read().await.clone()
    }

    // ---- fetch ----

    /// Refetch with the current filter.
    pub async fn refresh(&self) -> ActionResult {
        let filter = self.screen.read().await.list_filter().map(str::to_string);
        self.fetch(filter).await
    }

    /// Change the filter text and refetch with it.
    pub async fn set_filter(&self, text: impl Into<String>) -> ActionResult {
        let filter = {
            let mut screen = self.screen.write().await;
            screen.set_filter(text);
            screen.list_filter().map(str::to_string)
        };
        self.fetch(filter).await
    }

    async fn fetch(&self, filter: Option<String>) -> ActionResult {
        async {
            tracing::info!(user_id = ?filter, "Fetching posts");
            match self.repo.list(filter.as_deref()).await {
                Ok(posts) => {
                    tracing::info!(count = posts.len(), "Fetched posts");
                    self.screen.write().await.apply_fetched(posts);
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(error = %e, "Error fetching posts");
                    self.screen.write().await.apply_fetch_failed(e.to_string());
                    Err(e)
                }
            }
        }
        .instrument(action_span("fetch"))
        .await
    }

    // ---- form fields ----

    pub async fn set_title(&self, text: impl Into<String>) {
        self.screen.write().await.set_title(text);
    }

    pub async fn set_body(&self, text: impl Into<String>) {
        self.screen.write().await.set_body(text);
    }

    pub async fn set_patch_title(&self, text: impl Into<String>) {
        self.screen.write().await.set_patch_title(text);
    }

    // ---- selection ----

    pub async fn begin_edit(&self, id: PostId) -> Result<(), DomainError> {
        self.screen.write().await.begin_edit(id)
    }

    pub async fn cancel_edit(&self) {
        self.screen.write().await.cancel_edit();
    }

    pub async fn begin_patch(&self, id: PostId) -> Result<(), DomainError> {
        self.screen.write().await.begin_patch(id)
    }

    pub async fn cancel_patch(&self) {
        self.screen.write().await.cancel_patch();
    }

    // ---- mutations ----

    /// Create a post, or update the one selected for edit.
    pub async fn submit(&self) -> ActionResult {
        let submission = self.screen.read().await.submission();
        match submission {
            Submission::Create(new_post) => {
                async {
                    tracing::info!(post = ?new_post, "Creating post");
                    match self.repo.create(new_post).await {
                        Ok(created) => {
                            tracing::info!(post_id = created.id, "Post created successfully");
                            self.screen.write().await.apply_created(created);
                            Ok(())
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "Error creating post");
                            Err(e)
                        }
                    }
                }
                .instrument(action_span("create"))
                .await
            }
            Submission::Update(post) => {
                async {
                    tracing::info!(post = ?post, "Updating post");
                    match self.repo.replace(post).await {
                        Ok(updated) => {
                            tracing::info!(post_id = updated.id, "Post updated successfully");
                            self.screen.write().await.apply_updated(updated);
                            Ok(())
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "Error updating post");
                            Err(e)
                        }
                    }
                }
                .instrument(action_span("update"))
                .await
            }
        }
    }

    /// Send the title patch for the selected post. No-op without a selection.
    pub async fn submit_title_patch(&self) -> ActionResult {
        let Some((id, title)) = self.screen.read().await.title_patch() else {
            tracing::debug!("No post selected for title patch");
            return Ok(());
        };

        async {
            tracing::info!(post_id = id, title = %title, "Patching post title");
            match self.repo.patch_title(id, &title).await {
                Ok(patched) => {
                    tracing::info!(post_id = patched.id, "Post title patched successfully");
                    self.screen.write().await.apply_patched(patched);
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(error = %e, "Error patching post title");
                    Err(e)
                }
            }
        }
        .instrument(action_span("patch"))
        .await
    }

    pub async fn delete(&self, id: PostId) -> ActionResult {
        async {
            tracing::info!(post_id = id, "Deleting post");
            match self.repo.delete(id).await {
                Ok(()) => {
                    tracing::info!(post_id = id, "Post deleted successfully");
                    self.screen.write().await.apply_deleted(id);
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(error = %e, "Error deleting post");
                    Err(e)
                }
            }
        }
        .instrument(action_span("delete"))
        .await
    }
}
