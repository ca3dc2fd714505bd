//! Application state - the post store chosen by configuration.

use std::sync::Arc;

use posts_core::error::RepoError;
use posts_core::ports::PostRepository;
use posts_infra::InMemoryPostRepository;

#[cfg(feature = "http")]
use posts_infra::{RestConfig, RestPostRepository};

use crate::config::{AppConfig, Backend};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state with the configured store.
    pub fn new(config: &AppConfig) -> Result<Self, RepoError> {
        let posts: Arc<dyn PostRepository> = match &config.backend {
            Backend::Memory => {
                tracing::info!("Using in-memory post store with sample posts");
                Arc::new(InMemoryPostRepository::sample())
            }
            #[cfg(feature = "http")]
            Backend::Rest { base_url } => Arc::new(RestPostRepository::new(RestConfig {
                base_url: base_url.clone(),
            })?),
            #[cfg(not(feature = "http"))]
            Backend::Rest { base_url } => {
                tracing::warn!(
                    url = %base_url,
                    "Built without http feature - using in-memory post store"
                );
                Arc::new(InMemoryPostRepository::sample())
            }
        };

        tracing::info!("Application state initialized");

        Ok(Self { posts })
    }
}
