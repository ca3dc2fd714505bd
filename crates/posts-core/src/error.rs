//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Domain errors - failures of local screen actions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: PostId },
}

/// Repository-level errors.
///
/// Every variant means the same thing to the screen: the remote call failed
/// and nothing gets folded into local state.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Network error: {0}")]
    Connection(String),

    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Post {id} not found")]
    NotFound { id: PostId },
}
