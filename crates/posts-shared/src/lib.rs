//! # Posts Shared
//!
//! The wire contract of the posts REST resource: where it lives by default,
//! and the request shapes that are not domain entities.

pub mod dto;

pub use dto::{ListPostsQuery, PatchTitleRequest};

/// Public demo API the screen talks to when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/posts";
