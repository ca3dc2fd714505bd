//! # Posts Infrastructure
//!
//! Concrete implementations of the `PostRepository` port defined in
//! `posts-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No network client, in-memory store only
//! - `http` - REST store via reqwest

#[cfg(feature = "http")]
pub mod http;
pub mod memory;

// Re-exports - In-Memory
pub use memory::InMemoryPostRepository;

// Re-exports - HTTP
#[cfg(feature = "http")]
pub use http::{RestConfig, RestPostRepository};
