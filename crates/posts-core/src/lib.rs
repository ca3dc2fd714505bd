//! # Posts Core
//!
//! The domain layer of the posts screen.
//! This crate holds the post model, the screen state and the way responses
//! fold into it. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
