//! REST store - the posts collection behind an HTTP API.

mod rest;

pub use rest::{RestConfig, RestPostRepository};
