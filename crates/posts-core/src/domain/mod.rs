//! Domain entities - the post model and the screen that mirrors it.

mod post;
mod screen;

pub use post::{DEFAULT_USER_ID, NewPost, Post, PostId, UserId};
pub use screen::{LoadState, PostsScreen, Submission};
