//! Text rendering of the screen state.

use std::fmt;

use posts_core::domain::{LoadState, PostsScreen};

/// Display adapter that draws a `PostsScreen` as plain text.
pub struct ScreenView<'a>(pub &'a PostsScreen);

impl fmt::Display for ScreenView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let screen = self.0;
        match screen.load_state() {
            LoadState::Loading => return writeln!(f, "Loading..."),
            LoadState::Failed(message) => return writeln!(f, "Error: {message}"),
            LoadState::Ready => {}
        }

        writeln!(f, "Filter by User ID: [{}]", screen.filter())?;
        writeln!(f, "----")?;
        if screen.posts().is_empty() {
            writeln!(f, "  (no posts)")?;
        }
        for post in screen.posts() {
            writeln!(f, "  #{:<4} {}  (user {})", post.id, post.title, post.user_id)?;
        }
        writeln!(f, "----")?;

        writeln!(f, "Title: [{}]", screen.title())?;
        writeln!(f, "Body:  [{}]", screen.body())?;
        match screen.editing() {
            Some(post) => writeln!(f, "[Update Post #{}]  [Cancel]", post.id)?,
            None => writeln!(f, "[Create Post]")?,
        }

        if let Some(post) = screen.patching() {
            writeln!(f, "New Title for #{}: [{}]", post.id, screen.patch_title())?;
            writeln!(f, "[Submit Title Update]  [Cancel]")?;
        }
        Ok(())
    }
}
