//! Screen state - the local mirror of the remote collection plus form fields.
//!
//! Nothing here talks to the network. Callers read a request out of the
//! screen (`submission`, `title_patch`, `list_filter`), send it, and fold the
//! response back in with one of the `apply_*` methods. A failed request folds
//! nothing, so the screen stays exactly as it was before the attempt.

use super::post::{DEFAULT_USER_ID, NewPost, Post, PostId};
use crate::error::DomainError;

/// Outcome of the list fetch as shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// No fetch has completed yet.
    #[default]
    Loading,
    /// At least one fetch succeeded.
    Ready,
    /// No fetch has succeeded and the latest one failed.
    Failed(String),
}

/// What the submit button sends, depending on the edit selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(NewPost),
    Update(Post),
}

/// Local state of the posts screen.
#[derive(Debug, Clone, Default)]
pub struct PostsScreen {
    posts: Vec<Post>,
    load: LoadState,
    title: String,
    body: String,
    filter: String,
    patch_title: String,
    editing: Option<Post>,
    patching: Option<Post>,
}

impl PostsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a filter already typed in.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            ..Self::default()
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn patch_title(&self) -> &str {
        &self.patch_title
    }

    pub fn editing(&self) -> Option<&Post> {
        self.editing.as_ref()
    }

    pub fn patching(&self) -> Option<&Post> {
        self.patching.as_ref()
    }

    pub fn find(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    pub fn set_patch_title(&mut self, title: impl Into<String>) {
        self.patch_title = title.into();
    }

    /// `userId` query value for the next fetch, `None` for the full collection.
    pub fn list_filter(&self) -> Option<&str> {
        if self.filter.is_empty() {
            None
        } else {
            Some(self.filter.as_str())
        }
    }

    // ---- selection ----

    /// Select a listed post for a full edit and pre-fill the form with it.
    pub fn begin_edit(&mut self, id: PostId) -> Result<(), DomainError> {
        let post = self.find(id).cloned().ok_or(DomainError::NotFound {
            entity_type: "Post",
            id,
        })?;
        self.title = post.title.clone();
        self.body = post.body.clone();
        self.editing = Some(post);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.clear_form();
    }

    /// Select a listed post for a title patch and pre-fill the new title.
    pub fn begin_patch(&mut self, id: PostId) -> Result<(), DomainError> {
        let post = self.find(id).cloned().ok_or(DomainError::NotFound {
            entity_type: "Post",
            id,
        })?;
        self.patch_title = post.title.clone();
        self.patching = Some(post);
        Ok(())
    }

    pub fn cancel_patch(&mut self) {
        self.patching = None;
        self.patch_title.clear();
    }

    // ---- outgoing requests ----

    /// Request the submit button sends: an update while a post is selected
    /// for edit, a create otherwise.
    pub fn submission(&self) -> Submission {
        match &self.editing {
            Some(post) => Submission::Update(post.with_content(&self.title, &self.body)),
            None => Submission::Create(NewPost::new(&self.title, &self.body, DEFAULT_USER_ID)),
        }
    }

    /// Id and new title for the patch request, if a post is selected for it.
    pub fn title_patch(&self) -> Option<(PostId, String)> {
        self.patching
            .as_ref()
            .map(|post| (post.id, self.patch_title.clone()))
    }

    // ---- folding responses ----

    /// A fetch succeeded: its result replaces the local list.
    pub fn apply_fetched(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.load = LoadState::Ready;
    }

    /// A fetch failed. Returns `true` when the failure replaces the screen,
    /// which only happens while no fetch has succeeded yet.
    pub fn apply_fetch_failed(&mut self, message: impl Into<String>) -> bool {
        if self.load == LoadState::Ready {
            return false;
        }
        self.load = LoadState::Failed(message.into());
        true
    }

    pub fn apply_created(&mut self, post: Post) {
        self.posts.push(post);
        self.clear_form();
    }

    pub fn apply_updated(&mut self, post: Post) {
        self.replace_by_id(post);
        self.editing = None;
        self.clear_form();
    }

    pub fn apply_patched(&mut self, post: Post) {
        self.replace_by_id(post);
        self.cancel_patch();
    }

    pub fn apply_deleted(&mut self, id: PostId) {
        self.posts.retain(|p| p.id != id);
    }

    fn replace_by_id(&mut self, post: Post) {
        for slot in self.posts.iter_mut().filter(|p| p.id == post.id) {
            *slot = post.clone();
        }
    }

    fn clear_form(&mut self) {
        self.title.clear();
        self.body.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: PostId, title: &str, body: &str, user_id: u64) -> Post {
        Post {
            id,
            title: title.to_string(),
            body: body.to_string(),
            user_id,
        }
    }

    fn loaded(posts: Vec<Post>) -> PostsScreen {
        let mut screen = PostsScreen::new();
        screen.apply_fetched(posts);
        screen
    }

    #[test]
    fn test_create_appends_in_order_and_clears_form() {
        let mut screen = loaded(vec![post(1, "A", "b", 1)]);
        screen.set_title("B");
        screen.set_body("c");

        let Submission::Create(new_post) = screen.submission() else {
            panic!("expected a create without edit selection");
        };
        assert_eq!(new_post, NewPost::new("B", "c", 1));

        screen.apply_created(new_post.into_post(2));

        let titles: Vec<_> = screen.posts().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
        assert_eq!(screen.posts()[1].id, 2);
        assert!(screen.title().is_empty());
        assert!(screen.body().is_empty());
    }

    #[test]
    fn test_begin_edit_prefills_form_and_switches_submission() {
        let mut screen = loaded(vec![post(1, "A", "b", 4)]);
        screen.begin_edit(1).unwrap();
        assert_eq!(screen.title(), "A");
        assert_eq!(screen.body(), "b");

        screen.set_title("T");
        assert_eq!(
            screen.submission(),
            Submission::Update(post(1, "T", "b", 4))
        );
    }

    #[test]
    fn test_update_replaces_entry_and_clears_selection() {
        let mut screen = loaded(vec![post(1, "A", "b", 1), post(2, "C", "d", 1)]);
        screen.begin_edit(2).unwrap();
        screen.set_title("T");

        screen.apply_updated(post(2, "T", "d", 1));

        assert_eq!(screen.find(2).unwrap().title, "T");
        assert_eq!(screen.posts().len(), 2);
        assert!(screen.editing().is_none());
        assert!(screen.title().is_empty());
    }

    #[test]
    fn test_patch_replaces_entry_with_response() {
        let mut screen = loaded(vec![post(5, "old", "keep", 3)]);
        screen.begin_patch(5).unwrap();
        assert_eq!(screen.patch_title(), "old");
        screen.set_patch_title("new");
        assert_eq!(screen.title_patch(), Some((5, "new".to_string())));

        screen.apply_patched(post(5, "new", "keep", 3));

        let patched = screen.find(5).unwrap();
        assert_eq!(patched.title, "new");
        assert_eq!(patched.body, "keep");
        assert_eq!(patched.user_id, 3);
        assert!(screen.patching().is_none());
        assert!(screen.patch_title().is_empty());
    }

    #[test]
    fn test_edit_and_patch_selections_are_independent() {
        let mut screen = loaded(vec![post(1, "A", "b", 1), post(2, "C", "d", 1)]);
        screen.begin_edit(1).unwrap();
        screen.begin_patch(2).unwrap();

        screen.cancel_patch();
        assert_eq!(screen.editing().map(|p| p.id), Some(1));

        screen.begin_patch(2).unwrap();
        screen.cancel_edit();
        assert_eq!(screen.patching().map(|p| p.id), Some(2));
        assert!(screen.title().is_empty());
    }

    #[test]
    fn test_selecting_unknown_id_changes_nothing() {
        let mut screen = loaded(vec![post(1, "A", "b", 1)]);
        screen.set_title("draft");

        let err = screen.begin_edit(42).unwrap_err();
        assert_eq!(
            err,
            DomainError::NotFound {
                entity_type: "Post",
                id: 42
            }
        );
        assert!(screen.begin_patch(42).is_err());
        assert_eq!(screen.title(), "draft");
        assert!(screen.editing().is_none());
        assert!(screen.patching().is_none());
    }

    #[test]
    fn test_title_patch_requires_selection() {
        let mut screen = loaded(vec![post(1, "A", "b", 1)]);
        screen.set_patch_title("ignored");
        assert_eq!(screen.title_patch(), None);
    }

    #[test]
    fn test_delete_removes_every_matching_entry() {
        let mut screen = loaded(vec![post(1, "A", "b", 1), post(2, "C", "d", 1)]);
        screen.apply_deleted(1);
        assert!(screen.find(1).is_none());
        assert_eq!(screen.posts().len(), 1);

        screen.apply_deleted(99);
        assert_eq!(screen.posts().len(), 1);
    }

    #[test]
    fn test_fetch_replaces_list_entirely() {
        let mut screen = loaded(vec![post(1, "A", "b", 1)]);
        screen.apply_fetched(vec![post(11, "X", "y", 2), post(12, "Z", "w", 2)]);
        assert!(screen.posts().iter().all(|p| p.user_id == 2));
        assert_eq!(screen.posts().len(), 2);
    }

    #[test]
    fn test_list_filter_empty_means_everything() {
        let mut screen = PostsScreen::new();
        assert_eq!(screen.list_filter(), None);
        screen.set_filter("2");
        assert_eq!(screen.list_filter(), Some("2"));
        assert_eq!(PostsScreen::with_filter("3").list_filter(), Some("3"));
    }

    #[test]
    fn test_fetch_failure_only_replaces_screen_before_first_success() {
        let mut screen = PostsScreen::new();
        assert_eq!(screen.load_state(), &LoadState::Loading);

        assert!(screen.apply_fetch_failed("boom"));
        assert_eq!(screen.load_state(), &LoadState::Failed("boom".to_string()));

        screen.apply_fetched(vec![post(1, "A", "b", 1)]);
        assert_eq!(screen.load_state(), &LoadState::Ready);

        assert!(!screen.apply_fetch_failed("later"));
        assert_eq!(screen.load_state(), &LoadState::Ready);
        assert_eq!(screen.posts().len(), 1);
    }
}
