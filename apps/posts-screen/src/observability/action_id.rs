//! Action IDs - a unique ID for every user action and the request it sends.

use uuid::Uuid;

/// Identifier carried by the span of one user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionId(Uuid);

impl ActionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Span wrapping one action from request to folded response.
///
/// Overlapping actions get distinct ids, so their log lines can be told
/// apart even when responses arrive out of order.
pub fn action_span(action: &'static str) -> tracing::Span {
    let action_id = ActionId::new();
    tracing::info_span!("action", action, action_id = %action_id)
}
