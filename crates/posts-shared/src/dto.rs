//! Data Transfer Objects - query strings and partial bodies for the API.

use serde::{Deserialize, Serialize};

/// Query string for `GET /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl ListPostsQuery {
    /// An empty filter means the whole collection.
    pub fn for_user(user_id: Option<&str>) -> Self {
        Self {
            user_id: user_id.filter(|u| !u.is_empty()).map(str::to_string),
        }
    }
}

/// Body of `PATCH /posts/{id}` - only the title changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchTitleRequest {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_is_omitted() {
        let value = serde_json::to_value(ListPostsQuery::for_user(Some(""))).unwrap();
        assert_eq!(value, serde_json::json!({}));

        let value = serde_json::to_value(ListPostsQuery::for_user(Some("2"))).unwrap();
        assert_eq!(value, serde_json::json!({ "userId": "2" }));
    }

    #[test]
    fn test_patch_body_carries_title_only() {
        let value = serde_json::to_value(PatchTitleRequest {
            title: "T".to_string(),
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({ "title": "T" }));
    }
}
