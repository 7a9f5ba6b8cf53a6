use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::tag::{NewTag, Tag};

/// Domain representation of an owned note record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snippet {
    /// Unique identifier of the snippet.
    pub id: i32,
    /// Short title of the snippet.
    pub title: String,
    /// Body text of the snippet.
    pub note: String,
    /// Identifier of the owning user, assigned at creation and immutable.
    pub user_id: String,
    /// Timestamp for when the snippet was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last mutation of the snippet.
    pub updated_at: NaiveDateTime,
    /// Tags attached to the snippet, ordered by title.
    pub tags: Vec<Tag>,
}

/// Payload required to insert a new snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSnippet {
    pub title: String,
    pub note: String,
    pub user_id: String,
    /// Tag labels to resolve and attach in the same transaction.
    pub tags: Vec<NewTag>,
}

/// Patch data applied when updating an existing snippet.
///
/// `None` fields are left untouched. `tags: Some(vec![])` clears the tag
/// set, while `tags: None` keeps it as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSnippet {
    pub title: Option<String>,
    pub note: Option<String>,
    pub tags: Option<Vec<NewTag>>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

/// Query definition used to list snippets owned by a user.
#[derive(Debug, Clone)]
pub struct SnippetListQuery {
    /// Owning user identifier.
    pub user_id: String,
    /// Restrict the results to snippets referencing this tag.
    pub tag_id: Option<i32>,
}

impl SnippetListQuery {
    /// Construct a query that targets all snippets owned by `user_id`.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            tag_id: None,
        }
    }

    /// Filter the results to snippets referencing `tag_id`.
    pub fn tag(mut self, tag_id: i32) -> Self {
        self.tag_id = Some(tag_id);
        self
    }
}
