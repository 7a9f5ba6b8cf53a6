use serde::{Deserialize, Serialize};

/// Domain representation of a shared tag label attachable to any number of snippets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Tag {
    /// Unique identifier of the tag.
    pub id: i32,
    /// Label text, unique across the system.
    pub title: String,
}

/// Payload used to resolve or insert a tag by title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    /// Label text of the tag.
    pub title: String,
}

impl NewTag {
    /// Construct a tag payload with a trimmed title.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into().trim().to_string();
        Self { title }
    }
}
