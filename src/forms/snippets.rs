use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::snippet::{NewSnippet, UpdateSnippet};
use crate::domain::tag::NewTag;

/// Maximum allowed length for a snippet title.
const TITLE_MAX_LEN: u64 = 255;
/// Maximum allowed length for a tag title.
const TAG_TITLE_MAX_LEN: u64 = 100;

/// Result type returned by the snippet form helpers.
pub type SnippetFormResult<T> = Result<T, SnippetFormError>;

/// Errors that can occur while processing snippet request bodies.
#[derive(Debug, Error)]
pub enum SnippetFormError {
    #[error("Request body cannot be empty.")]
    EmptyBody,
    #[error("Request body must be a JSON object.")]
    NotAnObject,
    #[error("Field \"{0}\" is required.")]
    MissingField(&'static str),
    #[error("Field \"{0}\" must be a string.")]
    InvalidField(&'static str),
    #[error("Field \"{0}\" may not be blank.")]
    BlankField(&'static str),
    #[error("Tags must be a list of objects with a \"title\" field.")]
    TagsNotAList,
    #[error("Each tag must be an object with a \"title\" field.")]
    MalformedTag,
    #[error("Tag title cannot be blank.")]
    BlankTagTitle,
    #[error("Invalid request body: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Tag element of a snippet write payload.
#[derive(Debug, Deserialize, Validate)]
pub struct TagPayload {
    #[validate(length(min = 1, max = TAG_TITLE_MAX_LEN))]
    pub title: String,
}

/// Write payload shared by the create and update endpoints.
///
/// Requiredness of `title` and `note` depends on the write mode, so all
/// fields deserialize as optional and the `into_*` conversions enforce it.
#[derive(Debug, Deserialize, Validate)]
pub struct SnippetWriteForm {
    #[validate(length(max = TITLE_MAX_LEN))]
    pub title: Option<String>,
    pub note: Option<String>,
    #[validate(nested)]
    pub tags: Option<Vec<TagPayload>>,
}

impl SnippetWriteForm {
    /// Structurally validate a raw JSON body and deserialize it.
    ///
    /// An empty or null body is rejected outright; a present `tags` field
    /// must be a list of objects each bearing a non-blank string `title`.
    pub fn from_value(body: &Value) -> SnippetFormResult<Self> {
        let map = match body {
            Value::Object(map) => map,
            Value::Null => return Err(SnippetFormError::EmptyBody),
            _ => return Err(SnippetFormError::NotAnObject),
        };
        if map.is_empty() {
            return Err(SnippetFormError::EmptyBody);
        }

        for field in ["title", "note"] {
            if let Some(value) = map.get(field) {
                if !value.is_string() {
                    return Err(SnippetFormError::InvalidField(field));
                }
            }
        }

        if let Some(tags) = map.get("tags") {
            let items = tags.as_array().ok_or(SnippetFormError::TagsNotAList)?;
            for item in items {
                let title = item
                    .as_object()
                    .and_then(|tag| tag.get("title"))
                    .and_then(Value::as_str)
                    .ok_or(SnippetFormError::MalformedTag)?;
                if title.trim().is_empty() {
                    return Err(SnippetFormError::BlankTagTitle);
                }
            }
        }

        let form: SnippetWriteForm = serde_json::from_value(body.clone())?;
        form.validate()?;

        Ok(form)
    }

    /// Convert into a create payload; `title` and `note` are required.
    pub fn into_new_snippet(self, user_id: &str) -> SnippetFormResult<NewSnippet> {
        let title = required_text("title", self.title)?;
        let note = required_text("note", self.note)?;
        let tags = self
            .tags
            .unwrap_or_default()
            .iter()
            .map(|tag| NewTag::new(tag.title.as_str()))
            .collect();

        Ok(NewSnippet {
            title,
            note,
            user_id: user_id.to_string(),
            tags,
        })
    }

    /// Convert into an update payload; `partial` relaxes the required fields.
    pub fn into_update_snippet(
        self,
        partial: bool,
        updated_at: NaiveDateTime,
    ) -> SnippetFormResult<UpdateSnippet> {
        let (title, note) = if partial {
            (
                optional_text("title", self.title)?,
                optional_text("note", self.note)?,
            )
        } else {
            (
                Some(required_text("title", self.title)?),
                Some(required_text("note", self.note)?),
            )
        };

        let tags = self
            .tags
            .map(|tags| tags.iter().map(|tag| NewTag::new(tag.title.as_str())).collect());

        Ok(UpdateSnippet {
            title,
            note,
            tags,
            updated_at,
        })
    }
}

fn required_text(field: &'static str, value: Option<String>) -> SnippetFormResult<String> {
    let value = value.ok_or(SnippetFormError::MissingField(field))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SnippetFormError::BlankField(field));
    }
    Ok(trimmed.to_string())
}

fn optional_text(
    field: &'static str,
    value: Option<String>,
) -> SnippetFormResult<Option<String>> {
    match value {
        Some(value) => required_text(field, Some(value)).map(Some),
        None => Ok(None),
    }
}
