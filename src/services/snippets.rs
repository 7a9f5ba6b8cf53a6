use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::snippet::{Snippet, SnippetListQuery};
use crate::domain::tag::Tag;
use crate::forms::snippets::SnippetWriteForm;
use crate::repository::{SnippetReader, SnippetWriter};
use crate::services::{ServiceError, ServiceResult};

/// Lightweight representation used by list-shaped responses.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SnippetListItem {
    pub id: i32,
    pub title: String,
    /// Path of the detail resource for this snippet.
    pub url: String,
}

impl From<&Snippet> for SnippetListItem {
    fn from(snippet: &Snippet) -> Self {
        Self {
            id: snippet.id,
            title: snippet.title.clone(),
            url: format!("/snippets/{}/", snippet.id),
        }
    }
}

/// Response body of the list and delete endpoints.
#[derive(Debug, Serialize)]
pub struct SnippetList {
    pub total: usize,
    pub snippets: Vec<SnippetListItem>,
}

/// Full representation returned by create, detail, and update.
#[derive(Debug, Serialize)]
pub struct SnippetDetail {
    pub id: i32,
    pub title: String,
    pub note: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub tags: Vec<Tag>,
}

impl From<Snippet> for SnippetDetail {
    fn from(snippet: Snippet) -> Self {
        Self {
            id: snippet.id,
            title: snippet.title,
            note: snippet.note,
            created_at: snippet.created_at,
            updated_at: snippet.updated_at,
            tags: snippet.tags,
        }
    }
}

/// Fetches all snippets owned by the authenticated user, newest first.
pub fn list_snippets<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<SnippetList>
where
    R: SnippetReader + ?Sized,
{
    let (total, snippets) = repo.list_snippets(SnippetListQuery::new(user.sub.as_str()))?;

    Ok(SnippetList {
        total,
        snippets: snippets.iter().map(SnippetListItem::from).collect(),
    })
}

/// Validates the request body and creates a snippet owned by the caller.
pub fn create_snippet<R>(
    repo: &R,
    user: &AuthenticatedUser,
    body: &Value,
) -> ServiceResult<SnippetDetail>
where
    R: SnippetWriter + ?Sized,
{
    let new_snippet = SnippetWriteForm::from_value(body)
        .and_then(|form| form.into_new_snippet(&user.sub))
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let snippet = repo.create_snippet(&new_snippet)?;

    Ok(snippet.into())
}

/// Fetches one snippet under the ownership filter.
pub fn get_snippet<R>(
    repo: &R,
    user: &AuthenticatedUser,
    snippet_id: i32,
) -> ServiceResult<SnippetDetail>
where
    R: SnippetReader + ?Sized,
{
    let snippet = repo
        .get_snippet_by_id(snippet_id, &user.sub)?
        .ok_or(ServiceError::NotFound)?;

    Ok(snippet.into())
}

/// Applies a full or partial update to a snippet under the ownership filter.
pub fn update_snippet<R>(
    repo: &R,
    user: &AuthenticatedUser,
    snippet_id: i32,
    body: &Value,
    partial: bool,
) -> ServiceResult<SnippetDetail>
where
    R: SnippetWriter + ?Sized,
{
    let update = SnippetWriteForm::from_value(body)
        .and_then(|form| form.into_update_snippet(partial, Utc::now().naive_utc()))
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let snippet = repo.update_snippet(snippet_id, &user.sub, &update)?;

    Ok(snippet.into())
}

/// Deletes a snippet under the ownership filter and returns the remaining list.
pub fn remove_snippet<R>(
    repo: &R,
    user: &AuthenticatedUser,
    snippet_id: i32,
) -> ServiceResult<SnippetList>
where
    R: SnippetReader + SnippetWriter + ?Sized,
{
    repo.delete_snippet(snippet_id, &user.sub)?;

    list_snippets(repo, user)
}
