use serde::Serialize;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::snippet::SnippetListQuery;
use crate::domain::tag::Tag;
use crate::repository::{SnippetReader, TagReader};
use crate::services::snippets::SnippetListItem;
use crate::services::{ServiceError, ServiceResult};

/// Response body of the tag detail endpoint: the tag plus the caller's
/// snippets referencing it.
#[derive(Debug, Serialize)]
pub struct TagDetail {
    pub tag: Tag,
    pub total_snippets: usize,
    pub snippets: Vec<SnippetListItem>,
}

/// Fetches every tag in the system, ordered by title ascending.
///
/// Tags are shared labels, so the listing is not scoped to the caller.
pub fn list_tags<R>(repo: &R) -> ServiceResult<Vec<Tag>>
where
    R: TagReader + ?Sized,
{
    Ok(repo.list_tags()?)
}

/// Fetches one tag and the authenticated user's snippets referencing it.
pub fn get_tag<R>(repo: &R, user: &AuthenticatedUser, tag_id: i32) -> ServiceResult<TagDetail>
where
    R: TagReader + SnippetReader + ?Sized,
{
    let tag = repo.get_tag_by_id(tag_id)?.ok_or(ServiceError::NotFound)?;

    let (total, snippets) =
        repo.list_snippets(SnippetListQuery::new(user.sub.as_str()).tag(tag.id))?;

    Ok(TagDetail {
        tag,
        total_snippets: total,
        snippets: snippets.iter().map(SnippetListItem::from).collect(),
    })
}
