use crate::db::{DbConnection, DbPool};
use crate::domain::snippet::{NewSnippet, Snippet, SnippetListQuery, UpdateSnippet};
use crate::domain::tag::{NewTag, Tag};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod snippet;
pub mod tag;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over tag records.
pub trait TagReader {
    fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<Tag>>;
    /// All tags in the system, ordered by title ascending.
    fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
}

/// Write operations over tag records.
pub trait TagWriter {
    /// Resolve requested titles into existing-or-newly-created tags.
    ///
    /// Duplicate titles collapse to one entity; concurrent calls for the
    /// same title are arbitrated by the unique index on the title column.
    fn resolve_tags(&self, titles: &[NewTag]) -> RepositoryResult<Vec<Tag>>;
}

/// Read-only operations over snippet records, always scoped to an owner.
pub trait SnippetReader {
    fn get_snippet_by_id(&self, id: i32, user_id: &str) -> RepositoryResult<Option<Snippet>>;
    fn list_snippets(&self, query: SnippetListQuery) -> RepositoryResult<(usize, Vec<Snippet>)>;
}

/// Write operations over snippet records, always scoped to an owner.
pub trait SnippetWriter {
    fn create_snippet(&self, new_snippet: &NewSnippet) -> RepositoryResult<Snippet>;
    fn update_snippet(
        &self,
        snippet_id: i32,
        user_id: &str,
        updates: &UpdateSnippet,
    ) -> RepositoryResult<Snippet>;
    fn delete_snippet(&self, snippet_id: i32, user_id: &str) -> RepositoryResult<()>;
}
