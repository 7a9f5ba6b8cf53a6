use mockall::mock;

use super::{SnippetReader, SnippetWriter, TagReader, TagWriter};
use crate::domain::{
    snippet::{NewSnippet, Snippet, SnippetListQuery, UpdateSnippet},
    tag::{NewTag, Tag},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub TagReader {}

    impl TagReader for TagReader {
        fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<Tag>>;
        fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
    }
}

mock! {
    pub TagWriter {}

    impl TagWriter for TagWriter {
        fn resolve_tags(&self, titles: &[NewTag]) -> RepositoryResult<Vec<Tag>>;
    }
}

mock! {
    pub SnippetReader {}

    impl SnippetReader for SnippetReader {
        fn get_snippet_by_id(&self, id: i32, user_id: &str) -> RepositoryResult<Option<Snippet>>;
        fn list_snippets(&self, query: SnippetListQuery) -> RepositoryResult<(usize, Vec<Snippet>)>;
    }
}

mock! {
    pub SnippetWriter {}

    impl SnippetWriter for SnippetWriter {
        fn create_snippet(&self, new_snippet: &NewSnippet) -> RepositoryResult<Snippet>;
        fn update_snippet(&self, snippet_id: i32, user_id: &str, updates: &UpdateSnippet) -> RepositoryResult<Snippet>;
        fn delete_snippet(&self, snippet_id: i32, user_id: &str) -> RepositoryResult<()>;
    }
}

// Combined stores for services that read and write in one call.
mock! {
    pub SnippetStore {}

    impl SnippetReader for SnippetStore {
        fn get_snippet_by_id(&self, id: i32, user_id: &str) -> RepositoryResult<Option<Snippet>>;
        fn list_snippets(&self, query: SnippetListQuery) -> RepositoryResult<(usize, Vec<Snippet>)>;
    }

    impl SnippetWriter for SnippetStore {
        fn create_snippet(&self, new_snippet: &NewSnippet) -> RepositoryResult<Snippet>;
        fn update_snippet(&self, snippet_id: i32, user_id: &str, updates: &UpdateSnippet) -> RepositoryResult<Snippet>;
        fn delete_snippet(&self, snippet_id: i32, user_id: &str) -> RepositoryResult<()>;
    }
}

mock! {
    pub TagStore {}

    impl TagReader for TagStore {
        fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<Tag>>;
        fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
    }

    impl SnippetReader for TagStore {
        fn get_snippet_by_id(&self, id: i32, user_id: &str) -> RepositoryResult<Option<Snippet>>;
        fn list_snippets(&self, query: SnippetListQuery) -> RepositoryResult<(usize, Vec<Snippet>)>;
    }
}
