use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::snippet::{
    NewSnippet as DomainNewSnippet, Snippet as DomainSnippet, UpdateSnippet as DomainUpdateSnippet,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::snippets)]
pub struct Snippet {
    pub id: i32,
    pub title: String,
    pub note: String,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::snippets)]
pub struct NewSnippet<'a> {
    pub title: &'a str,
    pub note: &'a str,
    pub user_id: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::snippets)]
pub struct UpdateSnippet<'a> {
    pub title: Option<&'a str>,
    pub note: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Snippet> for DomainSnippet {
    fn from(value: Snippet) -> Self {
        Self {
            id: value.id,
            title: value.title,
            note: value.note,
            user_id: value.user_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
            tags: Vec::new(),
        }
    }
}

impl<'a> From<&'a DomainNewSnippet> for NewSnippet<'a> {
    fn from(value: &'a DomainNewSnippet) -> Self {
        Self {
            title: value.title.as_str(),
            note: value.note.as_str(),
            user_id: value.user_id.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateSnippet> for UpdateSnippet<'a> {
    fn from(value: &'a DomainUpdateSnippet) -> Self {
        Self {
            title: value.title.as_deref(),
            note: value.note.as_deref(),
            updated_at: value.updated_at,
        }
    }
}
