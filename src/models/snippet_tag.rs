use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::snippet_tags,
    belongs_to(super::snippet::Snippet, foreign_key = snippet_id),
    belongs_to(super::tag::Tag, foreign_key = tag_id)
)]
pub struct SnippetTag {
    pub id: i32,
    pub snippet_id: i32,
    pub tag_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::snippet_tags)]
pub struct NewSnippetTag {
    pub snippet_id: i32,
    pub tag_id: i32,
}
