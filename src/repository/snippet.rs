use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::snippet::{
    NewSnippet as DomainNewSnippet, Snippet as DomainSnippet, SnippetListQuery,
    UpdateSnippet as DomainUpdateSnippet,
};
use crate::domain::tag::{NewTag as DomainNewTag, Tag as DomainTag};
use crate::models::snippet::{
    NewSnippet as DbNewSnippet, Snippet as DbSnippet, UpdateSnippet as DbUpdateSnippet,
};
use crate::models::snippet_tag::NewSnippetTag;
use crate::models::tag::Tag as DbTag;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::tag::resolve_tags_in;
use crate::repository::{DieselRepository, SnippetReader, SnippetWriter};

impl SnippetReader for DieselRepository {
    fn get_snippet_by_id(&self, id: i32, user_id: &str) -> RepositoryResult<Option<DomainSnippet>> {
        use crate::schema::snippets;

        let mut conn = self.conn()?;
        let snippet = snippets::table
            .filter(snippets::id.eq(id))
            .filter(snippets::user_id.eq(user_id))
            .first::<DbSnippet>(&mut conn)
            .optional()?;

        if let Some(db_snippet) = snippet {
            let mut domain: DomainSnippet = db_snippet.into();
            let mut tag_map = load_tags_for_snippets(&mut conn, &[domain.id])?;
            domain.tags = tag_map.remove(&domain.id).unwrap_or_default();
            Ok(Some(domain))
        } else {
            Ok(None)
        }
    }

    fn list_snippets(
        &self,
        query: SnippetListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainSnippet>)> {
        use crate::schema::{snippet_tags, snippets};

        let mut conn = self.conn()?;

        let mut count_query = snippets::table
            .filter(snippets::user_id.eq(&query.user_id))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(tag_id) = query.tag_id {
            let tagged = snippet_tags::table
                .filter(snippet_tags::tag_id.eq(tag_id))
                .select(snippet_tags::snippet_id);
            count_query = count_query.filter(snippets::id.eq_any(tagged));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items_query = snippets::table
            .filter(snippets::user_id.eq(&query.user_id))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(tag_id) = query.tag_id {
            let tagged = snippet_tags::table
                .filter(snippet_tags::tag_id.eq(tag_id))
                .select(snippet_tags::snippet_id);
            items_query = items_query.filter(snippets::id.eq_any(tagged));
        }

        // Most-recently-created first; id breaks same-second ties.
        items_query = items_query.order((snippets::created_at.desc(), snippets::id.desc()));

        let db_snippets = items_query.load::<DbSnippet>(&mut conn)?;

        if db_snippets.is_empty() {
            return Ok((total, Vec::new()));
        }

        let snippet_ids: Vec<i32> = db_snippets.iter().map(|snippet| snippet.id).collect();
        let mut tag_map = load_tags_for_snippets(&mut conn, &snippet_ids)?;

        let mut domain_snippets = Vec::with_capacity(db_snippets.len());
        for db_snippet in db_snippets {
            let mut domain: DomainSnippet = db_snippet.into();
            domain.tags = tag_map.remove(&domain.id).unwrap_or_default();
            domain_snippets.push(domain);
        }

        Ok((total, domain_snippets))
    }
}

impl SnippetWriter for DieselRepository {
    fn create_snippet(&self, new_snippet: &DomainNewSnippet) -> RepositoryResult<DomainSnippet> {
        use crate::schema::snippets;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let db_new = DbNewSnippet::from(new_snippet);
            let created = diesel::insert_into(snippets::table)
                .values(&db_new)
                .get_result::<DbSnippet>(conn)?;

            let mut domain: DomainSnippet = created.into();
            replace_snippet_tags(conn, domain.id, &new_snippet.tags)?;

            let mut tag_map = load_tags_for_snippets(conn, &[domain.id])?;
            domain.tags = tag_map.remove(&domain.id).unwrap_or_default();

            Ok(domain)
        })
    }

    fn update_snippet(
        &self,
        snippet_id: i32,
        user_id: &str,
        updates: &DomainUpdateSnippet,
    ) -> RepositoryResult<DomainSnippet> {
        use crate::schema::snippets;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let db_updates = DbUpdateSnippet::from(updates);

            let target = snippets::table
                .filter(snippets::id.eq(snippet_id))
                .filter(snippets::user_id.eq(user_id));

            let updated = diesel::update(target)
                .set(&db_updates)
                .get_result::<DbSnippet>(conn)?;

            let mut domain: DomainSnippet = updated.into();

            // Wholesale replacement; an absent tags field leaves links untouched.
            if let Some(titles) = updates.tags.as_ref() {
                replace_snippet_tags(conn, domain.id, titles)?;
            }

            let mut tag_map = load_tags_for_snippets(conn, &[domain.id])?;
            domain.tags = tag_map.remove(&domain.id).unwrap_or_default();

            Ok(domain)
        })
    }

    fn delete_snippet(&self, snippet_id: i32, user_id: &str) -> RepositoryResult<()> {
        use crate::schema::snippets;

        let mut conn = self.conn()?;

        let target = snippets::table
            .filter(snippets::id.eq(snippet_id))
            .filter(snippets::user_id.eq(user_id));

        let deleted = diesel::delete(target).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Drop the snippet's existing tag links and relink it to the resolved tags.
fn replace_snippet_tags(
    conn: &mut SqliteConnection,
    snippet_id: i32,
    titles: &[DomainNewTag],
) -> RepositoryResult<()> {
    use crate::schema::snippet_tags;

    diesel::delete(snippet_tags::table.filter(snippet_tags::snippet_id.eq(snippet_id)))
        .execute(conn)?;

    let tags = resolve_tags_in(conn, titles)?;
    let links: Vec<NewSnippetTag> = tags
        .iter()
        .map(|tag| NewSnippetTag {
            snippet_id,
            tag_id: tag.id,
        })
        .collect();

    diesel::insert_into(snippet_tags::table)
        .values(&links)
        .execute(conn)?;

    Ok(())
}

fn load_tags_for_snippets(
    conn: &mut SqliteConnection,
    snippet_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainTag>>> {
    use crate::schema::{snippet_tags, tags};

    if snippet_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = snippet_tags::table
        .inner_join(tags::table)
        .filter(snippet_tags::snippet_id.eq_any(snippet_ids))
        .order(tags::title.asc())
        .select((snippet_tags::snippet_id, DbTag::as_select()))
        .load::<(i32, DbTag)>(conn)?;

    let mut map: HashMap<i32, Vec<DomainTag>> = HashMap::new();
    for (snippet_id, tag) in rows {
        map.entry(snippet_id).or_default().push(tag.into());
    }

    Ok(map)
}
