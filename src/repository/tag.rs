use std::collections::HashSet;

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;

use crate::domain::tag::{NewTag as DomainNewTag, Tag as DomainTag};
use crate::models::tag::{NewTag as DbNewTag, Tag as DbTag};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, TagReader, TagWriter};

impl TagReader for DieselRepository {
    fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<DomainTag>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let tag = tags::table
            .filter(tags::id.eq(id))
            .first::<DbTag>(&mut conn)
            .optional()?;

        Ok(tag.map(DomainTag::from))
    }

    fn list_tags(&self) -> RepositoryResult<Vec<DomainTag>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let db_tags = tags::table
            .order(tags::title.asc())
            .load::<DbTag>(&mut conn)?;

        Ok(db_tags.into_iter().map(DomainTag::from).collect())
    }
}

impl TagWriter for DieselRepository {
    fn resolve_tags(&self, titles: &[DomainNewTag]) -> RepositoryResult<Vec<DomainTag>> {
        let mut conn = self.conn()?;
        resolve_tags_in(&mut conn, titles)
    }
}

/// Get-or-create each distinct title against the unique index on
/// `tags.title`: lookup, on absence insert, on insert conflict re-lookup.
///
/// Runs on a borrowed connection so snippet writes can call it inside
/// their own transaction.
pub(crate) fn resolve_tags_in(
    conn: &mut SqliteConnection,
    titles: &[DomainNewTag],
) -> RepositoryResult<Vec<DomainTag>> {
    use crate::schema::tags;

    let mut seen: HashSet<&str> = HashSet::new();
    let mut resolved = Vec::with_capacity(titles.len());

    for new_tag in titles {
        if !seen.insert(new_tag.title.as_str()) {
            continue;
        }

        let existing = tags::table
            .filter(tags::title.eq(&new_tag.title))
            .first::<DbTag>(conn)
            .optional()?;

        let tag = match existing {
            Some(tag) => tag,
            None => {
                let insertable = DbNewTag::from(new_tag);
                match diesel::insert_into(tags::table)
                    .values(&insertable)
                    .get_result::<DbTag>(conn)
                {
                    Ok(tag) => tag,
                    // Lost the race to a concurrent insert; the row exists now.
                    Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                        tags::table
                            .filter(tags::title.eq(&new_tag.title))
                            .first::<DbTag>(conn)?
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        };

        resolved.push(tag.into());
    }

    Ok(resolved)
}
