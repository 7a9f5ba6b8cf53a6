use chrono::Utc;

use snipbox::domain::snippet::{NewSnippet, SnippetListQuery, UpdateSnippet};
use snipbox::domain::tag::NewTag;
use snipbox::repository::errors::RepositoryError;
use snipbox::repository::{
    DieselRepository, SnippetReader, SnippetWriter, TagReader, TagWriter,
};

mod common;

fn new_snippet(user_id: &str, title: &str, tags: &[&str]) -> NewSnippet {
    NewSnippet {
        title: title.to_string(),
        note: "note".to_string(),
        user_id: user_id.to_string(),
        tags: tags.iter().copied().map(NewTag::new).collect(),
    }
}

#[test]
fn test_resolve_tags_dedupes_and_reuses() {
    let test_db = common::TestDb::new("test_resolve_tags_dedupes_and_reuses.db");
    let repo = DieselRepository::new(test_db.pool());

    let resolved = repo
        .resolve_tags(&[
            NewTag::new(" python "),
            NewTag::new("python"),
            NewTag::new("rust"),
        ])
        .unwrap();

    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0].title, "python");
    assert_eq!(resolved[1].title, "rust");

    // A second call reuses the stored rows instead of inserting again.
    let resolved_again = repo.resolve_tags(&[NewTag::new("python")]).unwrap();
    assert_eq!(resolved_again[0].id, resolved[0].id);

    let tags = repo.list_tags().unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].title, "python");
    assert_eq!(tags[1].title, "rust");
}

#[test]
fn test_snippet_repository_crud() {
    let test_db = common::TestDb::new("test_snippet_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_snippet(&new_snippet("alice", "First", &["python", "web"]))
        .unwrap();
    assert_eq!(created.user_id, "alice");
    assert_eq!(created.tags.len(), 2);
    assert_eq!(created.tags[0].title, "python");

    // Ownership filter masks other users' snippets.
    assert!(
        repo.get_snippet_by_id(created.id, "bob")
            .unwrap()
            .is_none()
    );
    let err = repo
        .update_snippet(
            created.id,
            "bob",
            &UpdateSnippet {
                title: Some("intruder".to_string()),
                note: None,
                tags: None,
                updated_at: Utc::now().naive_utc(),
            },
        )
        .expect_err("expected owner-scoped update to fail");
    assert!(matches!(err, RepositoryError::NotFound));
    let err = repo
        .delete_snippet(created.id, "bob")
        .expect_err("expected owner-scoped delete to fail");
    assert!(matches!(err, RepositoryError::NotFound));

    // Absent tags leave links untouched.
    let updated = repo
        .update_snippet(
            created.id,
            "alice",
            &UpdateSnippet {
                title: Some("Renamed".to_string()),
                note: None,
                tags: None,
                updated_at: Utc::now().naive_utc(),
            },
        )
        .unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.note, "note");
    assert_eq!(updated.tags.len(), 2);

    // A supplied tag set replaces the links wholesale.
    let updated = repo
        .update_snippet(
            created.id,
            "alice",
            &UpdateSnippet {
                title: None,
                note: None,
                tags: Some(vec![NewTag::new("rust")]),
                updated_at: Utc::now().naive_utc(),
            },
        )
        .unwrap();
    assert_eq!(updated.tags.len(), 1);
    assert_eq!(updated.tags[0].title, "rust");

    repo.delete_snippet(created.id, "alice").unwrap();
    assert!(
        repo.get_snippet_by_id(created.id, "alice")
            .unwrap()
            .is_none()
    );

    // Tag rows are shared and survive snippet deletion.
    assert_eq!(repo.list_tags().unwrap().len(), 3);
}

#[test]
fn test_list_snippets_orders_newest_first() {
    let test_db = common::TestDb::new("test_list_snippets_orders_newest_first.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_snippet(&new_snippet("alice", "First", &[]))
        .unwrap();
    repo.create_snippet(&new_snippet("alice", "Second", &[]))
        .unwrap();
    repo.create_snippet(&new_snippet("bob", "Other", &[]))
        .unwrap();

    let (total, items) = repo
        .list_snippets(SnippetListQuery::new("alice"))
        .unwrap();

    assert_eq!(total, 2);
    assert_eq!(items[0].title, "Second");
    assert_eq!(items[1].title, "First");
}

#[test]
fn test_list_snippets_filters_by_tag_and_owner() {
    let test_db = common::TestDb::new("test_list_snippets_filters_by_tag_and_owner.db");
    let repo = DieselRepository::new(test_db.pool());

    let tagged = repo
        .create_snippet(&new_snippet("alice", "Tagged", &["python"]))
        .unwrap();
    repo.create_snippet(&new_snippet("alice", "Untagged", &[]))
        .unwrap();
    repo.create_snippet(&new_snippet("bob", "Other", &["python"]))
        .unwrap();

    let tag_id = tagged.tags[0].id;
    let (total, items) = repo
        .list_snippets(SnippetListQuery::new("alice").tag(tag_id))
        .unwrap();

    assert_eq!(total, 1);
    assert_eq!(items[0].id, tagged.id);
}

#[test]
fn test_create_snippet_shares_existing_tags() {
    let test_db = common::TestDb::new("test_create_snippet_shares_existing_tags.db");
    let repo = DieselRepository::new(test_db.pool());

    let first = repo
        .create_snippet(&new_snippet("alice", "One", &["python"]))
        .unwrap();
    let second = repo
        .create_snippet(&new_snippet("bob", "Two", &[" python "]))
        .unwrap();

    assert_eq!(first.tags[0].id, second.tags[0].id);
    assert_eq!(repo.list_tags().unwrap().len(), 1);
}
