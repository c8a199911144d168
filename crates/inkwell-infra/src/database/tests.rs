use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{FixedOffset, TimeZone, Utc};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
use serde_json::json;
use uuid::Uuid;

use inkwell_core::domain::{Comment, NewComment, NewPost, Post, SortKey};
use inkwell_core::error::RepoError;
use inkwell_core::ports::PostRepository;

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn at(hour: u32) -> sea_orm::prelude::DateTimeWithTimeZone {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 5, 1, hour, 0, 0)
        .unwrap()
}

fn listing_row(title: &str, author: &str, hour: u32, count: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([
        ("id", Value::from(Uuid::new_v4())),
        ("title", Value::from(title.to_string())),
        ("content", Value::from("body".to_string())),
        ("author", Value::from(author.to_string())),
        ("created_at", Value::from(at(hour))),
        ("comments", Value::from(json!([]))),
        ("author_post_count", Value::from(count)),
    ])
}

fn executed(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let post_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post::Model {
            id: post_id,
            title: "Test Post".to_owned(),
            content: "Content".to_owned(),
            author: "Bob".to_owned(),
            created_at: at(10),
            comments: json!([
                {"username": "Sue", "text": "Nice post", "created_at": "2024-05-01T10:05:00Z"},
                {"username": "Tom", "text": "Agreed", "created_at": "2024-05-01T10:07:00Z"}
            ]),
        }]])
        .into_connection();

    let repo = PostgresPostRepository::new(Arc::new(db));

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.id, post_id);
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.author, "Bob");
    assert_eq!(post.created_at, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
    assert_eq!(post.comments.len(), 2);
    assert_eq!(post.comments[0].username, "Sue");
    assert_eq!(post.comments[1].text, "Agreed");
}

#[tokio::test]
async fn test_find_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(Arc::new(db));
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_malformed_comment_array_is_a_decode_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post::Model {
            id: Uuid::new_v4(),
            title: "Drifted".to_owned(),
            content: "Content".to_owned(),
            author: "Bob".to_owned(),
            created_at: at(10),
            comments: json!({"not": "an array"}),
        }]])
        .into_connection();

    let repo = PostgresPostRepository::new(Arc::new(db));
    let err = repo.find_by_id(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, RepoError::Decode(_)));
}

#[tokio::test]
async fn test_list_reads_posts_and_counts_in_one_statement() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            listing_row("Apple", "Al", 11, 1),
            listing_row("Second", "Bob", 12, 2),
            listing_row("Zebra", "Bob", 10, 2),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(Arc::new(db));
    let listing = repo.list(SortKey::TitleAsc).await.unwrap();

    let titles: Vec<&str> = listing.posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Apple", "Second", "Zebra"]);
    assert_eq!(listing.sort, SortKey::TitleAsc);
    assert_eq!(listing.author_count("Bob"), 2);
    assert_eq!(listing.author_count("Al"), 1);
    assert_eq!(
        listing.author_counts.values().sum::<u64>(),
        listing.posts.len() as u64
    );

    let log = repo.into_connection().into_transaction_log();
    assert_eq!(log.len(), 1);
    let sql = &log[0].statements()[0].sql;
    assert!(sql.contains(r#"COUNT(*) OVER (PARTITION BY "author")"#));
    assert!(sql.contains(r#"ORDER BY "posts"."title" ASC, "posts"."id" ASC"#));
}

#[tokio::test]
async fn test_list_date_desc_orders_by_created_at() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<BTreeMap<&'static str, Value>>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(Arc::new(db));
    let listing = repo.list(SortKey::DateDesc).await.unwrap();
    assert!(listing.posts.is_empty());
    assert!(listing.author_counts.is_empty());

    let log = repo.into_connection().into_transaction_log();
    let sql = &log[0].statements()[0].sql;
    assert!(sql.contains(r#"ORDER BY "posts"."created_at" DESC"#));
}

#[tokio::test]
async fn test_insert_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![executed(1)])
        .into_connection();

    let repo = PostgresPostRepository::new(Arc::new(db));
    let post = Post::new(NewPost::parse("T", "C", "A").unwrap());
    let saved = repo.insert(post.clone()).await.unwrap();
    assert_eq!(saved, post);

    let log = repo.into_connection().into_transaction_log();
    assert!(log[0].statements()[0].sql.starts_with(r#"INSERT INTO "posts""#));
}

#[tokio::test]
async fn test_push_comment_is_a_single_atomic_update() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![executed(1)])
        .into_connection();

    let repo = PostgresPostRepository::new(Arc::new(db));
    let post_id = Uuid::new_v4();
    let comment = Comment::new(NewComment::parse("Sue", "Nice post").unwrap());
    repo.push_comment(post_id, comment).await.unwrap();

    let log = repo.into_connection().into_transaction_log();
    assert_eq!(log.len(), 1);
    let statement = &log[0].statements()[0];
    assert_eq!(
        statement.sql,
        r#"UPDATE "posts" SET "comments" = "comments" || jsonb_build_array(CAST($1 AS jsonb)) WHERE "posts"."id" = $2"#
    );

    let values = &statement.values.as_ref().unwrap().0;
    assert_eq!(values.len(), 2);
    assert_eq!(values[1], Value::from(post_id));
}

#[tokio::test]
async fn test_push_comment_to_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![executed(0)])
        .into_connection();

    let repo = PostgresPostRepository::new(Arc::new(db));
    let comment = Comment::new(NewComment::parse("Sue", "Hello").unwrap());
    let err = repo.push_comment(Uuid::new_v4(), comment).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}
