//! PostgreSQL post repository.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DbConn, DbErr, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use inkwell_core::domain::{Comment, Post, PostListing, SortDirection, SortField, SortKey};
use inkwell_core::error::RepoError;
use inkwell_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity, PostWithAuthorCount, encode_comment};

/// Per-row author count, evaluated over the same rows the statement orders.
const AUTHOR_COUNT_WINDOW: &str = r#"COUNT(*) OVER (PARTITION BY "author")"#;

/// In-place append to the embedded comment array. A single UPDATE takes the
/// row lock, so concurrent appends to one post serialize instead of racing.
const APPEND_COMMENT: &str = r#""comments" || jsonb_build_array(CAST($1 AS jsonb))"#;

/// PostgreSQL post repository over the `posts` document table.
pub struct PostgresPostRepository {
    db: Arc<DbConn>,
}

impl PostgresPostRepository {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self { db }
    }

    /// Hand the connection back, e.g. to read a mock transaction log.
    #[cfg(test)]
    pub(crate) fn into_connection(self) -> DbConn {
        match Arc::try_unwrap(self.db) {
            Ok(db) => db,
            Err(_) => panic!("connection still shared"),
        }
    }
}

fn sort_column(field: SortField) -> post::Column {
    match field {
        SortField::CreatedAt => post::Column::CreatedAt,
        SortField::Title => post::Column::Title,
        SortField::Author => post::Column::Author,
    }
}

fn sort_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Ascending => Order::Asc,
        SortDirection::Descending => Order::Desc,
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self, sort: SortKey) -> Result<PostListing, RepoError> {
        tracing::debug!(sort = %sort, "Listing posts");

        let rows = PostEntity::find()
            .column_as(Expr::cust(AUTHOR_COUNT_WINDOW), "author_post_count")
            .order_by(sort_column(sort.field()), sort_order(sort.direction()))
            .order_by_asc(post::Column::Id)
            .into_model::<PostWithAuthorCount>()
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        let mut author_counts = BTreeMap::new();
        let mut posts = Vec::with_capacity(rows.len());
        for row in rows {
            author_counts.insert(row.author.clone(), row.author_post_count.max(0) as u64);
            posts.push(Post::try_from(row)?);
        }

        Ok(PostListing {
            sort,
            posts,
            author_counts,
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = %id, "Finding post by id");

        PostEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?
            .map(Post::try_from)
            .transpose()
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let model = post::ActiveModel::try_from(&post)?;

        PostEntity::insert(model)
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(post)
    }

    async fn push_comment(&self, post_id: Uuid, comment: Comment) -> Result<(), RepoError> {
        let element = encode_comment(&comment)?;

        let result = PostEntity::update_many()
            .col_expr(
                post::Column::Comments,
                Expr::cust_with_values(APPEND_COMMENT, [element]),
            )
            .filter(post::Column::Id.eq(post_id))
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = %post_id, "Comment appended");
        Ok(())
    }
}
