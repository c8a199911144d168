//! Post document entity for SeaORM.
//!
//! Each row is one post document; its comments are embedded as a JSONB array
//! and only ever grow through an in-place append.

use sea_orm::entity::prelude::*;
use sea_orm::{FromQueryResult, Set};

use inkwell_core::domain::{Comment, Post};
use inkwell_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author: String,
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_type = "JsonBinary")]
    pub comments: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Listing row: a post document plus its author's post count, produced by a
/// window function in the same statement that orders the posts.
#[derive(Debug, Clone, FromQueryResult)]
pub struct PostWithAuthorCount {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTimeWithTimeZone,
    pub comments: Json,
    pub author_post_count: i64,
}

/// Decode the embedded comment array into typed comments.
pub(crate) fn decode_comments(id: Uuid, comments: Json) -> Result<Vec<Comment>, RepoError> {
    serde_json::from_value(comments).map_err(|e| {
        tracing::error!(post_id = %id, error = %e, "Malformed comment array");
        RepoError::Decode(format!("comments of post {}: {}", id, e))
    })
}

/// Encode one comment as a document element for the JSONB array.
pub(crate) fn encode_comment(comment: &Comment) -> Result<Json, RepoError> {
    serde_json::to_value(comment).map_err(|e| RepoError::Decode(e.to_string()))
}

impl TryFrom<Model> for Post {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            comments: decode_comments(model.id, model.comments)?,
            id: model.id,
            title: model.title,
            content: model.content,
            author: model.author,
            created_at: model.created_at.into(),
        })
    }
}

impl TryFrom<PostWithAuthorCount> for Post {
    type Error = RepoError;

    fn try_from(row: PostWithAuthorCount) -> Result<Self, Self::Error> {
        Ok(Self {
            comments: decode_comments(row.id, row.comments)?,
            id: row.id,
            title: row.title,
            content: row.content,
            author: row.author,
            created_at: row.created_at.into(),
        })
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl TryFrom<&Post> for ActiveModel {
    type Error = RepoError;

    fn try_from(post: &Post) -> Result<Self, Self::Error> {
        let comments = post
            .comments
            .iter()
            .map(encode_comment)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: Set(post.id),
            title: Set(post.title.clone()),
            content: Set(post.content.clone()),
            author: Set(post.author.clone()),
            created_at: Set(post.created_at.into()),
            comments: Set(Json::Array(comments)),
        })
    }
}
