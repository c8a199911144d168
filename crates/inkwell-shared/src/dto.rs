//! Data Transfer Objects - form, query and response types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use inkwell_core::domain::{Comment, Post, PostListing};

/// Form submitted to create a post. Missing fields arrive empty and are
/// rejected by validation rather than by the form decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostForm {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Form submitted to comment on a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddCommentForm {
    pub username: String,
    pub comment: String,
}

/// Query string of the listing pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub username: String,
    pub text: String,
    pub created_at: String,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            username: comment.username.clone(),
            text: comment.text.clone(),
            created_at: comment.created_at.to_rfc3339(),
        }
    }
}

/// A post with its comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
    pub comments: Vec<CommentResponse>,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            created_at: post.created_at.to_rfc3339(),
            comments: post.comments.iter().map(CommentResponse::from).collect(),
        }
    }
}

/// Ordered posts plus per-author post counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub sort: String,
    pub posts: Vec<PostResponse>,
    pub author_counts: BTreeMap<String, u64>,
}

impl From<&PostListing> for PostListResponse {
    fn from(listing: &PostListing) -> Self {
        Self {
            sort: listing.sort.as_str().to_string(),
            posts: listing.posts.iter().map(PostResponse::from).collect(),
            author_counts: listing.author_counts.clone(),
        }
    }
}
