//! Query layer over the post collection.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Comment, NewComment, NewPost, Post, PostListing, SortKey};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

/// Reads and writes posts through an injected repository.
///
/// Input validation happens here, before any storage call, so a rejected
/// submission never leaves a partial post or comment behind.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// All posts in `sort` order plus per-author post counts.
    pub async fn list_posts(&self, sort: SortKey) -> Result<PostListing, DomainError> {
        self.repo.list(sort).await.map_err(storage_error)
    }

    /// Fetch one post. Malformed and unknown ids are both not-found.
    pub async fn get_post(&self, id: &str) -> Result<Post, DomainError> {
        let post_id = parse_post_id(id)?;

        self.repo
            .find_by_id(post_id)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Create a post and return its id.
    pub async fn create_post(
        &self,
        title: &str,
        content: &str,
        author: &str,
    ) -> Result<Uuid, DomainError> {
        let draft = NewPost::parse(title, content, author)?;
        let post = self
            .repo
            .insert(Post::new(draft))
            .await
            .map_err(storage_error)?;

        tracing::info!(post_id = %post.id, author = %post.author, "Post created");
        Ok(post.id)
    }

    /// Append a comment to an existing post and return the post's
    /// canonical id.
    pub async fn add_comment(
        &self,
        post_id: &str,
        username: &str,
        text: &str,
    ) -> Result<Uuid, DomainError> {
        let draft = NewComment::parse(username, text)?;
        let id = parse_post_id(post_id)?;

        match self.repo.push_comment(id, Comment::new(draft)).await {
            Ok(()) => {
                tracing::info!(post_id = %id, "Comment added");
                Ok(id)
            }
            Err(RepoError::NotFound) => Err(DomainError::post_not_found(post_id)),
            Err(e) => Err(storage_error(e)),
        }
    }
}

fn parse_post_id(id: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(id.trim()).map_err(|_| {
        tracing::debug!(post_id = %id, "Malformed post id");
        DomainError::post_not_found(id)
    })
}

fn storage_error(err: RepoError) -> DomainError {
    match err {
        RepoError::NotFound => DomainError::Storage("record vanished during update".to_string()),
        other => {
            tracing::error!(error = %other, "Post storage failure");
            DomainError::Storage(other.to_string())
        }
    }
}
