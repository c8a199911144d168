use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, Post, PostListing, SortKey};
use crate::error::RepoError;

/// Post repository - the single collection of post documents.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in `sort` order together with per-author counts, computed
    /// over one snapshot.
    async fn list(&self, sort: SortKey) -> Result<PostListing, RepoError>;

    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Insert a freshly created post.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Atomically append a comment to a post's comment sequence.
    /// Returns `RepoError::NotFound` when no post has `post_id`.
    async fn push_comment(&self, post_id: Uuid, comment: Comment) -> Result<(), RepoError>;
}
