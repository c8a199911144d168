//! In-memory post repository - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use inkwell_core::domain::{Comment, Post, PostListing, SortKey};
use inkwell_core::error::RepoError;
use inkwell_core::ports::PostRepository;

/// In-memory post collection guarded by an async RwLock.
///
/// Posts are kept in insertion order, which is also the tie-break order for
/// listings. Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self, sort: SortKey) -> Result<PostListing, RepoError> {
        // Posts and counts come from one read guard, so they agree.
        let mut posts = self.posts.read().await.clone();
        posts.sort_by(|a, b| sort.compare(a, b));

        Ok(PostListing::from_ordered(sort, posts))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|post| post.id == id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        Ok(post)
    }

    async fn push_comment(&self, post_id: Uuid, comment: Comment) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|post| post.id == post_id)
            .ok_or(RepoError::NotFound)?;

        post.comments.push(comment);
        Ok(())
    }
}
