use std::collections::BTreeMap;

use super::{Post, SortKey};

/// Result of a listing query: ordered posts plus per-author post counts,
/// both taken from the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct PostListing {
    pub sort: SortKey,
    pub posts: Vec<Post>,
    pub author_counts: BTreeMap<String, u64>,
}

impl PostListing {
    /// Build a listing from a snapshot that is already in order, counting
    /// authors over exactly those posts.
    pub fn from_ordered(sort: SortKey, posts: Vec<Post>) -> Self {
        let mut author_counts = BTreeMap::new();
        for post in &posts {
            *author_counts.entry(post.author.clone()).or_insert(0) += 1;
        }

        Self {
            sort,
            posts,
            author_counts,
        }
    }

    /// Number of posts by `author`, zero when unknown.
    pub fn author_count(&self, author: &str) -> u64 {
        self.author_counts.get(author).copied().unwrap_or(0)
    }
}
