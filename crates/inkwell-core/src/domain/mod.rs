//! Domain entities - the core business objects.

mod listing;
mod post;
mod sort;

pub use listing::PostListing;
pub use post::{Comment, NewComment, NewPost, Post};
pub use sort::{SortDirection, SortField, SortKey};
