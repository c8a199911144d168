//! Listing order for posts.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Post;

/// Field a listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Title,
    Author,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One of the five supported (field, direction) pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
    AuthorAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::DateDesc,
        SortKey::DateAsc,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::AuthorAsc,
    ];

    /// Resolve a query parameter. Unknown or absent values mean `date_desc`.
    pub fn from_param(param: Option<&str>) -> Self {
        param
            .and_then(|value| Self::ALL.into_iter().find(|key| key.as_str() == value))
            .unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::DateDesc => "date_desc",
            SortKey::DateAsc => "date_asc",
            SortKey::TitleAsc => "title_asc",
            SortKey::TitleDesc => "title_desc",
            SortKey::AuthorAsc => "author_asc",
        }
    }

    /// Human readable label for sort pickers.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::DateDesc => "Newest First",
            SortKey::DateAsc => "Oldest First",
            SortKey::TitleAsc => "Title (A-Z)",
            SortKey::TitleDesc => "Title (Z-A)",
            SortKey::AuthorAsc => "Author (A-Z)",
        }
    }

    pub fn field(self) -> SortField {
        match self {
            SortKey::DateDesc | SortKey::DateAsc => SortField::CreatedAt,
            SortKey::TitleAsc | SortKey::TitleDesc => SortField::Title,
            SortKey::AuthorAsc => SortField::Author,
        }
    }

    pub fn direction(self) -> SortDirection {
        match self {
            SortKey::DateAsc | SortKey::TitleAsc | SortKey::AuthorAsc => SortDirection::Ascending,
            SortKey::DateDesc | SortKey::TitleDesc => SortDirection::Descending,
        }
    }

    /// Compare two posts by this key. Ties compare equal so a stable sort
    /// keeps their existing order.
    pub fn compare(self, a: &Post, b: &Post) -> Ordering {
        let ordering = match self.field() {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Author => a.author.cmp(&b.author),
        };

        match self.direction() {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
