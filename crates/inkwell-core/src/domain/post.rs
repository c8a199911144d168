use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Post entity - a blog entry with its comments embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<Comment>,
}

impl Post {
    /// Create a new post with a generated ID, the current time and no comments.
    pub fn new(draft: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            created_at: Utc::now(),
            comments: Vec::new(),
        }
    }
}

/// Comment embedded in a post. Never addressed on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub username: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(draft: NewComment) -> Self {
        Self {
            username: draft.username,
            text: draft.text,
            created_at: Utc::now(),
        }
    }
}

/// Validated input for creating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl NewPost {
    /// Trim and check the submitted fields. Every field is required.
    pub fn parse(title: &str, content: &str, author: &str) -> Result<Self, DomainError> {
        let fields = [("title", title), ("content", content), ("author", author)];
        check_required(&fields)?;

        Ok(Self {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            author: author.trim().to_string(),
        })
    }
}

/// Validated input for appending a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub username: String,
    pub text: String,
}

impl NewComment {
    pub fn parse(username: &str, text: &str) -> Result<Self, DomainError> {
        check_required(&[("username", username), ("comment", text)])?;

        Ok(Self {
            username: username.trim().to_string(),
            text: text.trim().to_string(),
        })
    }
}

fn check_required(fields: &[(&str, &str)]) -> Result<(), DomainError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "required field(s) missing: {}",
            missing.join(", ")
        )))
    }
}
