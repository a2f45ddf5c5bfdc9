use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::required_field;
use crate::error::DomainError;

/// Upper bound for post titles.
pub const TITLE_MAX_LEN: usize = 100;

/// Post entity - a blog post owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i32,
}

impl Post {
    /// Replace title and content. The owner and creation time never change.
    pub fn apply_edit(&mut self, title: &str, content: &str) -> Result<(), DomainError> {
        self.title = required_field("title", title, Some(TITLE_MAX_LEN))?;
        self.content = required_field("content", content, None)?;
        Ok(())
    }
}

/// A validated post that has not been stored yet.
///
/// The creation timestamp is assigned when the row is inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: i32,
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(user_id: i32, title: &str, content: &str) -> Result<Self, DomainError> {
        Ok(Self {
            user_id,
            title: required_field("title", title, Some(TITLE_MAX_LEN))?,
            content: required_field("content", content, None)?,
        })
    }
}
