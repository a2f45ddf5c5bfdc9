use serde::{Deserialize, Serialize};

use super::required_field;
use crate::error::DomainError;

/// Tag entity - a unique label that can be attached to many posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

/// A validated tag that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub name: String,
}

impl NewTag {
    pub fn new(name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            name: required_field("name", name, None)?,
        })
    }
}

/// Association between a post and a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostTag {
    pub post_id: i32,
    pub tag_id: i32,
}
