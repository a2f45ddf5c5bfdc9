use serde::{Deserialize, Serialize};

use super::required_field;
use crate::error::DomainError;

/// Placeholder picture shown for users who did not supply one.
pub const DEFAULT_IMAGE_URL: &str = "https://static.boredpanda.com/blog/wp-content/uploads/2017/11/My-most-popular-pic-since-I-started-dog-photography-5a0b39dae9c95__880.jpg";

/// Upper bound for first and last names.
pub const NAME_MAX_LEN: usize = 50;

/// User entity - a person who writes posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl User {
    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Replace the editable fields, validating them the same way as on creation.
    pub fn apply_edit(
        &mut self,
        first_name: &str,
        last_name: &str,
        image_url: Option<&str>,
    ) -> Result<(), DomainError> {
        self.first_name = required_field("first_name", first_name, Some(NAME_MAX_LEN))?;
        self.last_name = required_field("last_name", last_name, Some(NAME_MAX_LEN))?;
        self.image_url = resolve_image_url(image_url);
        Ok(())
    }
}

/// A validated user that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl NewUser {
    pub fn new(
        first_name: &str,
        last_name: &str,
        image_url: Option<&str>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            first_name: required_field("first_name", first_name, Some(NAME_MAX_LEN))?,
            last_name: required_field("last_name", last_name, Some(NAME_MAX_LEN))?,
            image_url: resolve_image_url(image_url),
        })
    }
}

/// Blank or absent URLs fall back to the placeholder.
fn resolve_image_url(image_url: Option<&str>) -> String {
    match image_url {
        Some(url) if !url.trim().is_empty() => url.to_string(),
        _ => DEFAULT_IMAGE_URL.to_string(),
    }
}
