//! Data Transfer Objects - form bodies in, view models out.

use blogly_core::domain::{DEFAULT_IMAGE_URL, Post, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display format for post timestamps, e.g. `Tue, Mar 05, 2024 02:07 PM`.
pub const POST_DATE_FORMAT: &str = "%a, %b %d, %Y %I:%M %p";

/// Body of the new-user and edit-user forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Body of the new-post and edit-post forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub content: String,
}

/// A user as the templates see it.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub image_url: String,
    /// The URL the user chose, or `None` while the placeholder is shown.
    pub custom_image_url: Option<String>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            full_name: user.full_name(),
            image_url: user.image_url.clone(),
            custom_image_url: (user.image_url != DEFAULT_IMAGE_URL)
                .then(|| user.image_url.clone()),
        }
    }
}

/// A post as the templates see it.
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub user_id: i32,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            created_at: format_post_date(&post.created_at),
            user_id: post.user_id,
        }
    }
}

pub fn format_post_date(at: &DateTime<Utc>) -> String {
    at.format(POST_DATE_FORMAT).to_string()
}
