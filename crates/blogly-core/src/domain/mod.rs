//! Domain entities - the core business objects.

mod post;
mod tag;
mod user;

pub use post::{NewPost, Post, TITLE_MAX_LEN};
pub use tag::{NewTag, PostTag, Tag};
pub use user::{DEFAULT_IMAGE_URL, NAME_MAX_LEN, NewUser, User};

use crate::error::DomainError;

/// Check a required text field against an optional character bound.
///
/// Whitespace-only input counts as missing. Accepted input is kept verbatim.
pub(crate) fn required_field(
    field: &str,
    value: &str,
    max_len: Option<usize>,
) -> Result<String, DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    if let Some(max) = max_len {
        if value.chars().count() > max {
            return Err(DomainError::Validation(format!(
                "{field} must be at most {max} characters"
            )));
        }
    }
    Ok(value.to_string())
}
