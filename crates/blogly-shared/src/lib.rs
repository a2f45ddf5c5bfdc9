//! # Blogly Shared
//!
//! Types that cross the HTTP boundary: typed form bodies, the view models the
//! templates render, and the error payload.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
