//! HTTP handlers and route configuration.

mod posts;
mod users;

#[cfg(test)]
mod tests;

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, web};
use serde::Serialize;

use blogly_core::DomainError;
use blogly_core::domain::{Post, User};
use blogly_core::ports::BaseRepository;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::templates;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(users::root))
        .service(
            web::scope("/users")
                .route("", web::get().to(users::list_users))
                .route("/new", web::get().to(users::new_user_form))
                .route("/new", web::post().to(users::create_user))
                .route("/{id}", web::get().to(users::show_user))
                .route("/{id}/edit", web::get().to(users::edit_user_form))
                .route("/{id}/edit", web::post().to(users::update_user))
                .route("/{id}/delete", web::post().to(users::delete_user))
                .route("/{id}/posts/new", web::get().to(posts::new_post_form))
                .route("/{id}/posts/new", web::post().to(posts::create_post)),
        )
        .service(
            web::scope("/posts")
                .route("/{id}", web::get().to(posts::show_post))
                .route("/{id}/edit", web::get().to(posts::edit_post_form))
                .route("/{id}/edit", web::post().to(posts::update_post))
                .route("/{id}/delete", web::post().to(posts::delete_post)),
        );
}

/// 302 to another page of the site.
fn redirect(location: impl Into<String>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.into()))
        .finish()
}

/// Render a template into a 200 HTML response.
fn page<S: Serialize>(template: &str, ctx: S) -> AppResult<HttpResponse> {
    let body = templates::render(template, ctx)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

async fn find_user(state: &AppState, id: i32) -> AppResult<User> {
    state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::from(DomainError::user_not_found(id)))
}

async fn find_post(state: &AppState, id: i32) -> AppResult<Post> {
    state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::from(DomainError::post_not_found(id)))
}
