//! Post pages.

use actix_web::{HttpResponse, web};
use minijinja::context;

use blogly_core::domain::NewPost;
use blogly_core::ports::{BaseRepository, PostRepository};
use blogly_shared::dto::{PostForm, PostView, UserView};

use super::{find_post, find_user, page, redirect};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /users/{id}/posts/new
pub async fn new_post_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = find_user(&state, path.into_inner()).await?;

    page("posts/new.html", context! { user => UserView::from(&user) })
}

/// POST /users/{id}/posts/new
pub async fn create_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let user = find_user(&state, path.into_inner()).await?;
    let form = form.into_inner();

    let post = state
        .posts
        .create(NewPost::new(user.id, &form.title, &form.content)?)
        .await?;
    tracing::info!(post_id = post.id, user_id = user.id, "Post created");

    Ok(redirect(format!("/users/{}", user.id)))
}

/// GET /posts/{id}
pub async fn show_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;
    let author = find_user(&state, post.user_id).await?;

    page(
        "posts/detail.html",
        context! { post => PostView::from(&post), user => UserView::from(&author) },
    )
}

/// GET /posts/{id}/edit
pub async fn edit_post_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    page("posts/edit.html", context! { post => PostView::from(&post) })
}

/// POST /posts/{id}/edit
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let mut post = find_post(&state, path.into_inner()).await?;
    let form = form.into_inner();

    post.apply_edit(&form.title, &form.content)?;
    let post = state.posts.update(post).await?;

    Ok(redirect(format!("/posts/{}", post.id)))
}

/// POST /posts/{id}/delete
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    state.posts.delete(post.id).await?;
    tracing::info!(post_id = post.id, "Post deleted");

    Ok(redirect(format!("/users/{}", post.user_id)))
}
