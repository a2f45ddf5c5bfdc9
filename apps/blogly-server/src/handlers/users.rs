//! User pages.

use actix_web::{HttpResponse, web};
use minijinja::context;

use blogly_core::domain::NewUser;
use blogly_core::ports::{BaseRepository, PostRepository, UserRepository};
use blogly_shared::dto::{PostView, UserForm, UserView};

use super::{find_user, page, redirect};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /
pub async fn root() -> HttpResponse {
    redirect("/users")
}

/// GET /users
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users: Vec<UserView> = state
        .users
        .list_ordered()
        .await?
        .iter()
        .map(UserView::from)
        .collect();

    page("users/index.html", context! { users })
}

/// GET /users/new
pub async fn new_user_form() -> AppResult<HttpResponse> {
    page("users/new.html", context! {})
}

/// POST /users/new
pub async fn create_user(
    state: web::Data<AppState>,
    form: web::Form<UserForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    let draft = NewUser::new(&form.first_name, &form.last_name, form.image_url.as_deref())?;

    let user = state.users.create(draft).await?;
    tracing::info!(user_id = user.id, "User created");

    Ok(redirect("/users"))
}

/// GET /users/{id}
pub async fn show_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = find_user(&state, path.into_inner()).await?;
    let posts: Vec<PostView> = state
        .posts
        .find_by_user_id(user.id)
        .await?
        .iter()
        .map(PostView::from)
        .collect();

    page(
        "users/detail.html",
        context! { user => UserView::from(&user), posts },
    )
}

/// GET /users/{id}/edit
pub async fn edit_user_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = find_user(&state, path.into_inner()).await?;

    page("users/edit.html", context! { user => UserView::from(&user) })
}

/// POST /users/{id}/edit
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: web::Form<UserForm>,
) -> AppResult<HttpResponse> {
    let mut user = find_user(&state, path.into_inner()).await?;
    let form = form.into_inner();

    user.apply_edit(&form.first_name, &form.last_name, form.image_url.as_deref())?;
    state.users.update(user).await?;

    Ok(redirect("/users"))
}

/// POST /users/{id}/delete
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = find_user(&state, path.into_inner()).await?;

    state.users.delete_with_posts(user.id).await?;
    tracing::info!(user_id = user.id, "User deleted");

    Ok(redirect("/users"))
}
