use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};

use blogly_core::domain::{DEFAULT_IMAGE_URL, NewPost, NewUser, Post, User};
use blogly_core::ports::{BaseRepository, PostRepository, UserRepository};
use blogly_infra::DatabaseConfig;
use blogly_shared::dto::format_post_date;

use super::configure_routes;
use crate::state::AppState;

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(configure_routes),
        )
        .await
    };
}

/// Fresh in-memory store with one user who has one post.
async fn seeded() -> (AppState, User, Post) {
    let state = AppState::new(&DatabaseConfig::in_memory()).await.unwrap();

    let user = state
        .users
        .create(NewUser::new("test_first", "test_last", None).unwrap())
        .await
        .unwrap();
    state
        .users
        .create(NewUser::new("Grace", "Hopper", None).unwrap())
        .await
        .unwrap();
    let post = state
        .posts
        .create(NewPost::new(user.id, "test_title", "test_content").unwrap())
        .await
        .unwrap();

    (state, user, post)
}

fn location<B>(resp: &actix_web::dev::ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[actix_web::test]
async fn test_root_redirects_to_users() {
    let (state, _, _) = seeded().await;
    let app = init_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/users");
}

#[actix_web::test]
async fn test_list_users() {
    let (state, _, _) = seeded().await;
    let app = init_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("test_first test_last"));
    assert!(html.contains("Grace Hopper"));
    // Ordered by last name: Hopper before test_last
    assert!(html.find("Grace Hopper").unwrap() < html.find("test_first").unwrap());
}

#[actix_web::test]
async fn test_new_user_form() {
    let (state, _, _) = seeded().await;
    let app = init_app!(state);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/users/new").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains(r#"name="first_name""#));
    assert!(html.contains(r#"name="image_url""#));
}

#[actix_web::test]
async fn test_create_user_with_blank_image() {
    let (state, _, _) = seeded().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/users/new")
        .set_form([
            ("first_name", "Ada"),
            ("last_name", "Lovelace"),
            ("image_url", ""),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/users");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("Ada"));
    assert!(html.contains("Lovelace"));

    let ada = state
        .users
        .list_ordered()
        .await
        .unwrap()
        .into_iter()
        .find(|u| u.last_name == "Lovelace")
        .unwrap();
    assert_eq!(ada.image_url, DEFAULT_IMAGE_URL);
}

#[actix_web::test]
async fn test_create_user_rejects_blank_name() {
    let (state, _, _) = seeded().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/users/new")
        .set_form([("first_name", "  "), ("last_name", "Lovelace")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.users.list_ordered().await.unwrap().len(), 2);
}

#[actix_web::test]
async fn test_create_user_missing_field() {
    let (state, _, _) = seeded().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/users/new")
        .set_form([("first_name", "Ada")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_show_user_lists_posts() {
    let (state, user, post) = seeded().await;
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", user.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("test_first"));
    assert!(html.contains("test_title"));
    assert!(html.contains(&format!(r#"href="/posts/{}""#, post.id)));
    assert!(html.contains("<img"));
}

#[actix_web::test]
async fn test_missing_user_is_not_found() {
    let (state, _, _) = seeded().await;
    let app = init_app!(state);

    for uri in [
        "/users/999999",
        "/users/999999/edit",
        "/users/999999/posts/new",
        "/users/not-a-number",
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "GET {uri}");
    }

    let req = test::TestRequest::post()
        .uri("/users/999999/delete")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_edit_user() {
    let (state, user, _) = seeded().await;
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}/edit", user.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains(r#"value="test_first""#));
    // No image was chosen, so the field starts empty.
    assert!(html.contains(r#"name="image_url" class="form-control" value="""#));

    let req = test::TestRequest::post()
        .uri(&format!("/users/{}/edit", user.id))
        .set_form([
            ("first_name", "test_first_edit"),
            ("last_name", "test_last_edit"),
            ("image_url", DEFAULT_IMAGE_URL),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/users");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("test_first_edit"));
    assert!(html.contains("test_last_edit"));
}

#[actix_web::test]
async fn test_edit_user_blank_image_uses_placeholder() {
    let (state, _, _) = seeded().await;
    let user = state
        .users
        .create(NewUser::new("Alan", "Turing", Some("http://img/alan.png")).unwrap())
        .await
        .unwrap();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri(&format!("/users/{}/edit", user.id))
        .set_form([
            ("first_name", "Alan"),
            ("last_name", "Turing"),
            ("image_url", ""),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);

    let stored = state.users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored.image_url, DEFAULT_IMAGE_URL);
}

#[actix_web::test]
async fn test_edit_missing_user_is_not_found() {
    let (state, _, _) = seeded().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/users/999999/edit")
        .set_form([
            ("first_name", "Nobody"),
            ("last_name", "Here"),
            ("image_url", ""),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_user_removes_posts() {
    let (state, user, post) = seeded().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri(&format!("/users/{}/delete", user.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/users");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(!html.contains("test_first"));
    assert!(!html.contains("test_last"));
    assert!(html.contains("Grace Hopper"));

    assert!(state.posts.find_by_id(post.id).await.unwrap().is_none());

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}", post.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_new_post_form() {
    let (state, user, _) = seeded().await;
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}/posts/new", user.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("test_first test_last"));
    assert!(html.contains(r#"name="content""#));
}

#[actix_web::test]
async fn test_create_post() {
    let (state, user, _) = seeded().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri(&format!("/users/{}/posts/new", user.id))
        .set_form([("title", "test_title_3"), ("content", "test_content_3")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), format!("/users/{}", user.id));

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", user.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("test_first"));
    assert!(html.contains("test_title_3"));
}

#[actix_web::test]
async fn test_create_post_for_missing_user() {
    let (state, _, _) = seeded().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/users/999999/posts/new")
        .set_form([("title", "Orphan"), ("content", "No author")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_show_post() {
    let (state, user, post) = seeded().await;
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}", post.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("test_title"));
    assert!(html.contains("test_content"));
    assert!(html.contains("test_first test_last"));
    assert!(html.contains(&format!("/users/{}", user.id)));
    assert!(html.contains(&format_post_date(&post.created_at)));
}

#[actix_web::test]
async fn test_missing_post_is_not_found() {
    let (state, _, _) = seeded().await;
    let app = init_app!(state);

    for uri in ["/posts/999999", "/posts/999999/edit"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "GET {uri}");
    }

    let req = test::TestRequest::post()
        .uri("/posts/999999/delete")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_edit_post() {
    let (state, _, post) = seeded().await;
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}/edit", post.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains(r#"value="test_title""#));

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{}/edit", post.id))
        .set_form([("title", "test_title_edit"), ("content", "test_content_edit")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), format!("/posts/{}", post.id));

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}", post.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("test_title_edit"));
    assert!(html.contains("test_content_edit"));

    let stored = state.posts.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(stored.created_at, post.created_at);
}

#[actix_web::test]
async fn test_edit_post_keeps_content_verbatim() {
    let (state, _, post) = seeded().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{}/edit", post.id))
        .set_form([("title", "Code"), ("content", "    indented\n")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);

    let stored = state.posts.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(stored.content, "    indented\n");
}

#[actix_web::test]
async fn test_edit_post_rejects_blank_title() {
    let (state, _, post) = seeded().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{}/edit", post.id))
        .set_form([("title", ""), ("content", "still here")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let stored = state.posts.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "test_title");
}

#[actix_web::test]
async fn test_delete_post_redirects_to_owner() {
    let (state, user, post) = seeded().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{}/delete", post.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), format!("/users/{}", user.id));

    assert!(state.posts.find_by_id(post.id).await.unwrap().is_none());
    assert!(state.users.find_by_id(user.id).await.unwrap().is_some());
}
