//! HTML post and comment handlers.

use actix_web::{HttpResponse, http::header, web};

use inkwell_core::domain::SortKey;
use inkwell_shared::dto::{AddCommentForm, CreatePostForm, ListPostsQuery};

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views;

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(body)
}

fn see_other(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// GET /
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let sort = SortKey::from_param(query.sort.as_deref());
    let listing = state.posts.list_posts(sort).await?;

    Ok(html(views::render_home(&listing)?))
}

/// POST /create_post
pub async fn create_post(
    state: web::Data<AppState>,
    form: web::Form<CreatePostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    state
        .posts
        .create_post(&form.title, &form.content, &form.author)
        .await?;

    Ok(see_other("/".to_string()))
}

/// GET /post/{id}
pub async fn view_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_post(&path.into_inner()).await?;

    Ok(html(views::render_post(&post)?))
}

/// POST /add_comment/{id}
pub async fn add_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<AddCommentForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    let post_id = state
        .posts
        .add_comment(&path.into_inner(), &form.username, &form.comment)
        .await?;

    Ok(see_other(format!("/post/{}", post_id)))
}
