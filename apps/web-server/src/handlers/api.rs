//! Read-only JSON projection of the post collection.

use actix_web::{HttpRequest, HttpResponse, web};

use inkwell_core::domain::SortKey;
use inkwell_shared::ApiResponse;
use inkwell_shared::dto::{ListPostsQuery, PostListResponse, PostResponse};

use crate::middleware::error::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> ApiResult<HttpResponse> {
    let sort = SortKey::from_param(query.sort.as_deref());
    let listing = state
        .posts
        .list_posts(sort)
        .await
        .map_err(|e| ApiError::from(e).at(req.path()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostListResponse::from(&listing))))
}

/// GET /api/posts/{id}
pub async fn get_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let post = state
        .posts
        .get_post(&path.into_inner())
        .await
        .map_err(|e| ApiError::from(e).at(req.path()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostResponse::from(&post))))
}
