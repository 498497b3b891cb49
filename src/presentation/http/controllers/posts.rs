// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::{PostDto, PostInput},
    queries::posts::{
        GetPostByIdQuery, ListPostsByCategoryQuery, ListRecentPostsQuery, ListRelatedPostsQuery,
        SearchPostsQuery,
    },
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, parse_limit};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitParams {
    /// Maximum number of items; invalid or non-positive values use the route default.
    #[serde(default)]
    pub limit: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive text; blank returns every post.
    #[serde(default)]
    pub query: Option<String>,
}

#[utoipa::path(
    post,
    path = "/blogs",
    request_body = PostInput,
    responses(
        (status = 201, description = "Post created; subscribers are notified in the background.", body = PostDto),
        (status = 400, description = "Malformed body.", body = ErrorResponse),
        (status = 500, description = "Store failure.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<PostInput>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let created = state
        .services
        .post_commands
        .create_post(CreatePostCommand { post: payload })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/blogs",
    responses((status = 200, description = "Every post, store order.", body = Vec<PostDto>)),
    tag = "Posts"
)]
pub async fn list_posts(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<PostDto>>> {
    state
        .services
        .post_queries
        .list_posts()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/blogs/{id}",
    params(("id" = String, Path, description = "Post id (24 hex characters)")),
    responses(
        (status = 200, description = "The post.", body = PostDto),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 404, description = "No post with that id.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_id(GetPostByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/blogs/{id}",
    params(("id" = String, Path, description = "Post id (24 hex characters)")),
    request_body = PostInput,
    responses(
        (status = 200, description = "Post replaced.", body = PostDto),
        (status = 400, description = "Malformed id or body.", body = ErrorResponse),
        (status = 404, description = "No post with that id.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<PostInput>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_commands
        .update_post(UpdatePostCommand { id, post: payload })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/blogs/{id}",
    params(("id" = String, Path, description = "Post id (24 hex characters)")),
    responses(
        (status = 204, description = "Post removed, or it did not exist."),
        (status = 400, description = "Malformed id.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .post_commands
        .delete_post(DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/blogs/featured",
    responses((status = 200, description = "Featured posts.", body = Vec<PostDto>)),
    tag = "Posts"
)]
pub async fn list_featured_posts(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<PostDto>>> {
    state
        .services
        .post_queries
        .list_featured_posts()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/blogs/recent",
    params(LimitParams),
    responses((status = 200, description = "Newest posts by date, default 3.", body = Vec<PostDto>)),
    tag = "Posts"
)]
pub async fn list_recent_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<LimitParams>,
) -> HttpResult<Json<Vec<PostDto>>> {
    let limit = parse_limit(params.limit.as_deref());
    state
        .services
        .post_queries
        .list_recent_posts(ListRecentPostsQuery { limit })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/blogs/search",
    params(SearchParams),
    responses((status = 200, description = "Posts whose title, excerpt, content or tags contain the query.", body = Vec<PostDto>)),
    tag = "Posts"
)]
pub async fn search_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<Vec<PostDto>>> {
    let query = params.query.unwrap_or_default();
    state
        .services
        .post_queries
        .search_posts(SearchPostsQuery { query })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/blogs/related/{id}",
    params(
        ("id" = String, Path, description = "Post id (24 hex characters)"),
        LimitParams
    ),
    responses(
        (status = 200, description = "Other posts sharing the category or a tag, default 2.", body = Vec<PostDto>),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 404, description = "No post with that id.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_related_posts(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Query(params): Query<LimitParams>,
) -> HttpResult<Json<Vec<PostDto>>> {
    let limit = parse_limit(params.limit.as_deref());
    state
        .services
        .post_queries
        .list_related_posts(ListRelatedPostsQuery { id, limit })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/blogs/category/{category}",
    params(("category" = String, Path, description = "Exact category, or `All` for every post")),
    responses((status = 200, description = "Posts in the category.", body = Vec<PostDto>)),
    tag = "Posts"
)]
pub async fn list_posts_by_category(
    Extension(state): Extension<HttpState>,
    Path(category): Path<String>,
) -> HttpResult<Json<Vec<PostDto>>> {
    state
        .services
        .post_queries
        .list_posts_by_category(ListPostsByCategoryQuery { category })
        .await
        .into_http()
        .map(Json)
}
