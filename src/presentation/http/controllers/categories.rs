use crate::application::queries::posts::ListPopularCategoriesQuery;
use crate::presentation::http::controllers::posts::LimitParams;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::parse_limit;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};

#[utoipa::path(
    get,
    path = "/categories",
    responses((status = 200, description = "`All` followed by every distinct category.", body = Vec<String>)),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<String>>> {
    state
        .services
        .post_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/categories/popular",
    params(LimitParams),
    responses((status = 200, description = "Categories by post count, default 5.", body = Vec<String>)),
    tag = "Categories"
)]
pub async fn list_popular_categories(
    Extension(state): Extension<HttpState>,
    Query(params): Query<LimitParams>,
) -> HttpResult<Json<Vec<String>>> {
    let limit = parse_limit(params.limit.as_deref());
    state
        .services
        .post_queries
        .list_popular_categories(ListPopularCategoriesQuery { limit })
        .await
        .into_http()
        .map(Json)
}
