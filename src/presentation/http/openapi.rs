// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::get_post,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::delete_post,
        crate::presentation::http::controllers::posts::list_featured_posts,
        crate::presentation::http::controllers::posts::list_recent_posts,
        crate::presentation::http::controllers::posts::search_posts,
        crate::presentation::http::controllers::posts::list_related_posts,
        crate::presentation::http::controllers::posts::list_posts_by_category,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::list_popular_categories,
        crate::presentation::http::controllers::subscribers::subscribe,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::subscribers::SubscribeRequest,
            crate::presentation::http::controllers::subscribers::MessageResponse,
            crate::application::dto::PostDto,
            crate::application::dto::PostInput
        )
    ),
    tags(
        (name = "Posts", description = "Blog post endpoints"),
        (name = "Categories", description = "Category facet endpoints"),
        (name = "Subscribers", description = "Newsletter subscription"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Codercat API",
        description = "Blog backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/openapi.json", get(serve_openapi))
}

/// Pretty-printed document at `path`, creating parent directories.
pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
