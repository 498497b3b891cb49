use crate::application::commands::subscribers::SubscribeCommand;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/subscribe",
    request_body = SubscribeRequest,
    responses(
        (status = 201, description = "Subscribed.", body = MessageResponse),
        (status = 400, description = "Missing or empty email.", body = ErrorResponse)
    ),
    tag = "Subscribers"
)]
pub async fn subscribe(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<SubscribeRequest>,
) -> HttpResult<(StatusCode, Json<MessageResponse>)> {
    state
        .services
        .subscriber_commands
        .subscribe(SubscribeCommand {
            email: payload.email,
        })
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Subscribed successfully".into(),
        }),
    ))
}
