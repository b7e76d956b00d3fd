use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use messenger_core::domain::message::{
    entities::{AddMessageRequest, HistoryEntry, MessageId},
    ports::MessengerService,
};

use crate::http::server::{ApiError, AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthorizeUserRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddMessageResponse {
    pub message_id: MessageId,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadMessageRequest {
    pub message_id: MessageId,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChangeTextMessageRequest {
    pub message_id: MessageId,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteMessageRequest {
    pub message_id: MessageId,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HistoryRequest {
    pub group_name: String,
}

#[utoipa::path(
    post,
    path = "/messenger/authorize-user",
    tag = "messenger",
    request_body = AuthorizeUserRequest,
    responses(
        (status = 200, description = "User stored"),
        (status = 500, description = "Storage failure")
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn authorize_user(
    State(state): State<AppState>,
    Json(request): Json<AuthorizeUserRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .authorize_user(request.name, request.email)
        .await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/messenger/add-message",
    tag = "messenger",
    request_body = AddMessageRequest,
    responses(
        (status = 200, description = "Message stored", body = AddMessageResponse),
        (status = 500, description = "Storage failure")
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn add_message(
    State(state): State<AppState>,
    Json(request): Json<AddMessageRequest>,
) -> Result<Json<AddMessageResponse>, ApiError> {
    let message_id = state.service.add_message(request).await?;
    Ok(Json(AddMessageResponse { message_id }))
}

#[utoipa::path(
    post,
    path = "/messenger/read-message",
    tag = "messenger",
    request_body = ReadMessageRequest,
    responses(
        (status = 200, description = "Message marked as read"),
        (status = 404, description = "Unknown message id"),
        (status = 500, description = "Storage failure")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn read_message(
    State(state): State<AppState>,
    Json(request): Json<ReadMessageRequest>,
) -> Result<StatusCode, ApiError> {
    state.service.read_message(request.message_id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/messenger/change-text-message",
    tag = "messenger",
    request_body = ChangeTextMessageRequest,
    responses(
        (status = 200, description = "Message text replaced"),
        (status = 404, description = "Unknown message id"),
        (status = 500, description = "Storage failure")
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn change_text_message(
    State(state): State<AppState>,
    Json(request): Json<ChangeTextMessageRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .change_text_message(request.message_id, request.text)
        .await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/messenger/delete-message",
    tag = "messenger",
    request_body = DeleteMessageRequest,
    responses(
        (status = 200, description = "Message soft-deleted"),
        (status = 404, description = "Unknown message id"),
        (status = 500, description = "Storage failure")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_message(
    State(state): State<AppState>,
    Json(request): Json<DeleteMessageRequest>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_message(request.message_id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/messenger/history",
    tag = "messenger",
    request_body = HistoryRequest,
    responses(
        (status = 200, description = "Group history", body = Vec<HistoryEntry>),
        (status = 500, description = "Storage failure")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn history(
    State(state): State<AppState>,
    Json(request): Json<HistoryRequest>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError> {
    let entries = state.service.history(&request.group_name).await?;
    Ok(Json(entries))
}
