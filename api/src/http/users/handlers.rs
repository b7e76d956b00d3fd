use axum::{Json, extract::State};

use messenger_core::domain::user::{entities::UserName, ports::UserService};

use crate::http::server::{ApiError, AppState};

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All stored users", body = Vec<UserName>),
        (status = 500, description = "Storage failure")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<UserName>>, ApiError> {
    let users = state.service.get_users().await?;
    Ok(Json(users))
}
