use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    http::messenger::handlers::{
        __path_add_message, __path_authorize_user, __path_change_text_message,
        __path_delete_message, __path_history, __path_read_message, add_message, authorize_user,
        change_text_message, delete_message, history, read_message,
    },
    http::server::AppState,
};

pub fn messenger_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(authorize_user))
        .routes(routes!(add_message))
        .routes(routes!(read_message))
        .routes(routes!(change_text_message))
        .routes(routes!(delete_message))
        .routes(routes!(history))
}
