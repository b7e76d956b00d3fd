use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

use messenger_core::create_repositories;

use crate::{
    config::Config,
    http::{
        health::health_routes,
        messenger::routes::messenger_routes,
        server::{ApiError, AppState},
        users::routes::user_routes,
    },
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Messenger API",
    description = "Minimal messaging backend: authorize users, send/read/edit/delete messages, fetch group history"
))]
struct ApiDoc;

pub struct App {
    config: Config,
    state: AppState,
}

impl App {
    pub async fn new(config: Config) -> Result<Self, ApiError> {
        let repositories = create_repositories(&config.database.url).await?;
        let state = AppState::new(repositories.into_service());

        Ok(Self { config, state })
    }

    /// Assembles the full router; also used directly by integration tests.
    pub fn router(state: AppState) -> Router {
        let (router, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(messenger_routes())
            .merge(user_routes())
            .split_for_parts();

        router
            .merge(health_routes())
            .with_state(state)
            .merge(Scalar::with_url("/docs", api_doc))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    pub async fn start(self) -> Result<(), ApiError> {
        let addr = format!(
            "{}:{}",
            self.config.server.host, self.config.server.api_port
        );
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| ApiError::Startup(e.to_string()))?;
        info!("Listening on {addr}");

        axum::serve(listener, Self::router(self.state))
            .await
            .map_err(|e| ApiError::Startup(e.to_string()))?;

        Ok(())
    }
}
