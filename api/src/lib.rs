pub mod app;
pub mod config;
pub mod http;

pub use app::App;
pub use config::Config;
pub use http::health::health_routes;
pub use http::messenger::routes::messenger_routes;
pub use http::server::{ApiError, AppState};
pub use http::users::routes::user_routes;
