pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use application::{Messenger, MessengerRepositories, create_repositories};
pub use domain::common::services::Service;
pub use infrastructure::message::repositories::sqlite::SqliteMessageRepository;
pub use infrastructure::user::repositories::sqlite::SqliteUserRepository;
