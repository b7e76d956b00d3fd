use tracing::info;

use crate::{
    domain::common::{CoreError, SystemClock, services::Service},
    infrastructure::{
        message::repositories::sqlite::SqliteMessageRepository, sqlite,
        user::repositories::sqlite::SqliteUserRepository,
    },
};

/// The concrete service the API hosts.
pub type Messenger = Service<SqliteMessageRepository, SqliteUserRepository, SystemClock>;

#[derive(Clone)]
pub struct MessengerRepositories {
    pub message_repository: SqliteMessageRepository,
    pub user_repository: SqliteUserRepository,
}

impl MessengerRepositories {
    pub fn into_service(self) -> Messenger {
        Service::new(self.message_repository, self.user_repository, SystemClock)
    }
}

/// Opens the SQL store and wires both repositories over a shared pool.
pub async fn create_repositories(database_url: &str) -> Result<MessengerRepositories, CoreError> {
    let pool = sqlite::connect(database_url).await?;
    info!("Connected to database");

    Ok(MessengerRepositories {
        message_repository: SqliteMessageRepository::new(pool.clone()),
        user_repository: SqliteUserRepository::new(pool),
    })
}
