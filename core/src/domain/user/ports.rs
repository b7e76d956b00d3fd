use crate::domain::{common::CoreError, user::entities::UserName};

pub trait UserService: Send + Sync {
    /// All stored users projected to display name, duplicates included.
    fn get_users(&self) -> impl Future<Output = Result<Vec<UserName>, CoreError>> + Send;
}
