use crate::domain::{
    common::{Clock, CoreError, services::Service},
    message::entities::Message,
    ports::Repository,
    user::{
        entities::{User, UserName},
        ports::UserService,
    },
};

impl<M, U, C> UserService for Service<M, U, C>
where
    M: Repository<Message>,
    U: Repository<User>,
    C: Clock,
{
    async fn get_users(&self) -> Result<Vec<UserName>, CoreError> {
        let users = self.user_repository.get_all().await?;

        Ok(users
            .into_iter()
            .map(|user| UserName {
                name: user.username,
            })
            .collect())
    }
}
