use crate::domain::{
    common::Clock, message::entities::Message, ports::Repository, user::entities::User,
};

#[derive(Clone)]
pub struct Service<M, U, C>
where
    M: Repository<Message>,
    U: Repository<User>,
    C: Clock,
{
    pub(crate) message_repository: M,
    pub(crate) user_repository: U,
    pub(crate) clock: C,
}

impl<M, U, C> Service<M, U, C>
where
    M: Repository<Message>,
    U: Repository<User>,
    C: Clock,
{
    pub fn new(message_repository: M, user_repository: U, clock: C) -> Self {
        Self {
            message_repository,
            user_repository,
            clock,
        }
    }
}
