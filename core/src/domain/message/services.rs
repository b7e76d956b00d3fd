use crate::domain::{
    common::{Clock, CoreError, services::Service},
    message::{
        entities::{AddMessageRequest, HistoryEntry, Message, MessageFilter, MessageId},
        ports::MessengerService,
    },
    ports::Repository,
    user::entities::User,
};

impl<M, U, C> MessengerService for Service<M, U, C>
where
    M: Repository<Message>,
    U: Repository<User>,
    C: Clock,
{
    async fn authorize_user(&self, name: String, email: String) -> Result<(), CoreError> {
        // No uniqueness check: repeated authorizations create duplicate rows.
        self.user_repository
            .save(User {
                id: None,
                username: name,
                email,
            })
            .await?;

        Ok(())
    }

    async fn add_message(&self, request: AddMessageRequest) -> Result<MessageId, CoreError> {
        let message = request.into_message(self.clock.now());

        let id = self.message_repository.save(message).await?;
        tracing::debug!(message_id = id, "message stored");

        Ok(MessageId(id))
    }

    async fn read_message(&self, id: MessageId) -> Result<(), CoreError> {
        let mut message = self.message_repository.get(id.into()).await?;

        message.is_read = true;

        self.message_repository.save(message).await?;

        Ok(())
    }

    async fn change_text_message(&self, id: MessageId, text: String) -> Result<(), CoreError> {
        let mut message = self.message_repository.get(id.into()).await?;

        message.text = text;

        self.message_repository.save(message).await?;

        Ok(())
    }

    async fn delete_message(&self, id: MessageId) -> Result<(), CoreError> {
        let mut message = self.message_repository.get(id.into()).await?;

        // Soft delete: the record stays in storage, history stops returning it.
        message.is_deleted = true;

        self.message_repository.save(message).await?;

        Ok(())
    }

    async fn history(&self, group_name: &str) -> Result<Vec<HistoryEntry>, CoreError> {
        let messages = self
            .message_repository
            .get_all_where(&MessageFilter::group_history(group_name))
            .await?;

        messages
            .into_iter()
            .map(|message| {
                // Every persisted message carries an id.
                let id = message.id.ok_or_else(|| CoreError::DatabaseError {
                    msg: "stored message has no id".to_string(),
                })?;
                Ok(HistoryEntry {
                    id,
                    text: message.text,
                })
            })
            .collect()
    }
}
