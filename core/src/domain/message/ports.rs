use crate::domain::{
    common::CoreError,
    message::entities::{AddMessageRequest, HistoryEntry, MessageId},
};

/// Messenger operations: user authorization, message lifecycle and group
/// history.
///
/// Every failure from the backing repository propagates to the caller
/// unchanged; there is no retry or local recovery at this layer.
pub trait MessengerService: Send + Sync {
    /// Stores a user under the given name and email. Repeated calls create
    /// duplicate users; no uniqueness check is performed.
    fn authorize_user(
        &self,
        name: String,
        email: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Persists a new message stamped with the current time and returns the
    /// storage-assigned identifier.
    fn add_message(
        &self,
        request: AddMessageRequest,
    ) -> impl Future<Output = Result<MessageId, CoreError>> + Send;

    /// Marks the message as read. Idempotent.
    fn read_message(&self, id: MessageId) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Replaces the message text.
    fn change_text_message(
        &self,
        id: MessageId,
        text: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Soft-deletes the message; the record stays in storage but drops out of
    /// history results.
    fn delete_message(&self, id: MessageId) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Non-deleted messages addressed to the group, projected to (id, text),
    /// in storage order.
    fn history(
        &self,
        group_name: &str,
    ) -> impl Future<Output = Result<Vec<HistoryEntry>, CoreError>> + Send;
}
