use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::Entity;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct MessageId(pub i64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MessageId {
    fn from(id: i64) -> Self {
        MessageId(id)
    }
}

impl From<MessageId> for i64 {
    fn from(message_id: MessageId) -> Self {
        message_id.0
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Message {
    pub id: Option<MessageId>,
    pub sender: String,
    pub target: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub is_personal: bool,
    pub is_read: bool,
    pub is_deleted: bool,
}

impl Entity for Message {
    const NAME: &'static str = "Message";
    type Filter = MessageFilter;

    fn id(&self) -> Option<i64> {
        self.id.map(i64::from)
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(MessageId(id));
    }

    fn matches(&self, filter: &MessageFilter) -> bool {
        self.target == filter.target && (filter.include_deleted || !self.is_deleted)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct AddMessageRequest {
    pub sender: String,
    pub target: String,
    pub text: String,
    pub is_personal: bool,
}

impl AddMessageRequest {
    pub fn into_message(self, timestamp: DateTime<Utc>) -> Message {
        Message {
            id: None,
            sender: self.sender,
            target: self.target,
            text: self.text,
            timestamp,
            is_personal: self.is_personal,
            is_read: false,
            is_deleted: false,
        }
    }
}

/// Projection of a message as History returns it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct HistoryEntry {
    pub id: MessageId,
    pub text: String,
}

/// Typed query object for filtered message fetches.
#[derive(Debug, Clone)]
pub struct MessageFilter {
    pub target: String,
    pub include_deleted: bool,
}

impl MessageFilter {
    /// Non-deleted messages addressed to the given group.
    pub fn group_history(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            include_deleted: false,
        }
    }
}
