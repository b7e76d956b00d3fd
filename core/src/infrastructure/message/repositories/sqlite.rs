use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::domain::{
    common::CoreError,
    message::entities::{Message, MessageFilter, MessageId},
    ports::{Entity, Repository},
};

#[derive(Debug, FromRow)]
struct MessageRow {
    id: i64,
    sender: String,
    target: String,
    text: String,
    timestamp: DateTime<Utc>,
    is_personal: bool,
    is_read: bool,
    is_deleted: bool,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Message {
            id: Some(MessageId(row.id)),
            sender: row.sender,
            target: row.target,
            text: row.text,
            timestamp: row.timestamp,
            is_personal: row.is_personal,
            is_read: row.is_read,
            is_deleted: row.is_deleted,
        }
    }
}

const SELECT_COLUMNS: &str =
    "SELECT id, sender, target, text, timestamp, is_personal, is_read, is_deleted FROM messages";

#[derive(Clone)]
pub struct SqliteMessageRepository {
    pool: SqlitePool,
}

impl SqliteMessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl Repository<Message> for SqliteMessageRepository {
    async fn get_all(&self) -> Result<Vec<Message>, CoreError> {
        // Rowid order is insertion order, which History relies on.
        let rows = sqlx::query_as::<_, MessageRow>(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        Ok(rows.into_iter().map(Message::from).collect())
    }

    async fn get_all_where(&self, filter: &MessageFilter) -> Result<Vec<Message>, CoreError> {
        let mut sql = format!("{SELECT_COLUMNS} WHERE target = ?");
        if !filter.include_deleted {
            sql.push_str(" AND is_deleted = 0");
        }
        sql.push_str(" ORDER BY id");

        let rows = sqlx::query_as::<_, MessageRow>(&sql)
            .bind(&filter.target)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        Ok(rows.into_iter().map(Message::from).collect())
    }

    async fn get(&self, id: i64) -> Result<Message, CoreError> {
        let row = sqlx::query_as::<_, MessageRow>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?
            .ok_or(CoreError::NotFound {
                entity: Message::NAME,
                id,
            })?;

        Ok(row.into())
    }

    async fn save(&self, entity: Message) -> Result<i64, CoreError> {
        match entity.id {
            Some(MessageId(id)) => {
                sqlx::query(
                    r#"
                    UPDATE messages
                    SET sender = ?, target = ?, text = ?, timestamp = ?,
                        is_personal = ?, is_read = ?, is_deleted = ?
                    WHERE id = ?
                    "#,
                )
                .bind(&entity.sender)
                .bind(&entity.target)
                .bind(&entity.text)
                .bind(entity.timestamp)
                .bind(entity.is_personal)
                .bind(entity.is_read)
                .bind(entity.is_deleted)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

                Ok(id)
            }
            None => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO messages (sender, target, text, timestamp, is_personal, is_read, is_deleted)
                    VALUES (?, ?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(&entity.sender)
                .bind(&entity.target)
                .bind(&entity.text)
                .bind(entity.timestamp)
                .bind(entity.is_personal)
                .bind(entity.is_read)
                .bind(entity.is_deleted)
                .execute(&self.pool)
                .await
                .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

                Ok(result.last_insert_rowid())
            }
        }
    }
}
