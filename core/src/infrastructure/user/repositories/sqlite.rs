use sqlx::{FromRow, SqlitePool};

use crate::domain::{
    common::CoreError,
    ports::{Entity, Repository},
    user::entities::{User, UserId},
};

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: Some(UserId(row.id)),
            username: row.username,
            email: row.email,
        }
    }
}

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl Repository<User> for SqliteUserRepository {
    async fn get_all(&self) -> Result<Vec<User>, CoreError> {
        let rows =
            sqlx::query_as::<_, UserRow>("SELECT id, username, email FROM users ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get_all_where(&self, _filter: &()) -> Result<Vec<User>, CoreError> {
        // The unit filter matches everything.
        self.get_all().await
    }

    async fn get(&self, id: i64) -> Result<User, CoreError> {
        let row =
            sqlx::query_as::<_, UserRow>("SELECT id, username, email FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?
                .ok_or(CoreError::NotFound {
                    entity: User::NAME,
                    id,
                })?;

        Ok(row.into())
    }

    async fn save(&self, entity: User) -> Result<i64, CoreError> {
        match entity.id {
            Some(UserId(id)) => {
                sqlx::query("UPDATE users SET username = ?, email = ? WHERE id = ?")
                    .bind(&entity.username)
                    .bind(&entity.email)
                    .bind(id)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

                Ok(id)
            }
            None => {
                let result = sqlx::query("INSERT INTO users (username, email) VALUES (?, ?)")
                    .bind(&entity.username)
                    .bind(&entity.email)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

                Ok(result.last_insert_rowid())
            }
        }
    }
}
