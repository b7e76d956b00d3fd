use std::str::FromStr;

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::domain::common::CoreError;

/// Opens the SQLite database behind `database_url` and ensures the schema
/// exists.
///
/// The pool is capped at a single connection: an in-memory database lives and
/// dies with its connection, so a larger pool would hand out empty databases.
pub async fn connect(database_url: &str) -> Result<SqlitePool, CoreError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| CoreError::ServiceUnavailable(e.to_string()))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| CoreError::ServiceUnavailable(e.to_string()))?;

    init_schema(&pool).await?;

    Ok(pool)
}

async fn init_schema(pool: &SqlitePool) -> Result<(), CoreError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL,
            email TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            sender TEXT NOT NULL,
            target TEXT NOT NULL,
            text TEXT NOT NULL,
            timestamp TEXT NOT NULL,
            is_personal INTEGER NOT NULL,
            is_read INTEGER NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

    Ok(())
}
