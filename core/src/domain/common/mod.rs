use chrono::{DateTime, Utc};
use thiserror::Error;

pub mod services;

#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("Service is currently unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Database error: {msg}")]
    DatabaseError { msg: String },
}

/// Time source used when stamping new messages. Production code uses
/// [`SystemClock`]; tests inject a fixed clock so stored timestamps are
/// deterministic.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
