pub mod message;
pub mod sqlite;
pub mod user;
