pub mod health;
pub mod messenger;
pub mod server;
pub mod users;
