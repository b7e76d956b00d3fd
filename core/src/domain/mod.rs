pub mod common;
pub mod message;
pub mod ports;
pub mod user;

pub use common::CoreError;
