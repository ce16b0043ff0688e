pub mod connection;
pub mod fixtures;
pub mod models;
pub mod news;
pub mod setup;

pub use connection::{DbConn, DbPool, create_memory_pool, create_pool, get_connection};
pub use models::*;
