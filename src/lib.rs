pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::DirectoryError;
pub use crate::core::services::DirectoryService;
pub use infrastructure::logging::in_memory::InMemoryLogging;
pub use infrastructure::storage::{in_memory::InMemoryStorage, sqlite::SqliteStorage};

#[cfg(test)]
mod tests;
