//! Infrastructure layer - Persistence and configuration

pub mod config;
pub mod store;

pub use config::Config;
pub use store::{EntryStore, FileSystemStore, MemoryStore};
