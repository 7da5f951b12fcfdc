//! Application layer - Use cases and orchestration

pub mod browse;
pub mod init;
pub mod manage_config;
pub mod write_entry;

pub use browse::{CollectionSection, DaySummary, MonthView};
pub use manage_config::ConfigService;
pub use write_entry::{StyleAction, WriteEntryService};
