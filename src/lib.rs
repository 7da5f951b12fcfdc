//! daystory - Personal diary
//!
//! Dated entries with photos, tags and highlight/strikethrough styling, browsed
//! by day, week, month and "on this day" across past years.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DaystoryError;
