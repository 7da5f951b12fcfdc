//! Date reference parsing and resolution

use crate::error::{DaystoryError, Result};
use chrono::{Duration, NaiveDate};

/// A date given on the command line, resolved against a base date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRef {
    Today,
    Yesterday,
    Tomorrow,
    Specific(NaiveDate),
}

impl DateRef {
    /// Parse `today`, `yesterday`, `tomorrow` or `YYYY-MM-DD`
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DateRef::Today),
            "yesterday" => Ok(DateRef::Yesterday),
            "tomorrow" => Ok(DateRef::Tomorrow),
            _ => NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                .map(DateRef::Specific)
                .map_err(|_| DaystoryError::InvalidDate(input.to_string())),
        }
    }

    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            DateRef::Today => base_date,
            DateRef::Yesterday => base_date - Duration::days(1),
            DateRef::Tomorrow => base_date + Duration::days(1),
            DateRef::Specific(date) => *date,
        }
    }
}

/// Parse a `YYYY-MM` month reference into `(year, month)`.
pub fn parse_year_month(input: &str) -> Result<(i32, u32)> {
    let invalid = || DaystoryError::InvalidDate(input.to_string());
    let (year, month) = input.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    Ok((year, month))
}
