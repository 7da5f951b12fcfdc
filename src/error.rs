//! Error types for daystory

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for daystory
#[derive(Debug, Error)]
pub enum DaystoryError {
    #[error("Not a daystory directory: {0}")]
    NotDaystoryDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DaystoryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DaystoryError::NotDaystoryDirectory(_) => 2,
            DaystoryError::InvalidDate(_) => 3,
            DaystoryError::EntryNotFound(_) => 4,
            DaystoryError::InvalidEntry(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DaystoryError::NotDaystoryDirectory(path) => {
                format!(
                    "Not a daystory directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'daystory init' in this directory to create a new diary\n\
                    • Navigate to an existing daystory directory\n\
                    • Set DAYSTORY_ROOT environment variable to your diary path",
                    path.display()
                )
            }
            DaystoryError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday, tomorrow\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-01-17)\n\
                    • Months for 'daystory month': YYYY-MM (e.g., 2025-01)\n\n\
                    Examples:\n\
                    daystory show yesterday\n\
                    daystory write --date 2025-01-15 \"...\"",
                    input
                )
            }
            DaystoryError::EntryNotFound(id) => {
                format!(
                    "Entry not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'daystory show <date>' to see entry ids for a day\n\
                    • Entry ids are printed when an entry is written",
                    id
                )
            }
            DaystoryError::InvalidEntry(msg) => {
                if msg.contains("highlight color") {
                    format!(
                        "Invalid entry: {}\n\n\
                        Valid colors: #a8e6cf, #a0d8ef, #ffccbc, #e1bee7, #fff59d",
                        msg
                    )
                } else if msg.contains("font size") {
                    format!(
                        "Invalid entry: {}\n\n\
                        Valid font sizes: 14, 16, 18, 20, 22",
                        msg
                    )
                } else {
                    self.to_string()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DaystoryError
pub type Result<T> = std::result::Result<T, DaystoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_daystory_directory_suggestion() {
        let err = DaystoryError::NotDaystoryDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("daystory init"));
        assert!(msg.contains("DAYSTORY_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_date_examples() {
        let err = DaystoryError::InvalidDate("someday".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'someday'"));
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("Examples"));
    }

    #[test]
    fn test_invalid_entry_palette_hint() {
        let err = DaystoryError::InvalidEntry("unknown highlight color: red".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("#fff59d"));

        let err = DaystoryError::InvalidEntry("unsupported font size: 15".to_string());
        assert!(err.display_with_suggestions().contains("14, 16, 18, 20, 22"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(DaystoryError::NotDaystoryDirectory(PathBuf::new()).exit_code(), 2);
        assert_eq!(DaystoryError::InvalidDate(String::new()).exit_code(), 3);
        assert_eq!(DaystoryError::EntryNotFound(String::new()).exit_code(), 4);
        assert_eq!(DaystoryError::InvalidEntry(String::new()).exit_code(), 5);
        assert_eq!(DaystoryError::Config(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = DaystoryError::Config("bad key".to_string());
        assert_eq!(err.display_with_suggestions(), "Configuration error: bad key");
    }
}
