//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daystory")]
#[command(about = "Personal diary with highlights, photos and on-this-day views", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log debug output to stderr (DAYSTORY_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new diary
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Write a new entry
    Write {
        /// Entry text
        text: String,

        /// Date of the entry (today, yesterday, YYYY-MM-DD)
        #[arg(short, long, default_value = "today")]
        date: String,

        /// Tag (up to 3)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Photo URI (up to 10)
        #[arg(short, long = "image")]
        images: Vec<String>,

        /// Font size (14, 16, 18, 20, 22)
        #[arg(short, long)]
        font_size: Option<String>,
    },

    /// Replace the text of an entry, keeping its styling in place
    Edit {
        id: String,
        text: String,
    },

    /// Highlight characters START..END of an entry
    Highlight {
        id: String,
        start: usize,
        end: usize,

        /// Highlighter color (defaults to the configured color)
        #[arg(short, long)]
        color: Option<String>,
    },

    /// Remove highlights touching characters START..END
    Unhighlight {
        id: String,
        start: usize,
        end: usize,
    },

    /// Toggle strikethrough over characters START..END
    Strike {
        id: String,
        start: usize,
        end: usize,
    },

    /// Show everything written on a day
    Show {
        /// Date (today, yesterday, YYYY-MM-DD)
        #[arg(default_value = "today")]
        date: String,
    },

    /// Show the last few days
    Recent,

    /// Show a month calendar
    Month {
        /// Month as YYYY-MM (default: current month)
        month: Option<String>,

        /// Date to mark as selected
        #[arg(short, long)]
        selected: Option<String>,
    },

    /// Show the week around a date
    Week {
        #[arg(default_value = "today")]
        date: String,
    },

    /// Show entries written on the same day in past years
    OnThisDay {
        #[arg(short, long, default_value = "today")]
        date: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Delete all entries
    Wipe {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}
