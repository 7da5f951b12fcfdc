//! Initialize diary use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemStore};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new diary at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileSystemStore::new(path.to_path_buf());
    store.initialize()?;
    store.save_config(&Config::new())?;
    info!(path = %path.display(), "initialized diary");

    println!("Initialized daystory diary at {}", path.display());

    Ok(())
}
