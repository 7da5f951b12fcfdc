//! Entry storage
//!
//! A diary lives in a directory containing `.daystory/`. Entries are kept in a
//! single TOML document, `.daystory/entries.toml`, rewritten on every change.

use crate::domain::entry::{DiaryEntry, EntryDraft};
use crate::error::{DaystoryError, Result};
use crate::infrastructure::config::{Config, DAYSTORY_DIR};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const ENTRIES_FILE: &str = "entries.toml";

/// Storage contract used by the application layer
pub trait EntryStore {
    /// Entries written for `date`, oldest first
    fn fetch_by_date(&self, date: NaiveDate) -> Result<Vec<DiaryEntry>>;

    /// Entries of any year written on `month`/`day`, oldest first
    fn fetch_by_month_day(&self, month: u32, day: u32) -> Result<Vec<DiaryEntry>>;

    /// Entries written in `month` of `year`, oldest first
    fn fetch_by_month(&self, year: i32, month: u32) -> Result<Vec<DiaryEntry>>;

    fn get(&self, id: &str) -> Result<DiaryEntry>;

    /// Store a new entry and return its id
    fn create(&mut self, date: NaiveDate, created_at: i64, draft: EntryDraft) -> Result<String>;

    /// Replace all mutable fields of an entry
    fn replace(&mut self, id: &str, draft: EntryDraft) -> Result<()>;

    fn delete_all(&mut self) -> Result<()>;
}

/// The list of entries and the operations on it, shared by both stores
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct EntryBook {
    #[serde(default)]
    entries: Vec<DiaryEntry>,
}

impl EntryBook {
    fn select<F>(&self, pred: F) -> Vec<DiaryEntry>
    where
        F: Fn(&DiaryEntry) -> bool,
    {
        let mut found: Vec<DiaryEntry> = self.entries.iter().filter(|e| pred(*e)).cloned().collect();
        found.sort_by_key(|e| e.created_at);
        found
    }

    fn by_date(&self, date: NaiveDate) -> Vec<DiaryEntry> {
        self.select(|e| e.date == date)
    }

    fn by_month_day(&self, month: u32, day: u32) -> Vec<DiaryEntry> {
        self.select(|e| e.date.month() == month && e.date.day() == day)
    }

    fn by_month(&self, year: i32, month: u32) -> Vec<DiaryEntry> {
        self.select(|e| e.date.year() == year && e.date.month() == month)
    }

    fn get(&self, id: &str) -> Result<DiaryEntry> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| DaystoryError::EntryNotFound(id.to_string()))
    }

    /// Ids come from the creation time; a suffix keeps them unique.
    fn next_id(&self, created_at: i64) -> String {
        let taken = |id: &str| self.entries.iter().any(|e| e.id == id);
        let base = created_at.to_string();
        if !taken(base.as_str()) {
            return base;
        }
        let mut n = 1;
        loop {
            let id = format!("{}-{}", base, n);
            if !taken(id.as_str()) {
                return id;
            }
            n += 1;
        }
    }

    fn create(&mut self, date: NaiveDate, created_at: i64, draft: EntryDraft) -> Result<String> {
        let id = self.next_id(created_at);
        let entry = DiaryEntry::from_draft(id.clone(), date, created_at, draft)?;
        self.entries.push(entry);
        Ok(id)
    }

    fn replace(&mut self, id: &str, draft: EntryDraft) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| DaystoryError::EntryNotFound(id.to_string()))?;
        entry.replace_with(draft)
    }
}

/// In-memory store, used by tests and embedders
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    book: EntryBook,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.book.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.book.entries.is_empty()
    }
}

impl EntryStore for MemoryStore {
    fn fetch_by_date(&self, date: NaiveDate) -> Result<Vec<DiaryEntry>> {
        Ok(self.book.by_date(date))
    }

    fn fetch_by_month_day(&self, month: u32, day: u32) -> Result<Vec<DiaryEntry>> {
        Ok(self.book.by_month_day(month, day))
    }

    fn fetch_by_month(&self, year: i32, month: u32) -> Result<Vec<DiaryEntry>> {
        Ok(self.book.by_month(year, month))
    }

    fn get(&self, id: &str) -> Result<DiaryEntry> {
        self.book.get(id)
    }

    fn create(&mut self, date: NaiveDate, created_at: i64, draft: EntryDraft) -> Result<String> {
        self.book.create(date, created_at, draft)
    }

    fn replace(&mut self, id: &str, draft: EntryDraft) -> Result<()> {
        self.book.replace(id, draft)
    }

    fn delete_all(&mut self) -> Result<()> {
        self.book.entries.clear();
        Ok(())
    }
}

/// File system store rooted at a diary directory
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    pub root: PathBuf,
}

impl FileSystemStore {
    /// Create a store for the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemStore { root }
    }

    /// Find the diary root: DAYSTORY_ROOT first, then walk up from the
    /// current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DAYSTORY_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_daystory_dir(&path) {
                return Ok(FileSystemStore::new(path));
            }
            return Err(DaystoryError::Config(format!(
                "DAYSTORY_ROOT is set to '{}' but no .daystory directory found. \
                Run 'daystory init' in that directory or unset DAYSTORY_ROOT.",
                path.display()
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing `.daystory/` is found.
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_daystory_dir(dir))
            .map(|dir| FileSystemStore::new(dir.to_path_buf()))
            .ok_or_else(|| DaystoryError::NotDaystoryDirectory(start.to_path_buf()))
    }

    fn has_daystory_dir(path: &Path) -> bool {
        path.join(DAYSTORY_DIR).is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_daystory_dir(&self.root)
    }

    /// Create the `.daystory` directory. Fails if it already exists.
    pub fn initialize(&self) -> Result<()> {
        let dir = self.root.join(DAYSTORY_DIR);

        if dir.exists() {
            return Err(DaystoryError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn entries_path(&self) -> PathBuf {
        self.root.join(DAYSTORY_DIR).join(ENTRIES_FILE)
    }

    fn load(&self) -> Result<EntryBook> {
        if !self.is_initialized() {
            return Err(DaystoryError::NotDaystoryDirectory(self.root.clone()));
        }

        let path = self.entries_path();
        if !path.exists() {
            return Ok(EntryBook::default());
        }

        let contents = fs::read_to_string(&path)?;
        let book: EntryBook = toml::from_str(&contents)?;
        debug!(count = book.entries.len(), path = %path.display(), "loaded entries");
        Ok(book)
    }

    /// Write the whole document to a temp file next to it, then rename it
    /// into place.
    fn save(&self, book: &EntryBook) -> Result<()> {
        let path = self.entries_path();
        let contents = toml::to_string_pretty(book)?;

        let tmp_path = path.with_file_name(format!(
            "{}.daystory-tmp-{}",
            ENTRIES_FILE,
            std::process::id()
        ));
        fs::write(&tmp_path, contents)?;

        if let Err(e) = Self::replace_file(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        debug!(count = book.entries.len(), path = %path.display(), "saved entries");
        Ok(())
    }

    fn replace_file(from: &Path, to: &Path) -> std::io::Result<()> {
        // rename does not overwrite on Windows
        if cfg!(windows) && to.exists() {
            fs::remove_file(to)?;
        }
        fs::rename(from, to)
    }
}

impl EntryStore for FileSystemStore {
    fn fetch_by_date(&self, date: NaiveDate) -> Result<Vec<DiaryEntry>> {
        Ok(self.load()?.by_date(date))
    }

    fn fetch_by_month_day(&self, month: u32, day: u32) -> Result<Vec<DiaryEntry>> {
        Ok(self.load()?.by_month_day(month, day))
    }

    fn fetch_by_month(&self, year: i32, month: u32) -> Result<Vec<DiaryEntry>> {
        Ok(self.load()?.by_month(year, month))
    }

    fn get(&self, id: &str) -> Result<DiaryEntry> {
        self.load()?.get(id)
    }

    fn create(&mut self, date: NaiveDate, created_at: i64, draft: EntryDraft) -> Result<String> {
        let mut book = self.load()?;
        let id = book.create(date, created_at, draft)?;
        self.save(&book)?;
        info!(%id, %date, "created entry");
        Ok(id)
    }

    fn replace(&mut self, id: &str, draft: EntryDraft) -> Result<()> {
        let mut book = self.load()?;
        book.replace(id, draft)?;
        self.save(&book)?;
        info!(%id, "replaced entry");
        Ok(())
    }

    fn delete_all(&mut self) -> Result<()> {
        let mut book = self.load()?;
        let removed = book.entries.len();
        book.entries.clear();
        self.save(&book)?;
        info!(removed, "deleted all entries");
        Ok(())
    }
}
