//! Write and edit entry use cases

use crate::domain::{DraftSession, EntryDraft, Selection};
use crate::error::Result;
use crate::infrastructure::EntryStore;
use chrono::NaiveDate;
use tracing::debug;

/// Styling action applied to a stored entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleAction {
    Highlight { color: String },
    ClearHighlight,
    ToggleStrikethrough,
}

/// Service for creating entries and changing their text and styling
pub struct WriteEntryService<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> WriteEntryService<S> {
    pub fn new(store: S) -> Self {
        WriteEntryService { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Save a new entry for `date`
    pub fn write(&mut self, date: NaiveDate, created_at: i64, draft: EntryDraft) -> Result<String> {
        self.store.create(date, created_at, draft)
    }

    /// Replace an entry's text. Highlights and strikethroughs are carried
    /// across the change and saved with the new text in one replace.
    pub fn edit_text(&mut self, id: &str, new_text: &str) -> Result<()> {
        let entry = self.store.get(id)?;
        let mut session = DraftSession::from_entry(&entry);
        session.set_text(new_text);
        debug!(
            %id,
            highlights = session.highlights().len(),
            strikethroughs = session.strikethroughs().len(),
            "reconciled styling for text edit"
        );
        self.store.replace(id, session.apply_to(entry.to_draft()))
    }

    /// Apply a styling action over a selection. Returns `Ok(false)` when the
    /// selection is empty or runs past the text, in which case nothing is
    /// written.
    pub fn style(&mut self, id: &str, selection: Selection, action: &StyleAction) -> Result<bool> {
        let entry = self.store.get(id)?;
        let mut session = DraftSession::from_entry(&entry);

        let applied = match action {
            StyleAction::Highlight { color } => session.highlight(selection, color)?,
            StyleAction::ClearHighlight => session.clear_highlight(selection),
            StyleAction::ToggleStrikethrough => session.toggle_strikethrough(selection),
        };
        if !applied {
            debug!(%id, ?selection, "selection rejected, entry unchanged");
            return Ok(false);
        }

        self.store.replace(id, session.apply_to(entry.to_draft()))?;
        Ok(true)
    }

    /// Delete every entry
    pub fn wipe(&mut self) -> Result<()> {
        self.store.delete_all()
    }
}
