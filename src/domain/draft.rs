//! In-progress entry text with its styling ranges
//!
//! The text and both range collections only change together: a text change
//! reconciles highlights and strikethroughs against the previous text before
//! anything is committed.

use crate::domain::entry::{validate_highlight_color, DiaryEntry, EntryDraft};
use crate::domain::range::{
    add_highlight, char_len, clear_highlights, reconcile, toggle_strikethrough, HighlightRange,
    StrikethroughRange,
};
use crate::error::Result;

/// A user selection. `anchor` and `head` may be in either order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Selection { anchor, head }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftSession {
    text: String,
    highlights: Vec<HighlightRange>,
    strikethroughs: Vec<StrikethroughRange>,
}

impl DraftSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entry(entry: &DiaryEntry) -> Self {
        DraftSession {
            text: entry.text.clone(),
            highlights: entry.highlights.clone(),
            strikethroughs: entry.strikethroughs.clone(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn highlights(&self) -> &[HighlightRange] {
        &self.highlights
    }

    pub fn strikethroughs(&self) -> &[StrikethroughRange] {
        &self.strikethroughs
    }

    /// Commit a text change, carrying both range collections across it.
    pub fn set_text(&mut self, new_text: impl Into<String>) {
        let new_text = new_text.into();
        let highlights = reconcile(&self.text, &new_text, &self.highlights);
        let strikethroughs = reconcile(&self.text, &new_text, &self.strikethroughs);

        self.text = new_text;
        self.highlights = highlights;
        self.strikethroughs = strikethroughs;
    }

    /// Highlight the selection. Returns `Ok(false)` for an empty or
    /// out-of-bounds selection, which leaves the draft untouched.
    pub fn highlight(&mut self, selection: Selection, color: &str) -> Result<bool> {
        validate_highlight_color(color)?;
        if !self.accepts(selection) {
            return Ok(false);
        }
        self.highlights = add_highlight(&self.highlights, selection.start(), selection.end(), color);
        Ok(true)
    }

    /// Remove highlights touching the selection.
    pub fn clear_highlight(&mut self, selection: Selection) -> bool {
        if !self.accepts(selection) {
            return false;
        }
        self.highlights = clear_highlights(&self.highlights, selection.start(), selection.end());
        true
    }

    pub fn toggle_strikethrough(&mut self, selection: Selection) -> bool {
        if !self.accepts(selection) {
            return false;
        }
        self.strikethroughs =
            toggle_strikethrough(&self.strikethroughs, selection.start(), selection.end());
        true
    }

    /// Copy text and ranges into a draft built from `base`.
    pub fn apply_to(&self, base: EntryDraft) -> EntryDraft {
        EntryDraft {
            text: self.text.clone(),
            highlights: self.highlights.clone(),
            strikethroughs: self.strikethroughs.clone(),
            ..base
        }
    }

    fn accepts(&self, selection: Selection) -> bool {
        !selection.is_empty() && selection.end() <= char_len(&self.text)
    }
}
