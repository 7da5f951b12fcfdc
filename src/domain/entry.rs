//! Diary entry model

use crate::domain::range::{char_len, HighlightRange, StrikethroughRange, TextSpan};
use crate::error::{DaystoryError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of tags on one entry
pub const MAX_TAGS: usize = 3;

/// Maximum number of photos on one entry
pub const MAX_IMAGES: usize = 10;

/// Default highlighter color (yellow)
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#fff59d";

/// Highlighter palette: green, sky, pink, lavender, yellow
pub const HIGHLIGHT_COLORS: [&str; 5] = ["#a8e6cf", "#a0d8ef", "#ffccbc", "#e1bee7", "#fff59d"];

/// Check a highlight color against the palette.
pub fn validate_highlight_color(color: &str) -> Result<()> {
    if HIGHLIGHT_COLORS.contains(&color) {
        Ok(())
    } else {
        Err(DaystoryError::InvalidEntry(format!(
            "unknown highlight color: {}",
            color
        )))
    }
}

/// Body font size of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
    XXLarge,
}

impl FontSize {
    pub const ALL: [FontSize; 5] = [
        FontSize::Small,
        FontSize::Medium,
        FontSize::Large,
        FontSize::XLarge,
        FontSize::XXLarge,
    ];

    pub fn points(self) -> u8 {
        match self {
            FontSize::Small => 14,
            FontSize::Medium => 16,
            FontSize::Large => 18,
            FontSize::XLarge => 20,
            FontSize::XXLarge => 22,
        }
    }
}

impl TryFrom<u8> for FontSize {
    type Error = String;

    fn try_from(points: u8) -> std::result::Result<Self, Self::Error> {
        FontSize::ALL
            .into_iter()
            .find(|size| size.points() == points)
            .ok_or_else(|| format!("unsupported font size: {}", points))
    }
}

impl From<FontSize> for u8 {
    fn from(size: FontSize) -> u8 {
        size.points()
    }
}

impl FromStr for FontSize {
    type Err = DaystoryError;

    fn from_str(s: &str) -> Result<Self> {
        let points: u8 = s
            .trim()
            .parse()
            .map_err(|_| DaystoryError::InvalidEntry(format!("unsupported font size: {}", s)))?;
        FontSize::try_from(points).map_err(DaystoryError::InvalidEntry)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points())
    }
}

/// Up to three unique tags in insertion order. Stored as a plain list; loading
/// goes through the same rules as `add`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        TagSet(Vec::new())
    }

    /// Add a tag. Returns false when the trimmed tag is empty, already
    /// present, or the set is full.
    pub fn add(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.0.iter().any(|t| t == tag) || self.0.len() >= MAX_TAGS {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tags = TagSet::new();
        for tag in iter {
            tags.add(tag);
        }
        tags
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        tags.iter().map(String::as_str).collect()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(tags: TagSet) -> Self {
        tags.0
    }
}

/// A stored diary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: String,
    pub date: NaiveDate,
    pub text: String,
    #[serde(default)]
    pub image_uris: Vec<String>,
    #[serde(default)]
    pub tags: TagSet,
    /// Epoch milliseconds
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
    #[serde(default)]
    pub highlights: Vec<HighlightRange>,
    #[serde(default)]
    pub strikethroughs: Vec<StrikethroughRange>,
}

impl DiaryEntry {
    /// Build an entry from a draft. The draft is validated first.
    pub fn from_draft(id: String, date: NaiveDate, created_at: i64, draft: EntryDraft) -> Result<Self> {
        draft.validate()?;
        Ok(DiaryEntry {
            id,
            date,
            text: draft.text,
            image_uris: draft.image_uris,
            tags: draft.tags,
            created_at,
            font_size: draft.font_size,
            highlights: draft.highlights,
            strikethroughs: draft.strikethroughs,
        })
    }

    pub fn font_size_or_default(&self) -> FontSize {
        self.font_size.unwrap_or_default()
    }

    /// Replace every mutable field. `id`, `date` and `created_at` never change.
    pub fn replace_with(&mut self, draft: EntryDraft) -> Result<()> {
        draft.validate()?;
        self.text = draft.text;
        self.image_uris = draft.image_uris;
        self.tags = draft.tags;
        self.font_size = draft.font_size;
        self.highlights = draft.highlights;
        self.strikethroughs = draft.strikethroughs;
        Ok(())
    }

    /// The mutable fields of this entry as a draft
    pub fn to_draft(&self) -> EntryDraft {
        EntryDraft {
            text: self.text.clone(),
            image_uris: self.image_uris.clone(),
            tags: self.tags.clone(),
            font_size: self.font_size,
            highlights: self.highlights.clone(),
            strikethroughs: self.strikethroughs.clone(),
        }
    }
}

/// Mutable fields of an entry, as written by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub text: String,
    pub image_uris: Vec<String>,
    pub tags: TagSet,
    pub font_size: Option<FontSize>,
    pub highlights: Vec<HighlightRange>,
    pub strikethroughs: Vec<StrikethroughRange>,
}

impl EntryDraft {
    pub fn new(text: impl Into<String>) -> Self {
        EntryDraft {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Attach photos; anything past the tenth is dropped.
    pub fn with_images<I, S>(mut self, uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.image_uris = uris.into_iter().map(Into::into).take(MAX_IMAGES).collect();
        self
    }

    pub fn with_tags<'a, I: IntoIterator<Item = &'a str>>(mut self, tags: I) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn with_font_size(mut self, size: FontSize) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Check the rules a save must satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(DaystoryError::InvalidEntry(
                "entry text must not be empty".to_string(),
            ));
        }
        if self.image_uris.len() > MAX_IMAGES {
            return Err(DaystoryError::InvalidEntry(format!(
                "at most {} images per entry",
                MAX_IMAGES
            )));
        }
        for highlight in &self.highlights {
            validate_highlight_color(&highlight.color)?;
        }

        let len = char_len(&self.text);
        let bad_highlight = self.highlights.iter().any(|h| !span_fits(h, len));
        let bad_strike = self.strikethroughs.iter().any(|s| !span_fits(s, len));
        if bad_highlight || bad_strike {
            return Err(DaystoryError::InvalidEntry(
                "styling range outside the entry text".to_string(),
            ));
        }
        Ok(())
    }
}

fn span_fits<R: TextSpan>(span: &R, len: usize) -> bool {
    span.start() < span.end() && span.end() <= len
}
