//! Highlight and strikethrough ranges over diary text
//!
//! Offsets count Unicode scalar values (`char`s), not bytes, so a range stays
//! meaningful regardless of how the text is encoded.

use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` character interval carried by a styling range.
pub trait TextSpan: Clone {
    fn start(&self) -> usize;
    fn end(&self) -> usize;

    /// Same payload, new bounds.
    fn with_bounds(&self, start: usize, end: usize) -> Self;

    /// Overlap test against `[start, end)`. Touching ranges do not overlap.
    fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start() < end && self.end() > start
    }
}

/// Highlighter stroke with a palette color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightRange {
    pub start: usize,
    pub end: usize,
    pub color: String,
}

impl HighlightRange {
    pub fn new(start: usize, end: usize, color: impl Into<String>) -> Self {
        HighlightRange {
            start,
            end,
            color: color.into(),
        }
    }
}

impl TextSpan for HighlightRange {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }

    fn with_bounds(&self, start: usize, end: usize) -> Self {
        HighlightRange {
            start,
            end,
            color: self.color.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrikethroughRange {
    pub start: usize,
    pub end: usize,
}

impl StrikethroughRange {
    pub fn new(start: usize, end: usize) -> Self {
        StrikethroughRange { start, end }
    }
}

impl TextSpan for StrikethroughRange {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }

    fn with_bounds(&self, start: usize, end: usize) -> Self {
        StrikethroughRange { start, end }
    }
}

/// Length of `text` in the offset unit used by ranges.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Length of the longest common prefix of two texts, in characters.
///
/// This is taken as the single edit point of a text change.
pub fn first_difference(old_text: &str, new_text: &str) -> usize {
    old_text
        .chars()
        .zip(new_text.chars())
        .take_while(|(a, b)| a == b)
        .count()
}

/// Recompute `ranges` (valid over `old_text`) so they are valid over `new_text`.
///
/// Everything before the first differing character is treated as untouched.
/// Ranges entirely before that point are kept, ranges at or after it move by
/// the length delta, and ranges straddling it keep their start and move their
/// end. Ranges that end up empty or out of bounds are dropped. Survivors keep
/// their input order.
///
/// Edits touching several distant places at once (e.g. autocorrect rewriting
/// two words in one change) are only approximated by this single edit point
/// and may misplace ranges.
pub fn reconcile<R: TextSpan>(old_text: &str, new_text: &str, ranges: &[R]) -> Vec<R> {
    let first_diff = first_difference(old_text, new_text) as i64;
    let new_len = char_len(new_text) as i64;
    let delta = new_len - char_len(old_text) as i64;

    ranges
        .iter()
        .filter_map(|range| {
            let mut start = range.start() as i64;
            let mut end = range.end() as i64;

            if end <= first_diff {
                // before the edit
            } else if start >= first_diff {
                start = (start + delta).max(0);
                end = (end + delta).min(new_len);
            } else {
                end = (end + delta).min(new_len);
            }

            if start < end && end <= new_len {
                Some(range.with_bounds(start as usize, end as usize))
            } else {
                None
            }
        })
        .collect()
}

/// Add a highlight over the selection and keep the collection sorted by start.
///
/// Overlapping highlights are not merged; a later stroke layers on top.
pub fn add_highlight(
    ranges: &[HighlightRange],
    start: usize,
    end: usize,
    color: &str,
) -> Vec<HighlightRange> {
    let (start, end) = normalize(start, end);
    let mut out = ranges.to_vec();
    out.push(HighlightRange::new(start, end, color));
    sort_by_start(&mut out);
    out
}

/// Remove every highlight touching the selection. Partial overlaps are
/// removed whole, never clipped.
pub fn clear_highlights(ranges: &[HighlightRange], start: usize, end: usize) -> Vec<HighlightRange> {
    let (start, end) = normalize(start, end);
    ranges
        .iter()
        .filter(|h| !h.overlaps(start, end))
        .cloned()
        .collect()
}

/// Toggle strikethrough over the selection.
///
/// If the ranges overlapping the selection jointly reach from at or before its
/// start to at or after its end, all of them are removed. Otherwise a new
/// range is added as-is, without merging, and the collection re-sorted.
pub fn toggle_strikethrough(
    ranges: &[StrikethroughRange],
    start: usize,
    end: usize,
) -> Vec<StrikethroughRange> {
    let (start, end) = normalize(start, end);
    let overlapping: Vec<&StrikethroughRange> =
        ranges.iter().filter(|s| s.overlaps(start, end)).collect();

    let covered_from = overlapping.iter().map(|s| s.start).min();
    let covered_to = overlapping.iter().map(|s| s.end).max();
    let fully_covered = matches!(
        (covered_from, covered_to),
        (Some(lo), Some(hi)) if lo <= start && hi >= end
    );

    if fully_covered {
        ranges
            .iter()
            .filter(|s| !s.overlaps(start, end))
            .copied()
            .collect()
    } else {
        let mut out = ranges.to_vec();
        out.push(StrikethroughRange::new(start, end));
        sort_by_start(&mut out);
        out
    }
}

fn normalize(start: usize, end: usize) -> (usize, usize) {
    (start.min(end), start.max(end))
}

fn sort_by_start<R: TextSpan>(ranges: &mut [R]) {
    ranges.sort_by_key(|r| r.start());
}
