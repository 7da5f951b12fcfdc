//! Same-day grouping of entries for list views

use crate::domain::entry::DiaryEntry;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Bucket entries by date, keeping their relative order within each date.
pub fn group_by_date(entries: &[DiaryEntry]) -> BTreeMap<NaiveDate, Vec<DiaryEntry>> {
    let mut groups: BTreeMap<NaiveDate, Vec<DiaryEntry>> = BTreeMap::new();
    for entry in entries {
        groups.entry(entry.date).or_default().push(entry.clone());
    }
    groups
}

/// Merged body of one day: texts in creation order, trimmed, blanks dropped,
/// joined by newlines. Photo-only days give an empty string.
pub fn merge_for_display(entries: &[DiaryEntry]) -> String {
    let mut ordered: Vec<&DiaryEntry> = entries.iter().collect();
    ordered.sort_by_key(|e| e.created_at);
    ordered
        .iter()
        .map(|e| e.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// All photo URIs of one day in entry order. Duplicates are kept.
pub fn flatten_photos(entries: &[DiaryEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|e| e.image_uris.iter().cloned())
        .collect()
}
