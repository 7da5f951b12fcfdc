//! Read-only views: a single day, recent days, "on this day", month grid

use crate::domain::calendar::{build_month_grid_on, build_week_on, year_dates_for_month_day};
use crate::domain::grouping::{flatten_photos, group_by_date, merge_for_display};
use crate::domain::{DayCell, DiaryEntry, WeekDay};
use crate::error::Result;
use crate::infrastructure::EntryStore;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeSet;
use tracing::debug;

/// Number of past days shown by the recent view, yesterday first
pub const RECENT_DAYS: i64 = 4;

/// Everything written on one date, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub entries: Vec<DiaryEntry>,
    pub body: String,
    pub photos: Vec<String>,
}

impl DaySummary {
    pub fn new(date: NaiveDate, entries: Vec<DiaryEntry>) -> Self {
        DaySummary {
            date,
            body: merge_for_display(&entries),
            photos: flatten_photos(&entries),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tags of all entries of the day, first occurrence order
    pub fn tags(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for tag in self.entries.iter().flat_map(|e| e.tags.as_slice()) {
            if !seen.contains(tag) {
                seen.push(tag.clone());
            }
        }
        seen
    }
}

/// One year's section of the "on this day" view
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSection {
    /// Two-digit year header, e.g. `'25`
    pub header: String,
    pub day: DaySummary,
}

/// Month grid plus the days that have at least one entry
#[derive(Debug, Clone, PartialEq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<DayCell>,
    pub written_days: BTreeSet<u32>,
}

pub fn day_summary<S: EntryStore>(store: &S, date: NaiveDate) -> Result<DaySummary> {
    Ok(DaySummary::new(date, store.fetch_by_date(date)?))
}

/// The `RECENT_DAYS` days before `today`, most recent first
pub fn recent_days<S: EntryStore>(store: &S, today: NaiveDate) -> Result<Vec<DaySummary>> {
    (1..=RECENT_DAYS)
        .map(|back| day_summary(store, today - Duration::days(back)))
        .collect()
}

/// Entries written on the month/day of `reference` over the last ten years,
/// one section per existing date, most recent year first.
pub fn on_this_day<S: EntryStore>(store: &S, reference: NaiveDate) -> Result<Vec<CollectionSection>> {
    let entries = store.fetch_by_month_day(reference.month(), reference.day())?;
    let mut grouped = group_by_date(&entries);
    debug!(
        entries = entries.len(),
        dates = grouped.len(),
        "grouped entries for on-this-day"
    );

    let sections = year_dates_for_month_day(reference.month(), reference.day(), reference.year())
        .iter()
        .filter_map(|key| NaiveDate::parse_from_str(key, "%Y-%m-%d").ok())
        .map(|date| CollectionSection {
            header: format!("'{:02}", date.year().rem_euclid(100)),
            day: DaySummary::new(date, grouped.remove(&date).unwrap_or_default()),
        })
        .collect();
    Ok(sections)
}

pub fn month_view<S: EntryStore>(
    store: &S,
    year: i32,
    month: u32,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<MonthView> {
    let cells = build_month_grid_on(year, month, selected, today);

    let written_days: BTreeSet<u32> = store
        .fetch_by_month(year, month)?
        .iter()
        .map(|e| e.date.day())
        .collect();

    Ok(MonthView {
        year,
        month,
        cells,
        written_days,
    })
}

/// Week strip around `reference`
pub fn week_view(reference: NaiveDate, today: NaiveDate) -> Vec<WeekDay> {
    build_week_on(reference, today)
}
