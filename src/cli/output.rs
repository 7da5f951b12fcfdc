//! Output formatting utilities

use crate::application::{CollectionSection, DaySummary, MonthView};
use crate::domain::calendar::WEEKDAY_LABELS;
use crate::domain::WeekDay;
use chrono::Month;

/// Format one day: merged body, photos, tags and the entries it came from
pub fn format_day(summary: &DaySummary) -> String {
    let date = summary.date.format("%Y-%m-%d (%a)");
    if summary.is_empty() {
        return format!("No entries for {}", date);
    }

    let mut output = format!("{}\n", date);
    if !summary.body.is_empty() {
        output.push_str(&summary.body);
        output.push('\n');
    }
    if !summary.photos.is_empty() {
        output.push_str(&format!("Photos: {}\n", summary.photos.join(", ")));
    }
    let tags = summary.tags();
    if !tags.is_empty() {
        let tags: Vec<String> = tags.iter().map(|t| format!("#{}", t)).collect();
        output.push_str(&format!("Tags: {}\n", tags.join(" ")));
    }
    for entry in &summary.entries {
        output.push_str(&format!(
            "  [{}] {}pt, {} highlight(s), {} strikethrough(s)\n",
            entry.id,
            entry.font_size_or_default(),
            entry.highlights.len(),
            entry.strikethroughs.len()
        ));
    }
    output
}

/// One line per recent day: first line of the merged body and photo count
pub fn format_recent(days: &[DaySummary]) -> String {
    let mut output = String::new();
    for day in days {
        let date = day.date.format("%Y-%m-%d");
        if day.is_empty() {
            output.push_str(&format!("{}  (no entry)\n", date));
            continue;
        }
        let first_line = day.body.lines().next().unwrap_or("");
        output.push_str(&format!("{}  {}", date, first_line));
        if !day.photos.is_empty() {
            output.push_str(&format!("  [{} photo(s)]", day.photos.len()));
        }
        output.push('\n');
    }
    output
}

/// "On this day" sections, most recent year first
pub fn format_collection(sections: &[CollectionSection]) -> String {
    if sections.is_empty() {
        return "No such date in the last ten years".to_string();
    }

    let mut output = String::new();
    for section in sections {
        output.push_str(&format!(
            "{}  {}\n",
            section.header,
            section.day.date.format("%Y-%m-%d")
        ));
        if section.day.is_empty() {
            output.push_str("    No entry for this date.\n");
            continue;
        }
        for line in section.day.body.lines() {
            output.push_str(&format!("    {}\n", line));
        }
        if !section.day.photos.is_empty() {
            output.push_str(&format!("    Photos: {}\n", section.day.photos.join(", ")));
        }
    }
    output
}

/// Month grid. `[d]` is today, `(d)` the selected day, `*` marks days with
/// entries.
pub fn format_month(view: &MonthView) -> String {
    let name = u8::try_from(view.month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("?");

    let mut output = format!("{} {}\n", name, view.year);
    for label in WEEKDAY_LABELS {
        output.push_str(&format!("{:^5}", label));
    }
    output.push('\n');

    for row in view.cells.chunks(7) {
        let line: String = row
            .iter()
            .map(|cell| match cell.day {
                None => "     ".to_string(),
                Some(day) => {
                    let (open, close) = if cell.is_today {
                        ('[', ']')
                    } else if cell.is_selected {
                        ('(', ')')
                    } else {
                        (' ', ' ')
                    };
                    let mark = if view.written_days.contains(&day) { '*' } else { ' ' };
                    format!("{}{:>2}{}{}", open, day, close, mark)
                }
            })
            .collect();
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

/// Week strip: labels over day numbers, today in brackets
pub fn format_week(week: &[WeekDay]) -> String {
    let labels: String = week.iter().map(|d| format!("{:^5}", d.label)).collect();
    let days: String = week
        .iter()
        .map(|d| {
            if d.is_today {
                format!("[{:>2}] ", d.day_number)
            } else {
                format!(" {:>2}  ", d.day_number)
            }
        })
        .collect();
    format!("{}\n{}\n", labels.trim_end(), days.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::browse::{month_view, on_this_day};
    use crate::domain::calendar::build_week_on;
    use crate::domain::{DiaryEntry, EntryDraft};
    use crate::infrastructure::{EntryStore, MemoryStore};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(text: &str, images: &[&str]) -> DiaryEntry {
        DiaryEntry::from_draft(
            "1".to_string(),
            date(2025, 1, 17),
            1,
            EntryDraft::new(text)
                .with_images(images.iter().copied())
                .with_tags(["walk"]),
        )
        .unwrap()
    }

    #[test]
    fn test_format_empty_day() {
        let summary = DaySummary::new(date(2025, 1, 17), vec![]);
        assert_eq!(format_day(&summary), "No entries for 2025-01-17 (Fri)");
    }

    #[test]
    fn test_format_day() {
        let summary = DaySummary::new(date(2025, 1, 17), vec![entry("park", &["a.jpg"])]);
        let output = format_day(&summary);
        assert!(output.starts_with("2025-01-17 (Fri)\npark\n"));
        assert!(output.contains("Photos: a.jpg"));
        assert!(output.contains("Tags: #walk"));
        assert!(output.contains("[1] 16pt"));
    }

    #[test]
    fn test_format_recent() {
        let days = vec![
            DaySummary::new(date(2025, 1, 17), vec![entry("line one\nline two", &["a.jpg"])]),
            DaySummary::new(date(2025, 1, 16), vec![]),
        ];
        assert_eq!(
            format_recent(&days),
            "2025-01-17  line one  [1 photo(s)]\n2025-01-16  (no entry)\n"
        );
    }

    #[test]
    fn test_format_collection() {
        let mut store = MemoryStore::new();
        store
            .create(date(2024, 1, 17), 1, EntryDraft::new("last year"))
            .unwrap();
        let sections = on_this_day(&store, date(2025, 1, 17)).unwrap();
        let output = format_collection(&sections);
        assert!(output.starts_with("'25  2025-01-17\n    No entry for this date.\n"));
        assert!(output.contains("'24  2024-01-17\n    last year\n"));
        assert_eq!(format_collection(&[]), "No such date in the last ten years");
    }

    #[test]
    fn test_format_month() {
        let mut store = MemoryStore::new();
        store.create(date(2025, 6, 3), 1, EntryDraft::new("x")).unwrap();
        let view = month_view(&store, 2025, 6, Some(date(2025, 6, 2)), date(2025, 6, 1)).unwrap();
        let output = format_month(&view);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "June 2025");
        // June 1st, 2025 is a Sunday
        assert!(lines[2].starts_with("[ 1] ( 2)   3 *"));
        assert!(lines.last().unwrap().contains("30"));
    }

    #[test]
    fn test_format_week() {
        let week = build_week_on(date(2025, 1, 17), date(2025, 1, 17));
        let output = format_week(&week);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with(" 12"));
        assert!(lines[1].ends_with("[17]  18"));
    }
}
