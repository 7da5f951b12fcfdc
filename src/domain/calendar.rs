//! Calendar grids, week strips and "on this day" dates

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Single-character weekday labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// How many years back "on this day" looks, including the base year.
pub const HISTORY_YEARS: i32 = 10;

/// One cell of a month view. Leading blanks have no day and no weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: Option<u32>,
    pub is_today: bool,
    pub is_selected: bool,
    /// 0 = Sunday .. 6 = Saturday
    pub weekday: Option<u32>,
}

impl DayCell {
    fn blank() -> Self {
        DayCell {
            day: None,
            is_today: false,
            is_selected: false,
            weekday: None,
        }
    }
}

/// One day of the week strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekDay {
    pub label: &'static str,
    pub day_number: u32,
    pub is_today: bool,
}

/// Number of days in `month` of `year`, or `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next_first - first).num_days() as u32)
}

/// Month grid for `year`/`month` using the local current date as "today".
pub fn build_month_grid(year: i32, month: u32, selected: Option<NaiveDate>) -> Vec<DayCell> {
    build_month_grid_on(year, month, selected, Local::now().date_naive())
}

/// Month grid: blank cells up to the weekday of the 1st, then one cell per day.
///
/// An invalid month produces an empty grid.
pub fn build_month_grid_on(
    year: i32,
    month: u32,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<DayCell> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let Some(day_count) = days_in_month(year, month) else {
        return Vec::new();
    };
    let start_weekday = first.weekday().num_days_from_sunday() as usize;

    let mut cells = vec![DayCell::blank(); start_weekday];
    cells.extend(first.iter_days().take(day_count as usize).map(|date| DayCell {
        day: Some(date.day()),
        is_today: date == today,
        is_selected: selected == Some(date),
        weekday: Some(date.weekday().num_days_from_sunday()),
    }));
    cells
}

/// Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Week strip around `reference` using the local current date as "today".
pub fn build_week(reference: NaiveDate) -> Vec<WeekDay> {
    build_week_on(reference, Local::now().date_naive())
}

/// Seven consecutive days starting from the Sunday on or before `reference`.
pub fn build_week_on(reference: NaiveDate, today: NaiveDate) -> Vec<WeekDay> {
    start_of_week(reference)
        .iter_days()
        .take(7)
        .map(|date| WeekDay {
            label: WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize],
            day_number: date.day(),
            is_today: date == today,
        })
        .collect()
}

/// `YYYY-MM-DD` strings for `month`/`day` in `base_year` and the nine years
/// before it, most recent first. Years where the date does not exist (Feb 29
/// outside leap years) are skipped, never replaced by a nearby date.
pub fn year_dates_for_month_day(month: u32, day: u32, base_year: i32) -> Vec<String> {
    (0..HISTORY_YEARS)
        .map(|offset| base_year - offset)
        .filter_map(|year| NaiveDate::from_ymd_opt(year, month, day))
        .filter(|date| date.month() == month && date.day() == day)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), Some(31));
        assert_eq!(days_in_month(2025, 4), Some(30));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2025, 2), Some(28));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2025, 12), Some(31));
        assert_eq!(days_in_month(2025, 13), None);
        assert_eq!(days_in_month(2025, 0), None);
    }

    #[test]
    fn test_month_grid_leading_blanks() {
        // June 1st, 2025 is a Sunday; February 1st, 2025 is a Saturday
        let june = build_month_grid_on(2025, 6, None, date(2020, 1, 1));
        assert_eq!(june.len(), 30);
        assert_eq!(june[0].day, Some(1));
        assert_eq!(june[0].weekday, Some(0));

        let feb = build_month_grid_on(2025, 2, None, date(2020, 1, 1));
        assert_eq!(feb.len(), 6 + 28);
        assert!(feb[..6].iter().all(|c| c.day.is_none() && c.weekday.is_none()));
        assert_eq!(feb[6].day, Some(1));
        assert_eq!(feb[6].weekday, Some(6));
        assert_eq!(feb.last().unwrap().day, Some(28));
    }

    #[test]
    fn test_month_grid_today_flag() {
        let today = date(2025, 1, 17);
        let grid = build_month_grid_on(2025, 1, None, today);
        let todays: Vec<_> = grid.iter().filter(|c| c.is_today).collect();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].day, Some(17));
        // January 17th, 2025 is a Friday
        assert_eq!(todays[0].weekday, Some(5));

        let other = build_month_grid_on(2025, 2, None, today);
        assert!(other.iter().all(|c| !c.is_today));

        // Same month number in a different year is not "today"
        let last_year = build_month_grid_on(2024, 1, None, today);
        assert!(last_year.iter().all(|c| !c.is_today));
    }

    #[test]
    fn test_month_grid_selected_flag() {
        let grid = build_month_grid_on(2024, 2, Some(date(2024, 2, 29)), date(2025, 1, 1));
        let selected: Vec<_> = grid.iter().filter(|c| c.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].day, Some(29));

        let grid = build_month_grid_on(2024, 3, Some(date(2024, 2, 29)), date(2025, 1, 1));
        assert!(grid.iter().all(|c| !c.is_selected));
    }

    #[test]
    fn test_month_grid_length_matches_weekday_plus_days() {
        for month in 1..=12 {
            let grid = build_month_grid_on(2024, month, None, date(2000, 1, 1));
            let first = date(2024, month, 1);
            let expected = first.weekday().num_days_from_sunday()
                + days_in_month(2024, month).unwrap();
            assert_eq!(grid.len(), expected as usize, "month {}", month);
        }
    }

    #[test]
    fn test_month_grid_invalid_month() {
        assert!(build_month_grid_on(2025, 13, None, date(2025, 1, 1)).is_empty());
    }

    #[test]
    fn test_month_grid_current_month_has_one_today() {
        let today = Local::now().date_naive();
        let grid = build_month_grid_on(today.year(), today.month(), None, today);
        assert_eq!(grid.iter().filter(|c| c.is_today).count(), 1);
    }

    #[test]
    fn test_start_of_week() {
        // Friday -> preceding Sunday
        assert_eq!(start_of_week(date(2025, 1, 17)), date(2025, 1, 12));
        // Sunday stays
        assert_eq!(start_of_week(date(2025, 1, 12)), date(2025, 1, 12));
        // Crosses a month boundary
        assert_eq!(start_of_week(date(2025, 3, 1)), date(2025, 2, 23));
    }

    #[test]
    fn test_build_week() {
        let week = build_week_on(date(2025, 1, 17), date(2025, 1, 15));
        assert_eq!(week.len(), 7);
        let labels: Vec<_> = week.iter().map(|d| d.label).collect();
        assert_eq!(labels, WEEKDAY_LABELS.to_vec());
        let days: Vec<_> = week.iter().map(|d| d.day_number).collect();
        assert_eq!(days, vec![12, 13, 14, 15, 16, 17, 18]);
        assert!(week[3].is_today);
        assert_eq!(week.iter().filter(|d| d.is_today).count(), 1);
    }

    #[test]
    fn test_build_week_across_year_end() {
        let week = build_week_on(date(2025, 1, 1), date(2020, 1, 1));
        let days: Vec<_> = week.iter().map(|d| d.day_number).collect();
        assert_eq!(days, vec![29, 30, 31, 1, 2, 3, 4]);
        assert!(week.iter().all(|d| !d.is_today));
    }

    #[test]
    fn test_year_dates_regular_day() {
        let dates = year_dates_for_month_day(1, 17, 2025);
        assert_eq!(dates.len(), 10);
        assert_eq!(dates[0], "2025-01-17");
        assert_eq!(dates[9], "2016-01-17");
    }

    #[test]
    fn test_year_dates_leap_day_from_leap_year() {
        let dates = year_dates_for_month_day(2, 29, 2024);
        assert_eq!(dates, vec!["2024-02-29", "2020-02-29", "2016-02-29"]);
    }

    #[test]
    fn test_year_dates_leap_day_from_common_year() {
        let dates = year_dates_for_month_day(2, 29, 2023);
        assert_eq!(dates, vec!["2020-02-29", "2016-02-29"]);
        assert!(!dates.iter().any(|d| d.starts_with("2023")
            || d.starts_with("2022")
            || d.starts_with("2021")
            || d.starts_with("2019")));
    }

    #[test]
    fn test_year_dates_impossible_day() {
        assert!(year_dates_for_month_day(4, 31, 2025).is_empty());
        assert!(year_dates_for_month_day(13, 1, 2025).is_empty());
    }
}
