//! Anchor date arithmetic for the 52-week timeline.

use chrono::{Datelike, Days, NaiveDate};

use crate::grid::COLS;

/// Days between the anchor Sunday and the Sunday of the current week.
pub const ANCHOR_OFFSET_DAYS: u64 = (COLS as u64 - 1) * 7;

/// Hour of day (local time) stamped on every generated commit.
pub const COMMIT_HOUR: u32 = 12;

/// Returns the Sunday on or before `today`.
///
/// Saturates at [`NaiveDate::MIN`] when that Sunday is not representable.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    // Monday = 0, so Sunday = 6 and (6 + 1) % 7 = 0.
    let days_since_sunday = (u64::from(today.weekday().num_days_from_monday()) + 1) % 7;
    today
        .checked_sub_days(Days::new(days_since_sunday))
        .unwrap_or(NaiveDate::MIN)
}

/// Computes the first Sunday of the 52-week window ending on the week
/// containing `today`.
///
/// Saturates at [`NaiveDate::MIN`] near the start of the calendar.
pub fn compute_anchor_date(today: NaiveDate) -> NaiveDate {
    week_start(today)
        .checked_sub_days(Days::new(ANCHOR_OFFSET_DAYS))
        .unwrap_or(NaiveDate::MIN)
}

/// Date of the cell at `(row, col)` relative to `anchor`.
///
/// Saturates at [`NaiveDate::MAX`] near the end of the calendar.
pub fn cell_date(anchor: NaiveDate, row: usize, col: usize) -> NaiveDate {
    anchor
        .checked_add_days(Days::new((col * 7 + row) as u64))
        .unwrap_or(NaiveDate::MAX)
}

/// Formats the timestamp passed to git for a commit on `date`.
pub fn commit_timestamp(date: NaiveDate) -> String {
    format!("{} {:02}:00:00", date.format("%Y-%m-%d"), COMMIT_HOUR)
}
