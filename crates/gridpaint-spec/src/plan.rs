//! Mapping grids and bitmaps onto calendar dates.
//!
//! Column `j` is the week starting `anchor + 7j` days and row `i` is the
//! `i`-th day of that week, so iterating week by week and then day by day
//! already yields increasing dates.

use chrono::NaiveDate;

use crate::bitmap::Bitmap;
use crate::calendar::cell_date;
use crate::error::MessageError;
use crate::font::check_fits;
use crate::grid::{Grid, IntensityLevel, COLS, ROWS};

/// One day of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanEntry {
    /// Calendar date of the commits.
    pub date: NaiveDate,
    /// Intensity of the source cell.
    pub level: IntensityLevel,
    /// Number of commits to create on `date`.
    pub repeat_count: u32,
}

/// Ordered `(date, repeat_count)` sequence derived from a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitPlan {
    anchor: NaiveDate,
    entries: Vec<PlanEntry>,
}

impl CommitPlan {
    /// First date of the window.
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// All entries, one per grid cell, in week-then-day order.
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    /// Entries with at least one commit.
    pub fn active_entries(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|e| e.repeat_count > 0)
    }

    /// Total number of commits the plan will create.
    pub fn total_commits(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.repeat_count)).sum()
    }

    /// Commit totals per week column.
    pub fn column_totals(&self) -> [u64; COLS] {
        let mut totals = [0u64; COLS];
        for (i, entry) in self.entries.iter().enumerate() {
            totals[i / ROWS] += u64::from(entry.repeat_count);
        }
        totals
    }

    /// One date per commit, in plan order.
    pub fn commit_dates(&self) -> Vec<NaiveDate> {
        self.entries
            .iter()
            .flat_map(|e| std::iter::repeat(e.date).take(e.repeat_count as usize))
            .collect()
    }

    /// Last date covered by the plan.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.entries.last().map(|e| e.date)
    }
}

/// Maps every cell of a validated grid to a dated plan entry.
pub fn map_grid_to_plan(grid: &Grid, anchor: NaiveDate) -> CommitPlan {
    let mut entries = Vec::with_capacity(COLS * ROWS);
    for col in 0..COLS {
        for row in 0..ROWS {
            let level = grid.level(row, col);
            entries.push(PlanEntry {
                date: cell_date(anchor, row, col),
                level,
                repeat_count: level.repeat_count(),
            });
        }
    }
    CommitPlan { anchor, entries }
}

/// Maps the set cells of a message bitmap to commit dates.
///
/// The width check runs before any mapping. The result is sorted
/// ascending, one commit per date.
///
/// # Errors
/// Returns [`MessageError::TooWide`] for bitmaps over 52 columns and
/// [`MessageError::Unsupported`] for empty bitmaps.
pub fn map_bitmap_to_dates(bitmap: &Bitmap, anchor: NaiveDate) -> Result<Vec<NaiveDate>, MessageError> {
    check_fits(bitmap)?;

    let mut dates = Vec::with_capacity(bitmap.set_count());
    for col in 0..bitmap.width() {
        for row in 0..ROWS {
            if bitmap.get(row, col) {
                dates.push(cell_date(anchor, row, col));
            }
        }
    }
    dates.sort_unstable();
    Ok(dates)
}
