//! Reusable grids and dates.

use chrono::NaiveDate;
use gridpaint_spec::{Grid, IntensityLevel, COLS, ROWS};

/// A Wednesday; its anchor is Sunday 2023-06-11.
pub fn reference_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 5).expect("valid date")
}

/// Anchor date for [`reference_today`].
pub fn reference_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 11).expect("valid date")
}

/// A grid with a single lit cell.
pub fn single_cell(row: usize, col: usize, level: IntensityLevel) -> Grid {
    let mut grid = Grid::blank();
    grid.set(row, col, level);
    grid
}

/// A diagonal stripe cycling through every level.
pub fn diagonal() -> Grid {
    let mut grid = Grid::blank();
    for col in 0..COLS {
        let row = col % ROWS;
        let level = IntensityLevel::ALL[col % IntensityLevel::ALL.len()];
        grid.set(row, col, level);
    }
    grid
}
