//! The 7x52 contribution grid and its validation.
//!
//! A grid file is a bare JSON document holding 7 rows (Sunday through
//! Saturday) of 52 integers (weeks), each an intensity level 0-4. There is
//! no envelope and no metadata.

use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::Value;

use crate::error::{ErrorCode, GridError, ValidationError, ValidationResult};

/// Number of rows (days of the week, Sunday = 0).
pub const ROWS: usize = 7;

/// Number of columns (weeks in the timeline).
pub const COLS: usize = 52;

/// Total number of cells in a grid.
pub const CELLS: usize = ROWS * COLS;

/// Repeat count for each intensity level, indexed by level.
pub const REPEAT_COUNTS: [u32; 5] = [0, 1, 10, 20, 30];

/// Intensity of a single grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum IntensityLevel {
    /// No activity.
    #[default]
    None = 0,
    /// First shade.
    Low = 1,
    /// Second shade.
    Medium = 2,
    /// Third shade.
    High = 3,
    /// Fourth (brightest) shade.
    Max = 4,
}

impl IntensityLevel {
    /// All levels in ascending order.
    pub const ALL: [IntensityLevel; 5] = [
        IntensityLevel::None,
        IntensityLevel::Low,
        IntensityLevel::Medium,
        IntensityLevel::High,
        IntensityLevel::Max,
    ];

    /// Converts a raw integer into a level, if it is in range.
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Returns the raw integer value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Number of commits a cell at this level produces.
    pub fn repeat_count(self) -> u32 {
        REPEAT_COUNTS[self as usize]
    }

    /// Next level up, clamped at [`IntensityLevel::Max`].
    pub fn saturating_increment(self) -> Self {
        Self::from_u8(self.as_u8() + 1).unwrap_or(IntensityLevel::Max)
    }

    /// Next level down, clamped at [`IntensityLevel::None`].
    pub fn saturating_decrement(self) -> Self {
        self.as_u8()
            .checked_sub(1)
            .and_then(Self::from_u8)
            .unwrap_or(IntensityLevel::None)
    }
}

impl std::fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// A validated 7x52 grid of intensity levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[IntensityLevel; COLS]; ROWS],
}

impl Default for Grid {
    fn default() -> Self {
        Self::blank()
    }
}

impl Grid {
    /// Creates an all-zero grid.
    pub fn blank() -> Self {
        Self {
            cells: [[IntensityLevel::None; COLS]; ROWS],
        }
    }

    /// Creates a grid with every cell at the same level.
    pub fn filled(level: IntensityLevel) -> Self {
        Self {
            cells: [[level; COLS]; ROWS],
        }
    }

    /// Creates a grid from a row-major cell array.
    pub fn from_cells(cells: [[IntensityLevel; COLS]; ROWS]) -> Self {
        Self { cells }
    }

    /// Returns the level at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<IntensityLevel> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns the level at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row >= 7` or `col >= 52`.
    pub fn level(&self, row: usize, col: usize) -> IntensityLevel {
        self.cells[row][col]
    }

    /// Sets the level at `(row, col)`. Returns false when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, level: IntensityLevel) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = level;
                true
            }
            None => false,
        }
    }

    /// Returns a row (one weekday across all weeks).
    pub fn row(&self, row: usize) -> &[IntensityLevel; COLS] {
        &self.cells[row]
    }

    /// Returns a column (one week, Sunday through Saturday).
    pub fn column(&self, col: usize) -> [IntensityLevel; ROWS] {
        std::array::from_fn(|row| self.cells[row][col])
    }

    /// Iterates over all cells in row-major order.
    pub fn levels(&self) -> impl Iterator<Item = IntensityLevel> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Sum of repeat counts over all cells.
    pub fn total_commits(&self) -> u64 {
        self.levels().map(|l| u64::from(l.repeat_count())).sum()
    }

    /// Parses and validates a grid from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, GridError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Validates a JSON value and converts it into a grid.
    pub fn from_value(value: &Value) -> Result<Self, GridError> {
        let validation = validate_grid(value);
        if !validation.is_ok() {
            return Err(GridError::Invalid(validation));
        }

        let mut grid = Grid::blank();
        // Shape and ranges were checked above.
        if let Some(rows) = value.as_array() {
            for (i, row) in rows.iter().enumerate() {
                for (j, cell) in row.as_array().into_iter().flatten().enumerate() {
                    if let Some(level) = cell
                        .as_u64()
                        .and_then(|v| u8::try_from(v).ok())
                        .and_then(IntensityLevel::from_u8)
                    {
                        grid.cells[i][j] = level;
                    }
                }
            }
        }
        Ok(grid)
    }

    /// Serializes the grid as a bare nested-array JSON document.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Renders the grid as one line of digits per row.
    pub fn to_text(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|l| char::from(b'0' + l.as_u8()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut rows = serializer.serialize_seq(Some(ROWS))?;
        for row in &self.cells {
            let raw: Vec<u8> = row.iter().map(|l| l.as_u8()).collect();
            rows.serialize_element(&raw)?;
        }
        rows.end()
    }
}

/// Validates a candidate grid document.
///
/// Checks for exactly 7 rows, exactly 52 cells per row, and integer cells
/// in `[0, 4]`. Every violation is collected.
pub fn validate_grid(value: &Value) -> ValidationResult {
    let mut result = ValidationResult::default();

    let Some(rows) = value.as_array() else {
        result.add_error(ValidationError::with_path(
            ErrorCode::NotAnArray,
            format!("grid must be an array of rows, got {}", json_kind(value)),
            "$",
        ));
        return result;
    };

    if rows.len() != ROWS {
        result.add_error(ValidationError::with_path(
            ErrorCode::WrongRowCount,
            format!("grid must have {} rows, got {}", ROWS, rows.len()),
            "$",
        ));
    }

    for (i, row) in rows.iter().enumerate() {
        let Some(cells) = row.as_array() else {
            result.add_error(ValidationError::with_path(
                ErrorCode::NotAnArray,
                format!("row must be an array, got {}", json_kind(row)),
                format!("[{}]", i),
            ));
            continue;
        };

        if cells.len() != COLS {
            result.add_error(ValidationError::with_path(
                ErrorCode::WrongColumnCount,
                format!("row must have {} cells, got {}", COLS, cells.len()),
                format!("[{}]", i),
            ));
        }

        for (j, cell) in cells.iter().enumerate() {
            validate_cell(cell, i, j, &mut result);
        }
    }

    result
}

/// Pass/fail form of [`validate_grid`].
pub fn is_valid_grid(value: &Value) -> bool {
    validate_grid(value).is_ok()
}

fn validate_cell(cell: &Value, row: usize, col: usize, result: &mut ValidationResult) {
    let path = format!("[{}][{}]", row, col);

    // Floats such as 2.0 are rejected along with strings and bools.
    let integer = match cell {
        Value::Number(n) if n.is_i64() || n.is_u64() => n.as_i64(),
        _ => {
            result.add_error(ValidationError::with_path(
                ErrorCode::NonIntegerCell,
                format!("cell must be an integer, got {}", json_kind(cell)),
                path,
            ));
            return;
        }
    };

    match integer {
        Some(v) if (0..=4).contains(&v) => {}
        _ => result.add_error(ValidationError::with_path(
            ErrorCode::LevelOutOfRange,
            format!("cell must be in 0-4, got {}", cell),
            path,
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn grid_value(level: u8) -> Value {
        json!(vec![vec![level; COLS]; ROWS])
    }

    #[test]
    fn test_repeat_count_table() {
        let counts: Vec<u32> = IntensityLevel::ALL.iter().map(|l| l.repeat_count()).collect();
        assert_eq!(counts, vec![0, 1, 10, 20, 30]);
    }

    #[test]
    fn test_level_clamping() {
        assert_eq!(IntensityLevel::Max.saturating_increment(), IntensityLevel::Max);
        assert_eq!(IntensityLevel::None.saturating_decrement(), IntensityLevel::None);
        assert_eq!(IntensityLevel::Low.saturating_increment(), IntensityLevel::Medium);
        assert_eq!(IntensityLevel::High.saturating_decrement(), IntensityLevel::Medium);
        assert_eq!(IntensityLevel::from_u8(5), None);
    }

    #[test]
    fn test_valid_grids_pass() {
        for level in 0..=4 {
            assert!(is_valid_grid(&grid_value(level)), "level {}", level);
        }
    }

    #[test]
    fn test_wrong_row_count_fails() {
        let value = json!(vec![vec![0; COLS]; 6]);
        let result = validate_grid(&value);
        assert!(!result.is_ok());
        assert_eq!(result.errors[0].code, ErrorCode::WrongRowCount);

        let value = json!(vec![vec![0; COLS]; 8]);
        assert!(!is_valid_grid(&value));
    }

    #[test]
    fn test_wrong_column_count_fails() {
        let mut rows = vec![vec![0; COLS]; ROWS];
        rows[4].push(0);
        let result = validate_grid(&json!(rows));
        assert!(!result.is_ok());
        assert_eq!(result.errors[0].code, ErrorCode::WrongColumnCount);
        assert_eq!(result.errors[0].path.as_deref(), Some("[4]"));
    }

    #[test]
    fn test_out_of_range_cell_fails() {
        let mut value = grid_value(1);
        value[2][10] = json!(5);
        value[3][11] = json!(-1);
        let result = validate_grid(&value);
        assert_eq!(result.errors.len(), 2);
        assert!(result
            .errors
            .iter()
            .all(|e| e.code == ErrorCode::LevelOutOfRange));
        assert_eq!(result.errors[0].path.as_deref(), Some("[2][10]"));
    }

    #[test]
    fn test_non_integer_cells_fail() {
        for bad in [json!(2.0), json!("2"), json!(true), json!(null)] {
            let mut value = grid_value(0);
            value[0][0] = bad.clone();
            let result = validate_grid(&value);
            assert!(!result.is_ok(), "{} should be rejected", bad);
            assert_eq!(result.errors[0].code, ErrorCode::NonIntegerCell);
        }
    }

    #[test]
    fn test_non_array_document_fails() {
        assert!(!is_valid_grid(&json!({"grid": []})));
        assert!(!is_valid_grid(&json!(3)));
        let mut rows: Vec<Value> = vec![json!(vec![0; COLS]); ROWS];
        rows[1] = json!("row");
        assert!(!is_valid_grid(&Value::Array(rows)));
    }

    #[test]
    fn test_from_json_str_round_trips() {
        let mut grid = Grid::blank();
        grid.set(0, 0, IntensityLevel::Max);
        grid.set(6, 51, IntensityLevel::Low);
        let json = grid.to_json().unwrap();
        assert!(json.starts_with("[[4,0,"));
        let parsed = Grid::from_json_str(&json).unwrap();
        assert_eq!(parsed, grid);
    }

    #[test]
    fn test_from_json_str_distinguishes_errors() {
        assert!(matches!(
            Grid::from_json_str("[[1,2"),
            Err(GridError::JsonParse(_))
        ));
        assert!(matches!(
            Grid::from_json_str("[[1,2]]"),
            Err(GridError::Invalid(_))
        ));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = Grid::blank();
        assert!(!grid.set(7, 0, IntensityLevel::Low));
        assert!(!grid.set(0, 52, IntensityLevel::Low));
        assert_eq!(grid.get(7, 0), None);
    }

    #[test]
    fn test_total_commits() {
        assert_eq!(Grid::blank().total_commits(), 0);
        assert_eq!(Grid::filled(IntensityLevel::Max).total_commits(), 364 * 30);
    }

    #[test]
    fn test_column_reads_one_week() {
        let mut grid = Grid::blank();
        grid.set(3, 9, IntensityLevel::High);
        let column = grid.column(9);
        assert_eq!(column[3], IntensityLevel::High);
        assert_eq!(column.iter().filter(|l| **l != IntensityLevel::None).count(), 1);
    }

    #[test]
    fn test_to_text() {
        let text = Grid::filled(IntensityLevel::Medium).to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[0], "2".repeat(COLS));
    }
}
