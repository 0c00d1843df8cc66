//! Pointer-driven grid editing.
//!
//! `GridEditor` owns the grid being edited together with the last touched
//! cell, so a front end only has to forward pointer events. A primary press
//! raises a cell by one level, a secondary press lowers it; dragging applies
//! the same change once per newly entered cell.

use crate::grid::{Grid, IntensityLevel, COLS, ROWS};

/// Default edge length of one cell on screen, in pixels.
pub const CELL_SIZE: u32 = 30;

/// Largest accepted cell edge length, in pixels.
pub const MAX_CELL_SIZE: u32 = 256;

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Raises the level.
    Primary,
    /// Lowers the level.
    Secondary,
}

/// Editing controller for one grid.
#[derive(Debug, Clone)]
pub struct GridEditor {
    grid: Grid,
    last_cell: Option<(usize, usize)>,
    cell_size: u32,
    dirty: bool,
}

impl Default for GridEditor {
    fn default() -> Self {
        Self::new(Grid::blank())
    }
}

impl GridEditor {
    /// Creates an editor for `grid` with the default cell size.
    pub fn new(grid: Grid) -> Self {
        Self::with_cell_size(grid, CELL_SIZE)
    }

    /// Creates an editor with a custom cell size, clamped to `1..=MAX_CELL_SIZE`.
    pub fn with_cell_size(grid: Grid, cell_size: u32) -> Self {
        Self {
            grid,
            last_cell: None,
            cell_size: cell_size.clamp(1, MAX_CELL_SIZE),
            dirty: false,
        }
    }

    /// The grid being edited.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the editor and returns the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Cell last changed by a press or drag.
    pub fn last_cell(&self) -> Option<(usize, usize)> {
        self.last_cell
    }

    /// True when the grid changed since creation or the last [`mark_saved`](Self::mark_saved).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears the dirty flag.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Canvas size in pixels as `(width, height)`.
    pub fn canvas_size(&self) -> (u32, u32) {
        (COLS as u32 * self.cell_size, ROWS as u32 * self.cell_size)
    }

    /// Maps a canvas position to `(row, col)`, or `None` outside the grid.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        if x < 0 || y < 0 {
            return None;
        }
        let col = x as usize / self.cell_size as usize;
        let row = y as usize / self.cell_size as usize;
        (row < ROWS && col < COLS).then_some((row, col))
    }

    /// Handles a button press at a canvas position.
    ///
    /// Returns the changed cell and its new level.
    pub fn press(&mut self, x: i32, y: i32, button: Button) -> Option<(usize, usize, IntensityLevel)> {
        let (row, col) = self.cell_at(x, y)?;
        let level = self.apply(row, col, button);
        self.last_cell = Some((row, col));
        Some((row, col, level))
    }

    /// Handles pointer motion with a button held.
    ///
    /// Does nothing while the pointer stays on the last changed cell.
    pub fn drag(&mut self, x: i32, y: i32, button: Button) -> Option<(usize, usize, IntensityLevel)> {
        let cell = self.cell_at(x, y)?;
        if Some(cell) == self.last_cell {
            return None;
        }
        self.press(x, y, button)
    }

    /// Raises a cell by one level, clamped at 4.
    pub fn increment(&mut self, row: usize, col: usize) -> Option<IntensityLevel> {
        self.change(row, col, IntensityLevel::saturating_increment)
    }

    /// Lowers a cell by one level, clamped at 0.
    pub fn decrement(&mut self, row: usize, col: usize) -> Option<IntensityLevel> {
        self.change(row, col, IntensityLevel::saturating_decrement)
    }

    /// Resets every cell to zero.
    pub fn clear(&mut self) {
        self.grid = Grid::blank();
        self.last_cell = None;
        self.dirty = true;
    }

    fn apply(&mut self, row: usize, col: usize, button: Button) -> IntensityLevel {
        let step = match button {
            Button::Primary => IntensityLevel::saturating_increment,
            Button::Secondary => IntensityLevel::saturating_decrement,
        };
        self.change(row, col, step).unwrap_or_default()
    }

    fn change(
        &mut self,
        row: usize,
        col: usize,
        step: fn(IntensityLevel) -> IntensityLevel,
    ) -> Option<IntensityLevel> {
        let current = self.grid.get(row, col)?;
        let next = step(current);
        if next != current {
            self.grid.set(row, col, next);
            self.dirty = true;
        }
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at() {
        let editor = GridEditor::default();
        assert_eq!(editor.cell_at(0, 0), Some((0, 0)));
        assert_eq!(editor.cell_at(29, 29), Some((0, 0)));
        assert_eq!(editor.cell_at(30, 61), Some((2, 1)));
        assert_eq!(editor.cell_at(52 * 30, 0), None);
        assert_eq!(editor.cell_at(0, 7 * 30), None);
        assert_eq!(editor.cell_at(-1, 5), None);
        assert_eq!(editor.canvas_size(), (1560, 210));
    }

    #[test]
    fn test_cell_size_is_clamped() {
        let huge = GridEditor::with_cell_size(Grid::blank(), u32::MAX);
        assert_eq!(
            huge.canvas_size(),
            (52 * MAX_CELL_SIZE, 7 * MAX_CELL_SIZE)
        );
        assert_eq!(huge.cell_at(i32::MAX, 0), None);

        let tiny = GridEditor::with_cell_size(Grid::blank(), 0);
        assert_eq!(tiny.canvas_size(), (52, 7));
    }

    #[test]
    fn test_press_increments_and_clamps() {
        let mut editor = GridEditor::default();
        for _ in 0..6 {
            editor.press(5, 5, Button::Primary);
        }
        assert_eq!(editor.grid().level(0, 0), IntensityLevel::Max);
        assert!(editor.is_dirty());
        for _ in 0..6 {
            editor.press(5, 5, Button::Secondary);
        }
        assert_eq!(editor.grid().level(0, 0), IntensityLevel::None);
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut editor = GridEditor::default();
        assert_eq!(editor.press(10_000, 5, Button::Primary), None);
        assert!(!editor.is_dirty());
        assert_eq!(editor.last_cell(), None);
    }

    #[test]
    fn test_drag_changes_each_cell_once() {
        let mut editor = GridEditor::default();
        editor.press(0, 0, Button::Primary);
        // Still inside cell (0, 0): no further change.
        assert_eq!(editor.drag(10, 10, Button::Primary), None);
        assert_eq!(editor.drag(20, 20, Button::Primary), None);
        assert_eq!(editor.grid().level(0, 0), IntensityLevel::Low);

        // Entering (0, 1) changes it once.
        assert_eq!(
            editor.drag(35, 10, Button::Primary),
            Some((0, 1, IntensityLevel::Low))
        );
        assert_eq!(editor.drag(40, 10, Button::Primary), None);
        assert_eq!(editor.last_cell(), Some((0, 1)));
    }

    #[test]
    fn test_increment_decrement_by_index() {
        let mut editor = GridEditor::default();
        assert_eq!(editor.increment(6, 51), Some(IntensityLevel::Low));
        assert_eq!(editor.decrement(6, 51), Some(IntensityLevel::None));
        assert_eq!(editor.increment(7, 0), None);
        editor.mark_saved();
        assert!(!editor.is_dirty());
        // Decrementing a zero cell is not a change.
        editor.decrement(0, 0);
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::blank();
        grid.set(3, 3, IntensityLevel::High);
        let mut editor = GridEditor::new(grid);
        editor.clear();
        assert_eq!(editor.into_grid(), Grid::blank());
    }
}
