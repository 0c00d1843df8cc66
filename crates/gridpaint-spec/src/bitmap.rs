//! Seven-row boolean bitmaps for rendered text.

use crate::grid::ROWS;

/// A 7-row bitmap of arbitrary width.
///
/// Rows are days of the week and columns are weeks, matching the grid
/// orientation, so a bitmap maps directly onto the timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitmap {
    rows: [Vec<bool>; ROWS],
}

impl Bitmap {
    /// Creates an empty (zero-width) bitmap.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an all-clear bitmap of the given width.
    pub fn blank(width: usize) -> Self {
        Self {
            rows: std::array::from_fn(|_| vec![false; width]),
        }
    }

    /// Builds a bitmap from rows of `0`/`1` bytes.
    ///
    /// Returns `None` when the rows have different widths.
    pub fn from_rows(rows: [&[u8]; ROWS]) -> Option<Self> {
        let width = rows[0].len();
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }
        Some(Self {
            rows: rows.map(|r| r.iter().map(|&b| b != 0).collect()),
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// True when the bitmap has no columns.
    pub fn is_empty(&self) -> bool {
        self.width() == 0
    }

    /// Returns whether `(row, col)` is set; out-of-range cells are clear.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Sets `(row, col)`. Out-of-range writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = value;
        }
    }

    /// Number of set cells.
    pub fn set_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&b| b).count()
    }

    /// Appends `gap` blank columns followed by `other`.
    pub fn append(&mut self, other: &Bitmap, gap: usize) {
        for (row, src) in self.rows.iter_mut().zip(other.rows.iter()) {
            row.extend(std::iter::repeat(false).take(gap));
            row.extend_from_slice(src);
        }
    }

    /// Joins bitmaps left to right with `gap` blank columns between them.
    pub fn join<'a>(parts: impl IntoIterator<Item = &'a Bitmap>, gap: usize) -> Bitmap {
        let mut out = Bitmap::empty();
        for (i, part) in parts.into_iter().enumerate() {
            out.append(part, if i == 0 { 0 } else { gap });
        }
        out
    }

    /// Renders the bitmap as `#` and `.` characters, one line per row.
    pub fn to_text(&self) -> String {
        self.rows
            .iter()
            .map(|r| r.iter().map(|&b| if b { '#' } else { '.' }).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bitmap() {
        let bitmap = Bitmap::empty();
        assert!(bitmap.is_empty());
        assert_eq!(bitmap.set_count(), 0);
        assert!(!bitmap.get(0, 0));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let ok: [&[u8]; ROWS] = [&[1, 0], &[0, 1], &[0, 0], &[0, 0], &[0, 0], &[0, 0], &[1, 1]];
        let bitmap = Bitmap::from_rows(ok).unwrap();
        assert_eq!(bitmap.width(), 2);
        assert_eq!(bitmap.set_count(), 4);

        let ragged: [&[u8]; ROWS] = [&[1, 0], &[0], &[0, 0], &[0, 0], &[0, 0], &[0, 0], &[1, 1]];
        assert!(Bitmap::from_rows(ragged).is_none());
    }

    #[test]
    fn test_join_inserts_gaps_between_parts_only() {
        let mut a = Bitmap::blank(2);
        a.set(0, 0, true);
        let mut b = Bitmap::blank(3);
        b.set(6, 2, true);

        let joined = Bitmap::join([&a, &b], 1);
        assert_eq!(joined.width(), 6);
        assert!(joined.get(0, 0));
        assert!(!joined.get(0, 2));
        assert!(joined.get(6, 5));
    }

    #[test]
    fn test_to_text() {
        let mut bitmap = Bitmap::blank(3);
        bitmap.set(1, 1, true);
        let text = bitmap.to_text();
        assert_eq!(text.lines().nth(1), Some(".#."));
    }
}
