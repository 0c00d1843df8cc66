//! Raster preview of a grid using the contribution calendar palette.

use crate::grid::{Grid, IntensityLevel, COLS, ROWS};

/// Default edge length of one cell in the preview, in pixels.
pub const CELL_SIZE: u32 = 10;

/// Largest accepted cell edge length, in pixels.
pub const MAX_CELL_SIZE: u32 = 64;

/// RGB color for each intensity level, indexed by level.
pub const PALETTE: [[u8; 3]; 5] = [
    [22, 27, 34],
    [14, 68, 41],
    [0, 109, 50],
    [38, 166, 65],
    [57, 211, 83],
];

/// Returns the palette color for a level.
pub fn palette_color(level: IntensityLevel) -> [u8; 3] {
    PALETTE[level.as_u8() as usize]
}

/// Returns the palette color for a level as `#rrggbb`.
pub fn hex_color(level: IntensityLevel) -> String {
    let [r, g, b] = palette_color(level);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// An 8-bit RGB pixel buffer, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbRaster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 3` bytes.
    pub data: Vec<u8>,
}

impl RgbRaster {
    /// Returns the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 3) as usize;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }
}

/// Renders each cell as a `cell_size` square in its palette color.
///
/// `cell_size` is clamped to `1..=MAX_CELL_SIZE`.
pub fn render_preview(grid: &Grid, cell_size: u32) -> RgbRaster {
    let cell = cell_size.clamp(1, MAX_CELL_SIZE) as usize;
    let width = COLS * cell;
    let height = ROWS * cell;
    let mut data = Vec::with_capacity(width * height * 3);

    for y in 0..height {
        let row = grid.row(y / cell);
        for x in 0..width {
            data.extend_from_slice(&palette_color(row[x / cell]));
        }
    }

    RgbRaster {
        width: width as u32,
        height: height as u32,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preview_dimensions() {
        let raster = render_preview(&Grid::blank(), CELL_SIZE);
        assert_eq!((raster.width, raster.height), (520, 70));
        assert_eq!(raster.data.len(), 520 * 70 * 3);
        assert_eq!(raster.pixel(519, 69), Some(PALETTE[0]));
        assert_eq!(raster.pixel(520, 0), None);
    }

    #[test]
    fn test_cells_fill_their_square() {
        let mut grid = Grid::blank();
        grid.set(1, 2, IntensityLevel::Max);
        let raster = render_preview(&grid, 10);
        assert_eq!(raster.pixel(20, 10), Some([57, 211, 83]));
        assert_eq!(raster.pixel(29, 19), Some([57, 211, 83]));
        assert_eq!(raster.pixel(30, 19), Some(PALETTE[0]));
        assert_eq!(raster.pixel(29, 20), Some(PALETTE[0]));
    }

    #[test]
    fn test_zero_cell_size() {
        let raster = render_preview(&Grid::blank(), 0);
        assert_eq!((raster.width, raster.height), (52, 7));
    }

    #[test]
    fn test_oversized_cell_size_is_clamped() {
        let raster = render_preview(&Grid::blank(), u32::MAX);
        assert_eq!(
            (raster.width, raster.height),
            (52 * MAX_CELL_SIZE, 7 * MAX_CELL_SIZE)
        );
        assert_eq!(
            raster.data.len(),
            (raster.width * raster.height * 3) as usize
        );
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(IntensityLevel::None), "#161b22");
        assert_eq!(hex_color(IntensityLevel::Max), "#39d353");
    }
}
