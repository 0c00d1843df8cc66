//! Grayscale to grid discretization.
//!
//! Pixels are bucketed by fixed thresholds at 51/102/153/204. Darker pixels
//! map to lower levels, so black is no activity and white is the brightest
//! shade. Decoding and resizing the source image happen in the caller.

use crate::error::{ConvertError, ValidationWarning, WarningCode};
use crate::grid::{Grid, IntensityLevel, COLS, ROWS};

/// Upper bound (inclusive) of each level's luma range, for levels 0-3.
pub const LUMA_THRESHOLDS: [u8; 4] = [51, 102, 153, 204];

/// Number of distinct shades a grid can hold.
pub const MAX_SHADES: usize = IntensityLevel::ALL.len();

/// Result of converting a luma buffer.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The discretized grid.
    pub grid: Grid,
    /// Sorted distinct luma values seen in the source.
    pub distinct_values: Vec<u8>,
    /// Non-fatal observations about the source.
    pub warnings: Vec<ValidationWarning>,
}

/// Maps one grayscale value to an intensity level.
pub fn level_for_luma(luma: u8) -> IntensityLevel {
    let level = LUMA_THRESHOLDS
        .iter()
        .position(|&upper| luma <= upper)
        .unwrap_or(LUMA_THRESHOLDS.len());
    IntensityLevel::from_u8(level as u8).unwrap_or(IntensityLevel::Max)
}

/// Sorted distinct values in a luma buffer.
pub fn distinct_luma_values(pixels: &[u8]) -> Vec<u8> {
    let mut seen = [false; 256];
    for &p in pixels {
        seen[p as usize] = true;
    }
    (0..=255u8).filter(|&v| seen[v as usize]).collect()
}

/// Converts a row-major 52x7 luma buffer into a grid.
///
/// # Errors
/// Returns [`ConvertError::Dimensions`] unless the buffer is exactly 52x7,
/// and [`ConvertError::BufferLength`] when the byte count does not match.
pub fn grid_from_luma(width: u32, height: u32, pixels: &[u8]) -> Result<Conversion, ConvertError> {
    if width as usize != COLS || height as usize != ROWS {
        return Err(ConvertError::Dimensions {
            width,
            height,
            expected_width: COLS as u32,
            expected_height: ROWS as u32,
        });
    }
    if pixels.len() != COLS * ROWS {
        return Err(ConvertError::BufferLength {
            expected: COLS * ROWS,
            actual: pixels.len(),
        });
    }

    let mut grid = Grid::blank();
    for (i, &luma) in pixels.iter().enumerate() {
        grid.set(i / COLS, i % COLS, level_for_luma(luma));
    }

    let distinct_values = distinct_luma_values(pixels);
    let mut warnings = Vec::new();
    if distinct_values.len() > MAX_SHADES {
        warnings.push(ValidationWarning::new(
            WarningCode::TooManyShades,
            format!(
                "{} distinct gray values found; consider posterizing the image to {} shades",
                distinct_values.len(),
                MAX_SHADES
            ),
        ));
    }

    Ok(Conversion {
        grid,
        distinct_values,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(level_for_luma(0), IntensityLevel::None);
        assert_eq!(level_for_luma(51), IntensityLevel::None);
        assert_eq!(level_for_luma(52), IntensityLevel::Low);
        assert_eq!(level_for_luma(102), IntensityLevel::Low);
        assert_eq!(level_for_luma(103), IntensityLevel::Medium);
        assert_eq!(level_for_luma(153), IntensityLevel::Medium);
        assert_eq!(level_for_luma(154), IntensityLevel::High);
        assert_eq!(level_for_luma(204), IntensityLevel::High);
        assert_eq!(level_for_luma(205), IntensityLevel::Max);
        assert_eq!(level_for_luma(255), IntensityLevel::Max);
    }

    #[test]
    fn test_rejects_wrong_dimensions() {
        let err = grid_from_luma(53, 7, &[0; 53 * 7]).unwrap_err();
        assert!(matches!(err, ConvertError::Dimensions { width: 53, .. }));
        let err = grid_from_luma(52, 7, &[0; 10]).unwrap_err();
        assert_eq!(
            err,
            ConvertError::BufferLength {
                expected: 364,
                actual: 10
            }
        );
    }

    #[test]
    fn test_row_major_layout() {
        let mut pixels = vec![0u8; COLS * ROWS];
        pixels[COLS + 3] = 255;
        let conversion = grid_from_luma(52, 7, &pixels).unwrap();
        assert_eq!(conversion.grid.level(1, 3), IntensityLevel::Max);
        assert_eq!(conversion.grid.total_commits(), 30);
        assert_eq!(conversion.distinct_values, vec![0, 255]);
        assert!(conversion.warnings.is_empty());
    }

    #[test]
    fn test_warns_on_many_shades() {
        let pixels: Vec<u8> = (0..COLS * ROWS).map(|i| (i % 6) as u8 * 40).collect();
        let conversion = grid_from_luma(52, 7, &pixels).unwrap();
        assert_eq!(conversion.distinct_values.len(), 6);
        assert_eq!(conversion.warnings.len(), 1);
        assert_eq!(conversion.warnings[0].code, WarningCode::TooManyShades);
    }
}
