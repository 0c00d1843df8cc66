//! Preview command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use gridpaint_spec::render_preview;
use std::path::Path;
use std::process::ExitCode;

use super::reporting;
use crate::input::load_grid;
use crate::png::write_rgb;

/// Default preview output path.
pub const DEFAULT_OUTPUT: &str = "github_preview.png";

/// Run the preview command
///
/// # Arguments
/// * `grid_path` - Path to the grid JSON file
/// * `out` - Output PNG path
/// * `cell_size` - Cell edge length in pixels
///
/// # Returns
/// Exit code: 0 on success, 1 if the grid cannot be loaded
pub fn run(grid_path: &str, out: &str, cell_size: u32) -> Result<ExitCode> {
    println!("{} {}", "Loading:".cyan().bold(), grid_path);

    let grid = match load_grid(Path::new(grid_path)) {
        Ok(grid) => grid,
        Err(err) => {
            reporting::print_input_error(&err);
            return Ok(ExitCode::from(1));
        }
    };

    let raster = render_preview(&grid, cell_size);
    write_rgb(&raster, Path::new(out))
        .with_context(|| format!("Failed to write preview to '{}'", out))?;

    println!(
        "{} Preview saved to '{}' ({}x{})",
        "SUCCESS".green().bold(),
        out,
        raster.width,
        raster.height
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpaint_spec::{Grid, IntensityLevel, PALETTE};
    use tempfile::tempdir;

    #[test]
    fn test_preview_colors_cells() {
        let dir = tempdir().unwrap();
        let grid_path = dir.path().join("grid.json");
        let mut grid = Grid::blank();
        grid.set(6, 51, IntensityLevel::Max);
        std::fs::write(&grid_path, grid.to_json().unwrap()).unwrap();

        let out = dir.path().join("preview.png");
        let code = run(grid_path.to_str().unwrap(), out.to_str().unwrap(), 4).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let img = image::open(&out).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (208, 28));
        assert_eq!(img.get_pixel(0, 0).0, PALETTE[0]);
        assert_eq!(img.get_pixel(207, 27).0, PALETTE[4]);
    }

    #[test]
    fn test_preview_invalid_grid() {
        let dir = tempdir().unwrap();
        let grid_path = dir.path().join("grid.json");
        std::fs::write(&grid_path, "[[1, 2]]").unwrap();
        let out = dir.path().join("preview.png");

        let code = run(grid_path.to_str().unwrap(), out.to_str().unwrap(), 10).unwrap();
        assert_eq!(code, ExitCode::from(1));
        assert!(!out.exists());
    }
}
