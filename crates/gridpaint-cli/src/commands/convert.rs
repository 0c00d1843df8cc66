//! Convert command implementation
//!
//! Turns a raster image into a grid file, optionally with a preview PNG.

use anyhow::{Context, Result};
use colored::Colorize;
use gridpaint_spec::render_preview;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::reporting;
use crate::input::load_image_grid;
use crate::png::write_rgb;

/// Default output path for the converted grid.
pub const DEFAULT_OUTPUT: &str = "grid.json";

/// Run the convert command
///
/// # Arguments
/// * `image_path` - Path to the source image
/// * `out` - Output grid path (default `grid.json`)
/// * `preview` - Optional preview PNG path
/// * `cell_size` - Preview cell size in pixels
///
/// # Returns
/// Exit code: 0 on success, 1 if the image cannot be read or converted
pub fn run(
    image_path: &str,
    out: Option<&str>,
    preview: Option<&str>,
    cell_size: u32,
) -> Result<ExitCode> {
    println!("{} {}", "Converting:".cyan().bold(), image_path);

    let conversion = match load_image_grid(Path::new(image_path)) {
        Ok(conversion) => conversion,
        Err(err) => {
            reporting::print_image_error(&err);
            return Ok(ExitCode::from(1));
        }
    };

    let values: Vec<String> = conversion
        .distinct_values
        .iter()
        .map(|v| v.to_string())
        .collect();
    println!("{} {}", "Distinct values:".dimmed(), values.join(", "));
    reporting::print_warnings(&conversion.warnings);

    println!("\n{}", conversion.grid.to_text());

    let out = out.unwrap_or(DEFAULT_OUTPUT);
    let json = conversion.grid.to_json()?;
    fs::write(out, json).with_context(|| format!("Failed to write grid to '{}'", out))?;
    println!(
        "\n{} Grid saved to '{}' ({} commit(s))",
        "SUCCESS".green().bold(),
        out,
        conversion.grid.total_commits()
    );

    if let Some(preview) = preview {
        let raster = render_preview(&conversion.grid, cell_size);
        write_rgb(&raster, Path::new(preview))
            .with_context(|| format!("Failed to write preview to '{}'", preview))?;
        println!("{} Preview saved to '{}'", "SUCCESS".green().bold(), preview);
    }

    Ok(ExitCode::SUCCESS)
}
