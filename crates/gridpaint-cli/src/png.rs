//! Deterministic PNG writer for grid previews.
//!
//! Uses fixed compression and filter settings so the same grid always
//! produces byte-identical output.

use gridpaint_spec::RgbRaster;
use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Write an RGB raster to a PNG file.
pub fn write_rgb(raster: &RgbRaster, path: &Path) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_rgb_to_writer(raster, writer)
}

/// Write an RGB raster to any writer.
pub fn write_rgb_to_writer<W: Write>(raster: &RgbRaster, writer: W) -> Result<(), PngError> {
    let expected = raster.width as usize * raster.height as usize * 3;
    if raster.data.len() != expected {
        return Err(PngError::InvalidDimensions(format!(
            "Expected {} bytes for {}x{} RGB, got {}",
            expected,
            raster.width,
            raster.height,
            raster.data.len()
        )));
    }

    let mut encoder = Encoder::new(writer, raster.width, raster.height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(Compression::Default);
    encoder.set_filter(FilterType::NoFilter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&raster.data)?;

    Ok(())
}
