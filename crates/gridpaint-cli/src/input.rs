//! Loading grids from JSON files and raster images.

use gridpaint_spec::{
    grid_from_luma, validate_grid, ConvertError, Conversion, Grid, GridError, ValidationResult,
    COLS, ROWS,
};
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a grid file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file does not exist.
    #[error("file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("file '{}' is not a valid JSON file: {source}", path.display())]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON is not a 7x52 grid of levels 0-4.
    #[error("invalid grid in '{}': must be 7x52 with integers 0-4", path.display())]
    Invalid {
        path: PathBuf,
        validation: ValidationResult,
    },
}

/// Errors that can occur while loading an image as a grid.
#[derive(Debug, Error)]
pub enum ImageInputError {
    /// The file does not exist.
    #[error("image '{}' not found", path.display())]
    NotFound { path: PathBuf },

    /// The image could not be decoded.
    #[error("failed to decode image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The resized buffer did not convert.
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Reads a JSON document from disk.
pub fn load_json(path: &Path) -> Result<serde_json::Value, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            InputError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            InputError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&content).map_err(|source| InputError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads and validates a grid file.
pub fn load_grid(path: &Path) -> Result<Grid, InputError> {
    let value = load_json(path)?;
    Grid::from_value(&value).map_err(|e| match e {
        GridError::Invalid(validation) => InputError::Invalid {
            path: path.to_path_buf(),
            validation,
        },
        GridError::JsonParse(source) => InputError::JsonParse {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Loads a grid file and returns the full validation result.
pub fn validate_grid_file(path: &Path) -> Result<ValidationResult, InputError> {
    let value = load_json(path)?;
    Ok(validate_grid(&value))
}

/// Decodes any supported raster image and discretizes it into a grid.
///
/// The image is resized to 52x7 with nearest-neighbour sampling and
/// converted to 8-bit grayscale first.
pub fn load_image_grid(path: &Path) -> Result<Conversion, ImageInputError> {
    if !path.exists() {
        return Err(ImageInputError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path).map_err(|source| ImageInputError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let luma = img
        .resize_exact(COLS as u32, ROWS as u32, FilterType::Nearest)
        .to_luma8();
    let (width, height) = luma.dimensions();
    Ok(grid_from_luma(width, height, luma.as_raw())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpaint_spec::IntensityLevel;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_grid(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, InputError::NotFound { .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[[0, 1,").unwrap();
        let err = load_grid(&path).unwrap_err();
        assert!(matches!(err, InputError::JsonParse { .. }));
        assert!(err.to_string().contains("not a valid JSON file"));
    }

    #[test]
    fn test_invalid_grid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("small.json");
        std::fs::write(&path, "[[0, 1], [2]]").unwrap();
        match load_grid(&path).unwrap_err() {
            InputError::Invalid { validation, .. } => assert!(!validation.errors.is_empty()),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_grid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grid.json");
        let grid = Grid::filled(IntensityLevel::Low);
        std::fs::write(&path, grid.to_json().unwrap()).unwrap();
        assert_eq!(load_grid(&path).unwrap(), grid);
        assert!(validate_grid_file(&path).unwrap().is_ok());
    }

    #[test]
    fn test_image_is_resized_and_thresholded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("art.png");
        // 104x14 image: left half black, right half white.
        let img = image::GrayImage::from_fn(104, 14, |x, _| {
            image::Luma([if x < 52 { 0 } else { 255 }])
        });
        img.save(&path).unwrap();

        let conversion = load_image_grid(&path).unwrap();
        assert_eq!(conversion.grid.level(0, 0), IntensityLevel::None);
        assert_eq!(conversion.grid.level(6, 51), IntensityLevel::Max);
        assert_eq!(conversion.distinct_values, vec![0, 255]);
    }

    #[test]
    fn test_image_not_found() {
        let dir = tempdir().unwrap();
        let err = load_image_grid(&dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, ImageInputError::NotFound { .. }));
    }
}
