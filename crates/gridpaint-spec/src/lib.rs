//! gridpaint core library
//!
//! This crate provides the types and pure transformations behind gridpaint:
//! a 7x52 grid of intensity levels, or a message rendered in a 5x7 bitmap
//! font, is mapped onto the dates of a 52-week window so that an external
//! version-control tool can be driven to create that many backdated commits
//! per day.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use gridpaint_spec::{compute_anchor_date, map_grid_to_plan, Grid, IntensityLevel};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
//! let anchor = compute_anchor_date(today);
//!
//! let mut grid = Grid::blank();
//! grid.set(0, 0, IntensityLevel::Medium);
//!
//! let plan = map_grid_to_plan(&grid, anchor);
//! assert_eq!(plan.total_commits(), 10);
//! ```
//!
//! # Modules
//!
//! - [`grid`]: Grid type, intensity levels, and JSON validation
//! - [`calendar`]: Anchor date arithmetic
//! - [`plan`]: Grid and bitmap to date mapping
//! - [`font`]: 5x7 font and message rendering
//! - [`bitmap`]: Seven-row boolean bitmaps
//! - [`convert`]: Grayscale to grid discretization
//! - [`preview`]: Palette and raster preview
//! - [`editor`]: Pointer-driven editing controller
//! - [`error`]: Error and warning types

pub mod bitmap;
pub mod calendar;
pub mod convert;
pub mod editor;
pub mod error;
pub mod font;
pub mod grid;
pub mod plan;
pub mod preview;

// Re-export commonly used types at the crate root
pub use bitmap::Bitmap;
pub use calendar::{cell_date, commit_timestamp, compute_anchor_date, week_start};
pub use convert::{grid_from_luma, level_for_luma, Conversion};
pub use editor::{Button, GridEditor};
pub use error::{
    ConvertError, ErrorCode, GridError, MessageError, ValidationError, ValidationResult,
    ValidationWarning, WarningCode,
};
pub use font::{
    message_bitmap, render_message, render_word, DEFAULT_WORD_SPACING, SUPPORTED_CHARACTERS,
};
pub use grid::{is_valid_grid, validate_grid, Grid, IntensityLevel, COLS, REPEAT_COUNTS, ROWS};
pub use plan::{map_bitmap_to_dates, map_grid_to_plan, CommitPlan, PlanEntry};
pub use preview::{hex_color, palette_color, render_preview, RgbRaster, PALETTE};
