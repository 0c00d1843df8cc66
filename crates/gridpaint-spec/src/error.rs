//! Error types for grid validation, message rendering, and image conversion.

use thiserror::Error;

/// Error codes reported by grid and message validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Grid shape errors (E001-E005)
    /// E001: Grid does not have exactly 7 rows
    WrongRowCount,
    /// E002: A row does not have exactly 52 cells
    WrongColumnCount,
    /// E003: A cell is not an integer
    NonIntegerCell,
    /// E004: A cell is outside the 0-4 range
    LevelOutOfRange,
    /// E005: Document or row is not a JSON array
    NotAnArray,

    // Message errors (E010-E011)
    /// E010: Message has no renderable characters
    UnsupportedMessage,
    /// E011: Message is wider than the 52-week timeline
    MessageTooWide,

    // Image errors (E020)
    /// E020: Image buffer has the wrong dimensions
    ImageDimensions,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::WrongRowCount => "E001",
            ErrorCode::WrongColumnCount => "E002",
            ErrorCode::NonIntegerCell => "E003",
            ErrorCode::LevelOutOfRange => "E004",
            ErrorCode::NotAnArray => "E005",
            ErrorCode::UnsupportedMessage => "E010",
            ErrorCode::MessageTooWide => "E011",
            ErrorCode::ImageDimensions => "E020",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for conditions that do not block a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Grid produces zero commits
    EmptyGrid,
    /// W002: Source image has more than five distinct shades
    TooManyShades,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::EmptyGrid => "W001",
            WarningCode::TooManyShades => "W002",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the offending element (e.g., "\[3\]\[17\]").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Result of grid validation.
///
/// Any error invalidates the whole grid; there is no partial acceptance.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Errors produced while turning JSON into a [`crate::Grid`].
#[derive(Debug, Error)]
pub enum GridError {
    /// The document is not valid JSON.
    #[error("not a valid JSON document: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The document is JSON but not a valid 7x52 grid of levels 0-4.
    #[error("invalid grid: must be 7x52 with integers 0-4 ({} error(s))", .0.errors.len())]
    Invalid(ValidationResult),
}

/// Rejections for a rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// Nothing in the message maps to a glyph.
    #[error("message contains no supported characters")]
    Unsupported,

    /// The rendered message does not fit the 52-week timeline.
    #[error("message too long ({width} > {max} columns)")]
    TooWide { width: usize, max: usize },
}

impl MessageError {
    /// Returns the error code for reporting.
    pub fn code(&self) -> ErrorCode {
        match self {
            MessageError::Unsupported => ErrorCode::UnsupportedMessage,
            MessageError::TooWide { .. } => ErrorCode::MessageTooWide,
        }
    }
}

/// Errors from converting pixel data into a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The luma buffer is not 52x7.
    #[error("image must be {expected_width}x{expected_height} pixels, got {width}x{height}")]
    Dimensions {
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },

    /// The buffer length does not match the declared dimensions.
    #[error("expected {expected} luma bytes, got {actual}")]
    BufferLength { expected: usize, actual: usize },
}

impl ConvertError {
    /// Returns the error code for reporting.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ImageDimensions
    }
}
