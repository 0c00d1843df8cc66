use colored::Colorize;
use gridpaint_spec::{MessageError, ValidationError, ValidationWarning, SUPPORTED_CHARACTERS};

use crate::input::{ImageInputError, InputError};

/// Print validation errors, one per line.
pub(crate) fn print_validation_errors(errors: &[ValidationError]) {
    for err in errors {
        let location = err
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red(),
            err.code,
            location.dimmed(),
            err.message
        );
    }
}

/// Print validation warnings, one per line.
pub(crate) fn print_warnings(warnings: &[ValidationWarning]) {
    for warn in warnings {
        println!("  {} [{}]: {}", "!".yellow(), warn.code, warn.message);
    }
}

/// Print a grid loading error, including every validation error.
pub(crate) fn print_input_error(err: &InputError) {
    eprintln!("{} {}", "error:".red().bold(), err);
    if let InputError::Invalid { validation, .. } = err {
        print_validation_errors(&validation.errors);
    }
}

/// One-line description of a message rejection, prefixed with its code.
pub(crate) fn message_error_line(err: &MessageError) -> String {
    match err {
        MessageError::Unsupported => {
            format!("[{}] Message contains unsupported characters.", err.code())
        }
        MessageError::TooWide { width, max } => format!(
            "[{}] Message too long ({} > {} columns). Shorten it.",
            err.code(),
            width,
            max
        ),
    }
}

/// Print a message rejection.
pub(crate) fn print_message_error(err: &MessageError) {
    eprintln!("{} {}", "error:".red().bold(), message_error_line(err));
    if let MessageError::Unsupported = err {
        let supported: Vec<String> = SUPPORTED_CHARACTERS.chars().map(String::from).collect();
        eprintln!("Supported characters: {}", supported.join(" "));
    }
}

/// One-line description of an image loading error.
///
/// Conversion failures carry their code; file errors do not.
pub(crate) fn image_error_line(err: &ImageInputError) -> String {
    match err {
        ImageInputError::Convert(inner) => format!("[{}] {}", inner.code(), inner),
        other => other.to_string(),
    }
}

/// Print an image loading error.
pub(crate) fn print_image_error(err: &ImageInputError) {
    eprintln!("{} {}", "error:".red().bold(), image_error_line(err));
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpaint_spec::ConvertError;
    use std::path::PathBuf;

    #[test]
    fn test_message_errors_carry_codes() {
        assert_eq!(
            message_error_line(&MessageError::Unsupported),
            "[E010] Message contains unsupported characters."
        );
        assert_eq!(
            message_error_line(&MessageError::TooWide { width: 60, max: 52 }),
            "[E011] Message too long (60 > 52 columns). Shorten it."
        );
    }

    #[test]
    fn test_image_conversion_error_carries_code() {
        let err = ImageInputError::Convert(ConvertError::Dimensions {
            width: 10,
            height: 3,
            expected_width: 52,
            expected_height: 7,
        });
        assert_eq!(
            image_error_line(&err),
            "[E020] image must be 52x7 pixels, got 10x3"
        );

        let missing = ImageInputError::NotFound {
            path: PathBuf::from("art.png"),
        };
        assert_eq!(image_error_line(&missing), "image 'art.png' not found");
    }
}
