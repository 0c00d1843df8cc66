//! Validate command implementation
//!
//! Checks a grid file without touching any repository.

use anyhow::Result;
use colored::Colorize;
use gridpaint_spec::ValidationError;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use crate::input::{validate_grid_file, InputError};

/// JSON output for `validate --json`.
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    /// Whether the grid is valid.
    pub ok: bool,
    /// Path that was checked.
    pub path: String,
    /// Commits the grid would create (valid grids only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_commits: Option<u64>,
    /// Validation or input errors.
    pub errors: Vec<JsonError>,
}

/// One error in [`ValidateOutput`].
#[derive(Debug, Serialize)]
pub struct JsonError {
    /// Error code, e.g. `E004`, or `INPUT` for file problems.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// JSON path of the offending element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&ValidationError> for JsonError {
    fn from(err: &ValidationError) -> Self {
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            path: err.path.clone(),
        }
    }
}

/// Run the validate command
///
/// # Arguments
/// * `grid_path` - Path to the grid JSON file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid or unreadable
pub fn run(grid_path: &str, json_output: bool) -> Result<ExitCode> {
    let output = check(grid_path);
    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_human(&output);
    }
    Ok(if output.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Validates a grid file and collects the outcome.
pub fn check(grid_path: &str) -> ValidateOutput {
    let path = Path::new(grid_path);
    let mut output = ValidateOutput {
        ok: false,
        path: grid_path.to_string(),
        total_commits: None,
        errors: Vec::new(),
    };

    match validate_grid_file(path) {
        Ok(validation) if validation.is_ok() => {
            output.ok = true;
            // Re-parse into a typed grid for the commit total.
            if let Ok(grid) = crate::input::load_grid(path) {
                output.total_commits = Some(grid.total_commits());
            }
        }
        Ok(validation) => {
            output.errors = validation.errors.iter().map(JsonError::from).collect();
        }
        Err(err) => output.errors.push(input_error_to_json(&err)),
    }
    output
}

fn input_error_to_json(err: &InputError) -> JsonError {
    JsonError {
        code: "INPUT".to_string(),
        message: err.to_string(),
        path: None,
    }
}

fn print_human(output: &ValidateOutput) {
    println!("{} {}", "Validating:".cyan().bold(), output.path);

    if output.ok {
        let total = output.total_commits.unwrap_or_default();
        println!(
            "\n{} Grid is valid ({}x{}, {} commit(s))",
            "SUCCESS".green().bold(),
            gridpaint_spec::ROWS,
            gridpaint_spec::COLS,
            total
        );
        return;
    }

    println!("\n{}", "Errors:".red().bold());
    for err in &output.errors {
        let location = err
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!("  {} [{}]{}: {}", "x".red(), err.code, location.dimmed(), err.message);
    }
    println!(
        "\n{} Invalid grid. Must be 7x52 with integers 0-4.",
        "FAILED".red().bold()
    );
}
