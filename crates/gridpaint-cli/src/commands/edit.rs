//! Edit command implementation
//!
//! A line-oriented front end for [`GridEditor`]. Each input line is one
//! command:
//!
//! ```text
//! + ROW COL [N]       raise a cell N times (default 1)
//! - ROW COL [N]       lower a cell N times (default 1)
//! press X Y [BUTTON]  pointer press at canvas pixel (BUTTON: primary|secondary)
//! drag X Y [BUTTON]   pointer drag to canvas pixel
//! show                print the grid
//! clear               reset every cell to 0
//! save [FILE]         write the grid as JSON
//! quit                leave (refuses once when there are unsaved changes)
//! help                list commands
//! ```

use anyhow::Result;
use colored::Colorize;
use gridpaint_spec::{
    hex_color, palette_color, Button, Grid, GridEditor, IntensityLevel, COLS, ROWS,
};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

use super::reporting;
use crate::input::load_grid;

/// Default file written by `save` without an argument.
pub const DEFAULT_OUTPUT: &str = "grid.json";

const HELP: &str = "\
commands:
  + ROW COL [N]       raise a cell
  - ROW COL [N]       lower a cell
  press X Y [BUTTON]  pointer press (primary|secondary)
  drag X Y [BUTTON]   pointer drag
  show                print the grid
  clear               reset every cell to 0
  save [FILE]         write the grid as JSON
  quit                leave the editor
  help                this text";

/// One parsed editor command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    Increment { row: usize, col: usize, times: u32 },
    Decrement { row: usize, col: usize, times: u32 },
    Press { x: i32, y: i32, button: Button },
    Drag { x: i32, y: i32, button: Button },
    Show,
    Clear,
    Save(Option<PathBuf>),
    Quit,
    Help,
}

/// Errors from parsing an editor command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditCommandError {
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("'{command}' expects {expected}")]
    Arguments {
        command: String,
        expected: &'static str,
    },

    #[error("invalid number '{0}'")]
    Number(String),

    #[error("cell ({row}, {col}) is outside the 7x52 grid")]
    OutOfRange { row: usize, col: usize },

    #[error("unknown button '{0}' (use primary or secondary)")]
    Button(String),
}

impl EditCommand {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, EditCommandError> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = parts.collect();

        let command = match head {
            "+" | "-" => {
                let (row, col, times) = parse_cell_args(head, &args)?;
                if head == "+" {
                    Self::Increment { row, col, times }
                } else {
                    Self::Decrement { row, col, times }
                }
            }
            "press" | "drag" => {
                let (x, y, button) = parse_pointer_args(head, &args)?;
                if head == "press" {
                    Self::Press { x, y, button }
                } else {
                    Self::Drag { x, y, button }
                }
            }
            "show" => Self::Show,
            "clear" => Self::Clear,
            "save" => match args.as_slice() {
                [] => Self::Save(None),
                [file] => Self::Save(Some(PathBuf::from(file))),
                _ => {
                    return Err(EditCommandError::Arguments {
                        command: head.to_string(),
                        expected: "at most one FILE",
                    })
                }
            },
            "quit" | "exit" | "q" => Self::Quit,
            "help" | "?" => Self::Help,
            other => return Err(EditCommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_number<T: std::str::FromStr>(s: &str) -> Result<T, EditCommandError> {
    s.parse().map_err(|_| EditCommandError::Number(s.to_string()))
}

fn parse_cell_args(head: &str, args: &[&str]) -> Result<(usize, usize, u32), EditCommandError> {
    let (row, col, times) = match args {
        [row, col] => (parse_number(row)?, parse_number(col)?, 1),
        [row, col, times] => (parse_number(row)?, parse_number(col)?, parse_number(times)?),
        _ => {
            return Err(EditCommandError::Arguments {
                command: head.to_string(),
                expected: "ROW COL [N]",
            })
        }
    };
    if row >= ROWS || col >= COLS {
        return Err(EditCommandError::OutOfRange { row, col });
    }
    Ok((row, col, times))
}

fn parse_pointer_args(head: &str, args: &[&str]) -> Result<(i32, i32, Button), EditCommandError> {
    let (x, y, button) = match args {
        [x, y] => (x, y, None),
        [x, y, button] => (x, y, Some(*button)),
        _ => {
            return Err(EditCommandError::Arguments {
                command: head.to_string(),
                expected: "X Y [BUTTON]",
            })
        }
    };
    let button = match button {
        None | Some("primary") | Some("left") => Button::Primary,
        Some("secondary") | Some("right") => Button::Secondary,
        Some(other) => return Err(EditCommandError::Button(other.to_string())),
    };
    Ok((parse_number(x)?, parse_number(y)?, button))
}

/// Run the edit command on stdin/stdout.
///
/// # Arguments
/// * `grid_path` - Grid to start from (blank when absent)
/// * `out` - Default file for `save`
///
/// # Returns
/// Exit code: 0 on quit or end of input, 1 if the starting grid is invalid
pub fn run(grid_path: Option<&str>, out: &str) -> Result<ExitCode> {
    let grid = match grid_path {
        Some(path) => match load_grid(Path::new(path)) {
            Ok(grid) => grid,
            Err(err) => {
                reporting::print_input_error(&err);
                return Ok(ExitCode::from(1));
            }
        },
        None => Grid::blank(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut editor = GridEditor::new(grid);
    run_with(&mut editor, Path::new(out), &mut input, &mut stdout)
}

/// Drives `editor` from `input` until `quit` or end of input.
pub fn run_with<R, W>(
    editor: &mut GridEditor,
    out: &Path,
    input: &mut R,
    output: &mut W,
) -> Result<ExitCode>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    writeln!(output, "{}", "Grid editor. Type 'help' for commands.".dimmed())?;
    let mut quit_warned = false;
    let mut line = String::new();

    loop {
        write!(output, "> ")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match EditCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(output, "{} {}", "error:".red().bold(), err)?;
                continue;
            }
        };

        if command != EditCommand::Quit {
            quit_warned = false;
        }

        match command {
            EditCommand::Increment { row, col, times } => {
                for _ in 0..times {
                    editor.increment(row, col);
                }
                report_cell(output, editor, row, col)?;
            }
            EditCommand::Decrement { row, col, times } => {
                for _ in 0..times {
                    editor.decrement(row, col);
                }
                report_cell(output, editor, row, col)?;
            }
            EditCommand::Press { x, y, button } => match editor.press(x, y, button) {
                Some((row, col, _)) => report_cell(output, editor, row, col)?,
                None => writeln!(output, "  {} ({}, {}) is off the canvas", "!".yellow(), x, y)?,
            },
            EditCommand::Drag { x, y, button } => {
                if let Some((row, col, _)) = editor.drag(x, y, button) {
                    report_cell(output, editor, row, col)?;
                }
            }
            EditCommand::Show => show(output, editor.grid())?,
            EditCommand::Clear => {
                editor.clear();
                writeln!(output, "  {} grid cleared", "->".green())?;
            }
            EditCommand::Save(path) => {
                let path = path.as_deref().unwrap_or(out);
                if let Err(err) = fs::write(path, editor.grid().to_json()?) {
                    writeln!(
                        output,
                        "{} failed to save '{}': {}",
                        "error:".red().bold(),
                        path.display(),
                        err
                    )?;
                    continue;
                }
                editor.mark_saved();
                writeln!(
                    output,
                    "{} Grid saved to '{}'",
                    "SUCCESS".green().bold(),
                    path.display()
                )?;
            }
            EditCommand::Quit => {
                if editor.is_dirty() && !quit_warned {
                    writeln!(
                        output,
                        "  {} unsaved changes; 'save' first or 'quit' again to discard",
                        "!".yellow()
                    )?;
                    quit_warned = true;
                    continue;
                }
                break;
            }
            EditCommand::Help => writeln!(output, "{}", HELP)?,
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn report_cell<W: Write + ?Sized>(
    output: &mut W,
    editor: &GridEditor,
    row: usize,
    col: usize,
) -> io::Result<()> {
    let level = editor.grid().level(row, col);
    writeln!(output, "  {} [{}][{}] = {}", "->".green(), row, col, level)
}

fn show<W: Write + ?Sized>(output: &mut W, grid: &Grid) -> io::Result<()> {
    for row in 0..ROWS {
        let line: String = grid
            .row(row)
            .iter()
            .map(|&level| {
                let [r, g, b] = palette_color(level);
                level.to_string().on_truecolor(r, g, b).to_string()
            })
            .collect();
        writeln!(output, "  {}", line)?;
    }
    writeln!(output, "  {}", legend().dimmed())?;
    writeln!(output, "  {} commit(s)", grid.total_commits())
}

/// Level-to-color key printed under the grid, e.g. `0=#161b22`.
fn legend() -> String {
    IntensityLevel::ALL
        .iter()
        .map(|&level| format!("{}={}", level, hex_color(level)))
        .collect::<Vec<_>>()
        .join("  ")
}
