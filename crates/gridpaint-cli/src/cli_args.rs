//! CLI argument definitions for the gridpaint command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use gridpaint_cli::commands::CommitOptions;
use gridpaint_spec::DEFAULT_WORD_SPACING;

/// Gridpaint - Draw pictures and text on a contribution calendar
#[derive(Parser)]
#[command(name = "gridpaint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by commands that create commits.
#[derive(Args, Debug, Clone)]
pub(crate) struct CommitArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Print the planned dates and exit without touching the repository
    #[arg(long)]
    pub dry_run: bool,

    /// Reference date (YYYY-MM-DD) used instead of today
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Commit message override
    #[arg(long)]
    pub commit_message: Option<String>,
}

impl From<CommitArgs> for CommitOptions {
    fn from(args: CommitArgs) -> Self {
        Self {
            message: args.commit_message,
            today: args.today,
            yes: args.yes,
            dry_run: args.dry_run,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Validate a grid file (7 rows x 52 columns of levels 0-4)
    Validate {
        /// Path to the grid JSON file
        #[arg(short, long)]
        grid: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Create backdated commits that paint a grid onto the calendar
    Paint {
        /// Path to the grid JSON file
        #[arg(short, long)]
        grid: String,

        #[command(flatten)]
        commit: CommitArgs,
    },

    /// Create backdated commits that spell a message
    Text {
        /// Message to display (letters A-Z and spaces)
        #[arg(short, long)]
        message: String,

        /// Blank columns between words
        #[arg(long, default_value_t = DEFAULT_WORD_SPACING)]
        word_spacing: usize,

        /// Do not uppercase the message before rendering
        #[arg(long)]
        keep_case: bool,

        #[command(flatten)]
        commit: CommitArgs,
    },

    /// Convert an image into a grid file
    Convert {
        /// Path to the source image
        #[arg(short, long)]
        image: String,

        /// Output grid path (default: grid.json)
        #[arg(short, long)]
        out: Option<String>,

        /// Also write a preview PNG to this path
        #[arg(long)]
        preview: Option<String>,

        /// Preview cell size in pixels
        #[arg(
            long,
            default_value_t = gridpaint_spec::preview::CELL_SIZE,
            value_parser = clap::value_parser!(u32).range(1..=gridpaint_spec::preview::MAX_CELL_SIZE as i64)
        )]
        cell_size: u32,
    },

    /// Render a grid as a PNG preview
    Preview {
        /// Path to the grid JSON file
        #[arg(short, long)]
        grid: String,

        /// Output PNG path
        #[arg(short, long, default_value = gridpaint_cli::commands::preview::DEFAULT_OUTPUT)]
        out: String,

        /// Cell size in pixels
        #[arg(
            long,
            default_value_t = gridpaint_spec::preview::CELL_SIZE,
            value_parser = clap::value_parser!(u32).range(1..=gridpaint_spec::preview::MAX_CELL_SIZE as i64)
        )]
        cell_size: u32,
    },

    /// Edit a grid interactively from the terminal
    Edit {
        /// Grid to start from (default: blank)
        #[arg(short, long)]
        grid: Option<String>,

        /// File written by `save` without an argument
        #[arg(short, long, default_value = gridpaint_cli::commands::edit::DEFAULT_OUTPUT)]
        out: String,
    },

    /// Replace a branch's history with a single commit and force-push it
    Reset {
        /// Branch to reset
        #[arg(long, default_value = "main")]
        branch: String,

        /// Remote to force-push to
        #[arg(long, default_value = "origin")]
        remote: String,

        /// Rewrite locally without pushing
        #[arg(long)]
        no_push: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
