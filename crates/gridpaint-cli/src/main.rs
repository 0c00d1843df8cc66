//! Gridpaint CLI - Draw on a contribution calendar with backdated commits
//!
//! This binary provides commands for validating, converting, previewing and
//! editing grids, and for turning grids or messages into commits.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use cli_args::{Cli, Commands};
use gridpaint_cli::commands;
use gridpaint_cli::commands::reset::ResetOptions;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { grid, json } => commands::validate::run(&grid, json),
        Commands::Paint { grid, commit } => commands::paint::run(&grid, &commit.into()),
        Commands::Text {
            message,
            word_spacing,
            keep_case,
            commit,
        } => commands::text::run(&message, word_spacing, keep_case, &commit.into()),
        Commands::Convert {
            image,
            out,
            preview,
            cell_size,
        } => commands::convert::run(&image, out.as_deref(), preview.as_deref(), cell_size),
        Commands::Preview {
            grid,
            out,
            cell_size,
        } => commands::preview::run(&grid, &out, cell_size),
        Commands::Edit { grid, out } => commands::edit::run(grid.as_deref(), &out),
        Commands::Reset {
            branch,
            remote,
            no_push,
            yes,
        } => commands::reset::run(&ResetOptions {
            branch,
            remote,
            push: !no_push,
            yes,
            ..ResetOptions::default()
        }),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
