//! Paint command implementation
//!
//! Creates backdated commits so the contribution calendar shows a grid.

use anyhow::Result;
use colored::Colorize;
use gridpaint_spec::{compute_anchor_date, map_grid_to_plan, CommitPlan, WarningCode};
use log::info;
use std::io::{self, BufRead};
use std::path::Path;
use std::process::ExitCode;

use super::commit_flow::{confirm_and_commit, CommitOptions};
use super::reporting;
use crate::backends::{GitBackend, VcsBackend};
use crate::committer::GRID_COMMIT_MESSAGE;
use crate::input::load_grid;

/// Run the paint command against the current repository.
///
/// # Arguments
/// * `grid_path` - Path to the grid JSON file
/// * `options` - Shared commit options
///
/// # Returns
/// Exit code: 0 on success or when declined, 1 on any error
pub fn run(grid_path: &str, options: &CommitOptions) -> Result<ExitCode> {
    let mut backend = GitBackend::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_with(grid_path, options, &mut backend, &mut input)
}

/// Run the paint command with an explicit backend and answer source.
pub fn run_with<B, R>(
    grid_path: &str,
    options: &CommitOptions,
    backend: &mut B,
    input: &mut R,
) -> Result<ExitCode>
where
    B: VcsBackend + ?Sized,
    R: BufRead + ?Sized,
{
    println!("{} {}", "Loading:".cyan().bold(), grid_path);

    let grid = match load_grid(Path::new(grid_path)) {
        Ok(grid) => grid,
        Err(err) => {
            reporting::print_input_error(&err);
            return Ok(ExitCode::from(1));
        }
    };

    let plan = map_grid_to_plan(&grid, compute_anchor_date(options.today()));
    let total = plan.total_commits();
    info!(
        "plan: anchor={} total={} active_days={}",
        plan.anchor(),
        total,
        plan.active_entries().count()
    );
    print_window(&plan);

    if options.dry_run {
        print_plan(&plan);
        println!(
            "\n{} Dry run: {} commit(s) would be created.",
            "OK".green().bold(),
            total
        );
        return Ok(ExitCode::SUCCESS);
    }

    if total == 0 {
        println!(
            "  {} [{}]: grid produces no commits; nothing to do",
            "!".yellow(),
            WarningCode::EmptyGrid
        );
        return Ok(ExitCode::SUCCESS);
    }

    let summary = format!(
        "Will create {} commits based on the grid in '{}'.",
        total, grid_path
    );
    confirm_and_commit(
        backend,
        input,
        &plan.commit_dates(),
        &summary,
        options.message_or(GRID_COMMIT_MESSAGE),
        options.yes,
    )
}

fn print_window(plan: &CommitPlan) {
    if let Some(last) = plan.last_date() {
        println!(
            "{} {} to {}",
            "Window:".dimmed(),
            plan.anchor(),
            last
        );
    }
}

fn print_plan(plan: &CommitPlan) {
    for entry in plan.active_entries() {
        println!(
            "  {} {} x{} (level {})",
            "->".green(),
            entry.date,
            entry.repeat_count,
            entry.level
        );
    }
}
