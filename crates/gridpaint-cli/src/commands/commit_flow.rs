//! Shared repository check, confirmation, and commit loop.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use colored::Colorize;
use std::io::{self, BufRead};
use std::process::ExitCode;

use crate::backends::VcsBackend;
use crate::committer::{apply_dates, CommitError};
use crate::confirm::confirm;

/// Options shared by commands that create commits.
#[derive(Debug, Clone, Default)]
pub struct CommitOptions {
    /// Commit message override.
    pub message: Option<String>,
    /// Reference date for the anchor (default: local today).
    pub today: Option<NaiveDate>,
    /// Skip the confirmation prompt.
    pub yes: bool,
    /// Print the plan and stop before touching the repository.
    pub dry_run: bool,
}

impl CommitOptions {
    /// The reference date for this run.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// The commit message, falling back to `default`.
    pub fn message_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(default)
    }
}

/// Checks the repository, asks for confirmation, and creates the commits.
///
/// # Returns
/// Exit code: 0 on success or when declined, 1 when not inside a
/// repository or when a commit fails.
pub(crate) fn confirm_and_commit<B, R>(
    backend: &mut B,
    input: &mut R,
    dates: &[NaiveDate],
    summary: &str,
    message: &str,
    yes: bool,
) -> Result<ExitCode>
where
    B: VcsBackend + ?Sized,
    R: BufRead + ?Sized,
{
    if !backend.is_inside_work_tree()? {
        eprintln!(
            "{} Run this command inside a Git repository.",
            "error:".red().bold()
        );
        return Ok(ExitCode::from(1));
    }

    println!("{}", summary);
    if !yes {
        let mut stdout = io::stdout();
        if !confirm("Proceed?", input, &mut stdout)? {
            println!("{}", "Aborted.".yellow());
            return Ok(ExitCode::SUCCESS);
        }
    }

    let total = dates.len();
    let step = (total / 20).max(1);
    match apply_dates(backend, dates, message, |done, total| {
        if done % step == 0 || done == total {
            println!("  {} {}/{}", "->".green(), done, total);
        }
    }) {
        Ok(made) => {
            println!(
                "\n{} Created {} commit(s).",
                "SUCCESS".green().bold(),
                made
            );
            println!("{}", "Run 'git push' to upload them.".dimmed());
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            report_commit_error(&err);
            Ok(ExitCode::from(1))
        }
    }
}

fn report_commit_error(err: &CommitError) {
    eprintln!("{} {}", "error:".red().bold(), err);
    eprintln!(
        "  {} {} commit(s) were created before the failure and were not rolled back.",
        "!".yellow(),
        err.completed
    );
}
