//! Text command implementation
//!
//! Renders a message in the 5x7 font and commits one commit per lit cell.

use anyhow::Result;
use colored::Colorize;
use gridpaint_spec::{compute_anchor_date, map_bitmap_to_dates, message_bitmap};
use log::info;
use std::io::{self, BufRead};
use std::process::ExitCode;

use super::commit_flow::{confirm_and_commit, CommitOptions};
use super::reporting;
use crate::backends::{GitBackend, VcsBackend};
use crate::committer::TEXT_COMMIT_MESSAGE;

/// Run the text command against the current repository.
///
/// # Arguments
/// * `message` - Message to render
/// * `word_spacing` - Blank columns between words
/// * `keep_case` - Render the message as typed instead of uppercasing it
/// * `options` - Shared commit options
///
/// # Returns
/// Exit code: 0 on success or when declined, 1 on any error
pub fn run(
    message: &str,
    word_spacing: usize,
    keep_case: bool,
    options: &CommitOptions,
) -> Result<ExitCode> {
    let message = if keep_case {
        message.to_string()
    } else {
        message.to_uppercase()
    };
    let mut backend = GitBackend::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_with(&message, word_spacing, options, &mut backend, &mut input)
}

/// Run the text command with an explicit backend and answer source.
///
/// `message` is rendered exactly as given; characters other than `A`-`Z`
/// are dropped.
pub fn run_with<B, R>(
    message: &str,
    word_spacing: usize,
    options: &CommitOptions,
    backend: &mut B,
    input: &mut R,
) -> Result<ExitCode>
where
    B: VcsBackend + ?Sized,
    R: BufRead + ?Sized,
{
    let bitmap = match message_bitmap(message, word_spacing) {
        Ok(bitmap) => bitmap,
        Err(err) => {
            reporting::print_message_error(&err);
            return Ok(ExitCode::from(1));
        }
    };

    let anchor = compute_anchor_date(options.today());
    let dates = map_bitmap_to_dates(&bitmap, anchor)?;
    info!(
        "message: width={} commits={} anchor={}",
        bitmap.width(),
        dates.len(),
        anchor
    );

    println!("{} {}", "Message:".cyan().bold(), message);
    println!("{}", bitmap.to_text());

    if options.dry_run {
        for date in &dates {
            println!("  {} {}", "->".green(), date);
        }
        println!(
            "\n{} Dry run: {} commit(s) would be created.",
            "OK".green().bold(),
            dates.len()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let summary = format!(
        "Will create {} commits to display '{}'.",
        dates.len(),
        message
    );
    confirm_and_commit(
        backend,
        input,
        &dates,
        &summary,
        options.message_or(TEXT_COMMIT_MESSAGE),
        options.yes,
    )
}
