//! Reset command implementation
//!
//! Replaces a branch's entire history with a single commit and force-pushes
//! it. Destructive; always confirmed unless `--yes` is given.

use anyhow::Result;
use colored::Colorize;
use log::info;
use std::io::{self, BufRead};
use std::process::ExitCode;

use crate::backends::{GitBackend, VcsBackend};
use crate::confirm::confirm;

/// Message of the single commit left on the branch.
pub const RESET_COMMIT_MESSAGE: &str = "Reset commit";

/// Options for the reset command.
#[derive(Debug, Clone)]
pub struct ResetOptions {
    /// Branch whose history is replaced.
    pub branch: String,
    /// Remote that receives the force-push.
    pub remote: String,
    /// Name of the orphan branch used while rebuilding.
    pub temp_branch: String,
    /// Force-push after rewriting.
    pub push: bool,
    /// Skip the confirmation prompt.
    pub yes: bool,
}

impl Default for ResetOptions {
    fn default() -> Self {
        Self {
            branch: "main".to_string(),
            remote: "origin".to_string(),
            temp_branch: "temp".to_string(),
            push: true,
            yes: false,
        }
    }
}

impl ResetOptions {
    /// The git invocations performed, in order.
    pub fn steps(&self) -> Vec<Vec<&str>> {
        let mut steps = vec![
            vec!["checkout", "--orphan", self.temp_branch.as_str()],
            vec!["add", "."],
            vec!["commit", "--allow-empty", "-m", RESET_COMMIT_MESSAGE],
            vec!["branch", "-D", self.branch.as_str()],
            vec!["branch", "-m", self.branch.as_str()],
        ];
        if self.push {
            steps.push(vec!["push", "-f", self.remote.as_str(), self.branch.as_str()]);
        }
        steps
    }
}

/// Run the reset command against the current repository.
///
/// # Returns
/// Exit code: 0 on success or when declined, 1 when not inside a
/// repository or when any git step fails
pub fn run(options: &ResetOptions) -> Result<ExitCode> {
    let mut backend = GitBackend::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_with(options, &mut backend, &mut input)
}

/// Run the reset command with an explicit backend and answer source.
pub fn run_with<B, R>(options: &ResetOptions, backend: &mut B, input: &mut R) -> Result<ExitCode>
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

    println!(
        "{} This replaces the history of '{}' with a single commit{}.",
        "WARNING".yellow().bold(),
        options.branch,
        if options.push {
            format!(" and force-pushes it to '{}'", options.remote)
        } else {
            String::new()
        }
    );
    if !options.yes {
        let mut stdout = io::stdout();
        if !confirm("Proceed?", input, &mut stdout)? {
            println!("{}", "Aborted.".yellow());
            return Ok(ExitCode::SUCCESS);
        }
    }

    let steps = options.steps();
    for (i, step) in steps.iter().enumerate() {
        info!("reset step {}/{}: git {}", i + 1, steps.len(), step.join(" "));
        println!("  {} git {}", "->".green(), step.join(" "));
        if let Err(err) = backend.run(step) {
            eprintln!("{} {}", "error:".red().bold(), err);
            eprintln!(
                "  {} stopped at step {} of {}; the repository may be on branch '{}'",
                "!".yellow(),
                i + 1,
                steps.len(),
                options.temp_branch
            );
            return Ok(ExitCode::from(1));
        }
    }

    println!(
        "\n{} Branch '{}' now has a single commit.",
        "SUCCESS".green().bold(),
        options.branch
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::{RecordedCall, RecordingBackend};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reset_runs_every_step() {
        let mut backend = RecordingBackend::new();
        let options = ResetOptions {
            yes: true,
            ..ResetOptions::default()
        };
        let code = run_with(&options, &mut backend, &mut Cursor::new(Vec::new())).unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(
            backend.runs(),
            vec![
                strings(&["checkout", "--orphan", "temp"]),
                strings(&["add", "."]),
                strings(&["commit", "--allow-empty", "-m", "Reset commit"]),
                strings(&["branch", "-D", "main"]),
                strings(&["branch", "-m", "main"]),
                strings(&["push", "-f", "origin", "main"]),
            ]
        );
    }

    #[test]
    fn test_reset_without_push() {
        let mut backend = RecordingBackend::new();
        let options = ResetOptions {
            branch: "trunk".to_string(),
            push: false,
            yes: true,
            ..ResetOptions::default()
        };
        run_with(&options, &mut backend, &mut Cursor::new(Vec::new())).unwrap();

        let runs = backend.runs();
        assert_eq!(runs.len(), 5);
        assert_eq!(runs[4], strings(&["branch", "-m", "trunk"]));
    }

    #[test]
    fn test_reset_stops_at_first_failure() {
        let mut backend = RecordingBackend::failing_on_run("branch");
        let options = ResetOptions {
            yes: true,
            ..ResetOptions::default()
        };
        let code = run_with(&options, &mut backend, &mut Cursor::new(Vec::new())).unwrap();

        assert_eq!(code, ExitCode::from(1));
        // checkout, add, and commit ran; nothing after the failing branch -D.
        assert_eq!(backend.runs().len(), 3);
    }

    #[test]
    fn test_reset_declined() {
        let mut backend = RecordingBackend::new();
        let code = run_with(
            &ResetOptions::default(),
            &mut backend,
            &mut Cursor::new(b"n\n".to_vec()),
        )
        .unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(backend.calls, vec![RecordedCall::WorkTreeCheck]);
    }

    #[test]
    fn test_reset_outside_repository() {
        let mut backend = RecordingBackend::outside_repository();
        let options = ResetOptions {
            yes: true,
            ..ResetOptions::default()
        };
        let code = run_with(&options, &mut backend, &mut Cursor::new(Vec::new())).unwrap();

        assert_eq!(code, ExitCode::from(1));
        assert!(backend.runs().is_empty());
    }
}
