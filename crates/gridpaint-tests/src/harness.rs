//! Test harness utilities for scratch files and scratch repositories.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use gridpaint_cli::backends::{GitBackend, GitConfig, VcsBackend};
use gridpaint_spec::Grid;

/// Returns true when a `git` executable is on `PATH`.
pub fn git_available() -> bool {
    which::which("git").is_ok()
}

/// Skips the current test when `git` is unavailable.
#[macro_export]
macro_rules! require_git {
    () => {
        if !$crate::harness::git_available() {
            eprintln!("skipping: git not found on PATH");
            return;
        }
    };
}

/// Answer source that says yes to every prompt.
pub fn answer_yes() -> Cursor<Vec<u8>> {
    Cursor::new(b"y\n".to_vec())
}

/// Answer source that declines every prompt.
pub fn answer_no() -> Cursor<Vec<u8>> {
    Cursor::new(b"n\n".to_vec())
}

/// A test harness owning a scratch directory.
pub struct TestHarness {
    /// Working directory for test files.
    pub work_dir: TempDir,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// Create a new test harness.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Writes `grid` as JSON and returns the path as a string.
    pub fn write_grid(&self, name: &str, grid: &Grid) -> String {
        let json = grid.to_json().expect("grid serializes");
        self.write_file(name, &json)
    }

    /// Writes raw text and returns the path as a string.
    pub fn write_file(&self, name: &str, content: &str) -> String {
        let path: PathBuf = self.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path.to_string_lossy().into_owned()
    }

    /// Initializes a git repository on branch `main` with a local identity.
    pub fn init_repo(&self) {
        self.git(&["init", "--quiet"]);
        self.git(&["symbolic-ref", "HEAD", "refs/heads/main"]);
        self.git(&["config", "user.name", "Gridpaint Tests"]);
        self.git(&["config", "user.email", "tests@gridpaint.invalid"]);
        self.git(&["config", "commit.gpgsign", "false"]);
    }

    /// A backend rooted at the scratch directory.
    pub fn backend(&self) -> GitBackend {
        GitBackend::with_config(GitConfig {
            working_dir: Some(self.path().to_path_buf()),
            ..GitConfig::default()
        })
    }

    /// Runs git in the scratch directory and returns stdout, panicking on failure.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Author dates of every commit on HEAD, oldest first, as `YYYY-MM-DD HH:MM:SS`.
    pub fn author_dates(&self) -> Vec<String> {
        self.backend()
            .run(&[
                "log",
                "--reverse",
                "--format=%ad",
                "--date=format:%Y-%m-%d %H:%M:%S",
            ])
            .expect("git log")
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Number of commits reachable from HEAD.
    pub fn commit_count(&self) -> usize {
        self.git(&["rev-list", "--count", "HEAD"])
            .trim()
            .parse()
            .expect("rev-list prints a number")
    }
}
