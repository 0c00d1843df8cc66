//! In-memory backend that records calls instead of touching a repository.

use super::{BackendError, VcsBackend};

/// A call received by [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    /// `is_inside_work_tree`
    WorkTreeCheck,
    /// `commit_empty(timestamp, message)`
    Commit { timestamp: String, message: String },
    /// `run(args)`
    Run(Vec<String>),
}

/// Backend that records every call and can be told to fail.
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    /// Calls in the order received.
    pub calls: Vec<RecordedCall>,
    /// Answer returned by `is_inside_work_tree`.
    pub inside_work_tree: bool,
    /// 1-based commit number that should fail, if any.
    pub fail_on_commit: Option<usize>,
    /// First argument of a `run` call that should fail, if any.
    pub fail_on_run: Option<String>,
    commits: usize,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            inside_work_tree: true,
            fail_on_commit: None,
            fail_on_run: None,
            commits: 0,
        }
    }
}

impl RecordingBackend {
    /// Creates a backend that reports being inside a work tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend that reports being outside any repository.
    pub fn outside_repository() -> Self {
        Self {
            inside_work_tree: false,
            ..Self::default()
        }
    }

    /// Creates a backend whose `n`th commit (1-based) fails.
    pub fn failing_on_commit(n: usize) -> Self {
        Self {
            fail_on_commit: Some(n),
            ..Self::default()
        }
    }

    /// Creates a backend that fails every `run` whose first argument is `arg`.
    pub fn failing_on_run(arg: &str) -> Self {
        Self {
            fail_on_run: Some(arg.to_string()),
            ..Self::default()
        }
    }

    /// Timestamps of the commits made so far.
    pub fn commit_timestamps(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                RecordedCall::Commit { timestamp, .. } => Some(timestamp.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Argument lists of the `run` calls made so far.
    pub fn runs(&self) -> Vec<Vec<String>> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                RecordedCall::Run(args) => Some(args.clone()),
                _ => None,
            })
            .collect()
    }
}

impl VcsBackend for RecordingBackend {
    fn is_inside_work_tree(&mut self) -> Result<bool, BackendError> {
        self.calls.push(RecordedCall::WorkTreeCheck);
        Ok(self.inside_work_tree)
    }

    fn commit_empty(&mut self, timestamp: &str, message: &str) -> Result<(), BackendError> {
        self.commits += 1;
        if self.fail_on_commit == Some(self.commits) {
            return Err(BackendError::CommandFailed {
                command: "git commit".to_string(),
                code: 128,
                stderr: "simulated failure".to_string(),
            });
        }
        self.calls.push(RecordedCall::Commit {
            timestamp: timestamp.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }

    fn run(&mut self, args: &[&str]) -> Result<String, BackendError> {
        if let (Some(fail), Some(first)) = (&self.fail_on_run, args.first()) {
            if fail == first {
                return Err(BackendError::CommandFailed {
                    command: format!("git {}", args.join(" ")),
                    code: 1,
                    stderr: format!("simulated {} failure", first),
                });
            }
        }
        self.calls
            .push(RecordedCall::Run(args.iter().map(|s| s.to_string()).collect()));
        Ok(String::new())
    }
}
