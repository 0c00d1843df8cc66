//! Version-control backends.
//!
//! Every destructive step gridpaint takes goes through [`VcsBackend`]. The
//! production implementation shells out to `git`; [`RecordingBackend`]
//! records calls in memory for tests.
//!
//! Every invocation's exit status is checked. A failing command surfaces as
//! [`BackendError::CommandFailed`] with the captured stderr.

mod git;
mod recording;

pub use git::{GitBackend, GitConfig};
pub use recording::{RecordedCall, RecordingBackend};

use thiserror::Error;

/// Errors from invoking the version-control tool.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The tool could not be started at all.
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran and exited with a non-zero status.
    #[error("'{command}' exited with status {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },
}

/// Operations gridpaint needs from a version-control tool.
pub trait VcsBackend {
    /// Returns true when the working directory is inside a work tree.
    fn is_inside_work_tree(&mut self) -> Result<bool, BackendError>;

    /// Creates an empty commit with author and committer date `timestamp`.
    fn commit_empty(&mut self, timestamp: &str, message: &str) -> Result<(), BackendError>;

    /// Runs an arbitrary subcommand and returns its stdout.
    fn run(&mut self, args: &[&str]) -> Result<String, BackendError>;
}
