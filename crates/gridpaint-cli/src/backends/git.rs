//! `git` subprocess backend.

use log::debug;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::{BackendError, VcsBackend};

/// Configuration for the git backend.
#[derive(Debug, Clone)]
pub struct GitConfig {
    /// Executable to invoke.
    pub executable: String,
    /// Working directory for every invocation (default: current directory).
    pub working_dir: Option<PathBuf>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            executable: "git".to_string(),
            working_dir: None,
        }
    }
}

/// Backend that shells out to `git`.
#[derive(Debug, Clone, Default)]
pub struct GitBackend {
    config: GitConfig,
}

impl GitBackend {
    /// Creates a backend with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend with custom configuration.
    pub fn with_config(config: GitConfig) -> Self {
        Self { config }
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &GitConfig {
        &self.config
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.config.executable);
        cmd.args(args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        if let Some(ref cwd) = self.config.working_dir {
            cmd.current_dir(cwd);
        }
        cmd
    }

    fn describe(&self, args: &[&str]) -> String {
        let mut parts = vec![self.config.executable.as_str()];
        parts.extend_from_slice(args);
        parts.join(" ")
    }

    fn execute(&self, mut cmd: Command, args: &[&str]) -> Result<String, BackendError> {
        let description = self.describe(args);
        debug!("running {}", description);

        let output = cmd.output().map_err(|source| BackendError::Spawn {
            command: description.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(BackendError::CommandFailed {
                command: description,
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl VcsBackend for GitBackend {
    fn is_inside_work_tree(&mut self) -> Result<bool, BackendError> {
        match self.run(&["rev-parse", "--is-inside-work-tree"]) {
            Ok(stdout) => Ok(stdout.trim() == "true"),
            Err(BackendError::CommandFailed { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn commit_empty(&mut self, timestamp: &str, message: &str) -> Result<(), BackendError> {
        let args = [
            "commit",
            "--allow-empty",
            "--quiet",
            "--date",
            timestamp,
            "-m",
            message,
        ];
        let mut cmd = self.command(&args);
        // --date only sets the author date.
        cmd.env("GIT_AUTHOR_DATE", timestamp);
        cmd.env("GIT_COMMITTER_DATE", timestamp);
        self.execute(cmd, &args).map(|_| ())
    }

    fn run(&mut self, args: &[&str]) -> Result<String, BackendError> {
        let cmd = self.command(args);
        self.execute(cmd, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let backend = GitBackend::new();
        assert_eq!(backend.config().executable, "git");
        assert!(backend.config().working_dir.is_none());
    }

    #[test]
    fn test_missing_executable_is_spawn_error() {
        let mut backend = GitBackend::with_config(GitConfig {
            executable: "gridpaint-definitely-not-a-real-binary".to_string(),
            working_dir: None,
        });
        let err = backend.run(&["status"]).unwrap_err();
        assert!(matches!(err, BackendError::Spawn { .. }));
        assert!(backend.is_inside_work_tree().is_err());
    }

    #[test]
    fn test_describe_joins_args() {
        let backend = GitBackend::new();
        assert_eq!(
            backend.describe(&["commit", "--allow-empty"]),
            "git commit --allow-empty"
        );
    }
}
