//! Turns a list of dates into backdated empty commits.

use chrono::NaiveDate;
use gridpaint_spec::commit_timestamp;
use log::{debug, info};
use thiserror::Error;

use crate::backends::{BackendError, VcsBackend};

/// Default message for commits generated from a grid.
pub const GRID_COMMIT_MESSAGE: &str = "Grid art commit";

/// Default message for commits generated from a text message.
pub const TEXT_COMMIT_MESSAGE: &str = "Commit for message display";

/// A commit in the sequence failed. Earlier commits are kept.
#[derive(Debug, Error)]
#[error("commit {index} of {total} (dated {date}) failed after {completed} commit(s): {source}")]
pub struct CommitError {
    /// 1-based position of the failing commit.
    pub index: usize,
    /// Number of commits in the sequence.
    pub total: usize,
    /// Date of the failing commit.
    pub date: NaiveDate,
    /// Commits created before the failure.
    pub completed: usize,
    /// Underlying backend failure.
    #[source]
    pub source: BackendError,
}

/// Creates one empty commit per date, strictly in order.
///
/// `on_progress` is called after each successful commit with
/// `(done, total)`. Stops at the first failure.
///
/// # Returns
/// Number of commits created.
pub fn apply_dates<B, F>(
    backend: &mut B,
    dates: &[NaiveDate],
    message: &str,
    mut on_progress: F,
) -> Result<usize, CommitError>
where
    B: VcsBackend + ?Sized,
    F: FnMut(usize, usize),
{
    let total = dates.len();
    info!("creating {} commit(s)", total);

    for (i, &date) in dates.iter().enumerate() {
        let timestamp = commit_timestamp(date);
        debug!("commit {}/{} at {}", i + 1, total, timestamp);
        backend
            .commit_empty(&timestamp, message)
            .map_err(|source| CommitError {
                index: i + 1,
                total,
                date,
                completed: i,
                source,
            })?;
        on_progress(i + 1, total);
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::RecordingBackend;

    fn dates() -> Vec<NaiveDate> {
        let d = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        vec![d, d, d.succ_opt().unwrap()]
    }

    #[test]
    fn test_commits_every_date_at_noon() {
        let mut backend = RecordingBackend::new();
        let mut progress = Vec::new();
        let made = apply_dates(&mut backend, &dates(), "msg", |done, total| {
            progress.push((done, total))
        })
        .unwrap();
        assert_eq!(made, 3);
        assert_eq!(
            backend.commit_timestamps(),
            vec![
                "2024-01-07 12:00:00",
                "2024-01-07 12:00:00",
                "2024-01-08 12:00:00"
            ]
        );
        assert_eq!(progress, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn test_stops_at_first_failure() {
        let mut backend = RecordingBackend::failing_on_commit(3);
        let err = apply_dates(&mut backend, &dates(), "msg", |_, _| {}).unwrap_err();
        assert_eq!(err.index, 3);
        assert_eq!(err.completed, 2);
        assert_eq!(err.date, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
        assert_eq!(backend.commit_timestamps().len(), 2);
        assert!(err.to_string().contains("commit 3 of 3"));
    }

    #[test]
    fn test_empty_sequence() {
        let mut backend = RecordingBackend::new();
        assert_eq!(apply_dates(&mut backend, &[], "msg", |_, _| {}).unwrap(), 0);
        assert!(backend.calls.is_empty());
    }
}
