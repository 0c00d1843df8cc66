//! Gridpaint End-to-End Test Infrastructure
//!
//! This crate exercises the full commit flows:
//!
//! - Paint: grid file -> plan -> commits
//! - Text: message -> bitmap -> commits
//! - Reset: history rewrite on a scratch repository
//!
//! Flows run against the in-memory `RecordingBackend` by default. Tests that
//! need a real `git` skip themselves when it is not on `PATH`.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gridpaint-tests
//! ```

pub mod fixtures;
pub mod harness;
