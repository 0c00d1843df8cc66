//! Gridpaint CLI library.
//!
//! This crate provides the repository-facing half of gridpaint: the
//! git backend, the commit loop, file and image loading, PNG output, and
//! the command implementations used by the `gridpaint` binary.

pub mod backends;
pub mod commands;
pub mod committer;
pub mod confirm;
pub mod input;
pub mod png;
