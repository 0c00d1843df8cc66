//! CLI command implementations

pub mod commit_flow;
pub mod convert;
pub mod edit;
pub mod paint;
pub mod preview;
pub mod reset;
pub mod text;
pub mod validate;

mod reporting;

pub use commit_flow::CommitOptions;
