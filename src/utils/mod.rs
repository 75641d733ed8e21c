//! Utility functions and helpers.

pub mod preflight;

pub use preflight::{check_git_repository, check_staged_changes};
