//! Preflight validation checks for early failure detection
//!
//! This module provides functions to validate a target repository before
//! starting git operations. Commands should call these checks early to fail
//! fast with clear error messages.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::git::GitRepository;

/// Validate the given path is a valid git repository
///
/// This is a lightweight check that opens the repository without loading any
/// commit data.
pub fn check_git_repository<P: AsRef<Path>>(repo_path: P) -> Result<()> {
    GitRepository::open_at(&repo_path).with_context(|| {
        format!(
            "'{}' is not a git repository. Pass --repo-path pointing at one.",
            repo_path.as_ref().display()
        )
    })?;
    Ok(())
}

/// Validate the repository has staged changes
///
/// Use this before operations that require something in the index, like
/// committing.
pub fn check_staged_changes(repo: &GitRepository) -> Result<()> {
    if !repo.has_staged_changes()? {
        bail!("No staged changes to commit");
    }
    Ok(())
}
