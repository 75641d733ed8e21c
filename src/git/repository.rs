//! Git repository operations.

use std::path::Path;

use anyhow::{Context, Result};
use git2::{Commit, DiffFormat, Repository, Status};
use tracing::debug;

/// Git repository wrapper.
///
/// Opened at an explicit path; the process working directory is never
/// consulted or changed, so concurrent callers can target different
/// repositories safely.
pub struct GitRepository {
    repo: Repository,
}

/// Repository status snapshot.
#[derive(Debug)]
pub struct RepoStatus {
    /// Current branch name; empty when HEAD is detached or unborn.
    pub branch: String,
    /// Per-file status entries.
    pub files: Vec<FileStatus>,
    /// Whether any file has changes recorded in the index.
    pub has_staged: bool,
    /// Whether any file has working-tree changes not yet staged.
    pub has_unstaged: bool,
}

/// File status information.
#[derive(Debug)]
pub struct FileStatus {
    /// Two-character porcelain-style code (index column, worktree column).
    pub status: String,
    /// Path to the file relative to repository root.
    pub file: String,
}

impl GitRepository {
    /// Open repository at specified path.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path).context("Failed to open git repository")?;

        Ok(Self { repo })
    }

    /// Get repository status with porcelain-style per-file codes.
    pub fn status(&self) -> Result<RepoStatus> {
        let statuses = self
            .repo
            .statuses(None)
            .context("Failed to get repository status")?;

        let mut files = Vec::new();

        for entry in statuses.iter() {
            if let Some(path) = entry.path() {
                let status_str = format_status_flags(entry.status());

                files.push(FileStatus {
                    status: status_str,
                    file: path.to_string(),
                });
            }
        }

        let has_staged = files.iter().any(|f| {
            let index_col = f.status.chars().next().unwrap_or(' ');
            index_col != ' ' && index_col != '?'
        });
        let has_unstaged = files
            .iter()
            .any(|f| f.status.chars().nth(1).unwrap_or(' ') != ' ');

        Ok(RepoStatus {
            branch: self.current_branch(),
            files,
            has_staged,
            has_unstaged,
        })
    }

    /// Get current branch name.
    ///
    /// Returns the empty string for a detached or unborn HEAD; status
    /// reporting must stay total.
    pub fn current_branch(&self) -> String {
        match self.repo.head() {
            Ok(head) => head
                .shorthand()
                .filter(|name| *name != "HEAD")
                .unwrap_or("")
                .to_string(),
            Err(_) => String::new(),
        }
    }

    /// Unified diff of staged changes (HEAD tree against the index).
    pub fn staged_diff(&self) -> Result<String> {
        let head_tree = self.head_tree()?;
        let diff = self
            .repo
            .diff_tree_to_index(head_tree.as_ref(), None, None)
            .context("Failed to diff HEAD tree against index")?;

        let text = render_patch(&diff)?;
        debug!("Staged diff: {} bytes", text.len());
        Ok(text)
    }

    /// Unified diff of unstaged changes (index against the working tree).
    pub fn unstaged_diff(&self) -> Result<String> {
        let diff = self
            .repo
            .diff_index_to_workdir(None, None)
            .context("Failed to diff index against working tree")?;

        render_patch(&diff)
    }

    /// Check whether the index records any changes against HEAD.
    pub fn has_staged_changes(&self) -> Result<bool> {
        let head_tree = self.head_tree()?;
        let diff = self
            .repo
            .diff_tree_to_index(head_tree.as_ref(), None, None)
            .context("Failed to diff HEAD tree against index")?;

        Ok(diff.deltas().len() > 0)
    }

    /// Commit the staged changes with the given message.
    ///
    /// Uses the repository signature and the current HEAD commit (if any) as
    /// parent. Returns the new commit hash.
    pub fn commit_staged(&self, message: &str) -> Result<String> {
        let mut index = self.repo.index().context("Failed to read repository index")?;
        let tree_id = index.write_tree().context("Failed to write index tree")?;
        let tree = self
            .repo
            .find_tree(tree_id)
            .context("Failed to find written index tree")?;

        let signature = self
            .repo
            .signature()
            .context("Failed to determine commit signature")?;

        let parent = self.head_commit()?;
        let parents: Vec<&Commit> = parent.iter().collect();

        let oid = self
            .repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .context("Failed to create commit")?;

        debug!("Created commit {oid}");
        Ok(oid.to_string())
    }

    /// HEAD tree, or `None` when the repository has no commits yet.
    fn head_tree(&self) -> Result<Option<git2::Tree<'_>>> {
        match self.repo.head() {
            Ok(head) => {
                let tree = head.peel_to_tree().context("Failed to peel HEAD to tree")?;
                Ok(Some(tree))
            }
            Err(e)
                if matches!(
                    e.code(),
                    git2::ErrorCode::UnbornBranch | git2::ErrorCode::NotFound
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(e).context("Failed to get HEAD reference"),
        }
    }

    /// HEAD commit, or `None` when the repository has no commits yet.
    fn head_commit(&self) -> Result<Option<Commit<'_>>> {
        match self.repo.head() {
            Ok(head) => {
                let commit = head
                    .peel_to_commit()
                    .context("Failed to peel HEAD to commit")?;
                Ok(Some(commit))
            }
            Err(e)
                if matches!(
                    e.code(),
                    git2::ErrorCode::UnbornBranch | git2::ErrorCode::NotFound
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(e).context("Failed to get HEAD reference"),
        }
    }
}

/// Render a git2 diff as unified-diff text with file headers.
fn render_patch(diff: &git2::Diff<'_>) -> Result<String> {
    let mut text = String::new();

    diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        let content = std::str::from_utf8(line.content()).unwrap_or("<binary>");
        let prefix = match line.origin() {
            '+' => "+",
            '-' => "-",
            ' ' => " ",
            '@' => "@",
            'H' => "", // Hunk header
            'F' => "", // File header
            _ => "",
        };
        text.push_str(prefix);
        text.push_str(content);
        true
    })
    .context("Failed to format diff")?;

    Ok(text)
}

/// Format git status flags into a two-character porcelain-style code.
fn format_status_flags(flags: Status) -> String {
    let mut status = String::new();

    if flags.contains(Status::INDEX_NEW) {
        status.push('A');
    } else if flags.contains(Status::INDEX_MODIFIED) {
        status.push('M');
    } else if flags.contains(Status::INDEX_DELETED) {
        status.push('D');
    } else if flags.contains(Status::INDEX_RENAMED) {
        status.push('R');
    } else if flags.contains(Status::INDEX_TYPECHANGE) {
        status.push('T');
    } else {
        status.push(' ');
    }

    if flags.contains(Status::WT_NEW) {
        status.push('?');
    } else if flags.contains(Status::WT_MODIFIED) {
        status.push('M');
    } else if flags.contains(Status::WT_DELETED) {
        status.push('D');
    } else if flags.contains(Status::WT_TYPECHANGE) {
        status.push('T');
    } else if flags.contains(Status::WT_RENAMED) {
        status.push('R');
    } else {
        status.push(' ');
    }

    status
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn staged_new_file_code() {
        assert_eq!(format_status_flags(Status::INDEX_NEW), "A ");
    }

    #[test]
    fn staged_and_modified_code() {
        assert_eq!(
            format_status_flags(Status::INDEX_NEW | Status::WT_MODIFIED),
            "AM"
        );
    }

    #[test]
    fn untracked_file_code() {
        assert_eq!(format_status_flags(Status::WT_NEW), " ?");
    }

    #[test]
    fn clean_flags_are_blank() {
        assert_eq!(format_status_flags(Status::empty()), "  ");
    }
}
