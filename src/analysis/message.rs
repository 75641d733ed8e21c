//! Conventional commit message composition.

use crate::analysis::classify::CommitType;

/// Assembles a `type(scope): description` commit message.
///
/// An empty `description` selects a default body derived from the file
/// list: one file is named, two or three are comma-joined, four or more
/// collapse to a count. Never fails; an empty file list with no description
/// yields `"update 0 files"`.
pub fn compose_message(
    commit_type: CommitType,
    scope: &str,
    description: &str,
    files: &[String],
) -> String {
    let prefix = if scope.is_empty() {
        format!("{commit_type}: ")
    } else {
        format!("{commit_type}({scope}): ")
    };

    let body = if description.is_empty() {
        default_body(files)
    } else {
        description.to_string()
    };

    prefix + &body
}

/// Derives the default message body from the changed file list.
fn default_body(files: &[String]) -> String {
    match files {
        [only] => format!("update {only}"),
        [_, ..] if files.len() <= 3 => format!("update {}", files.join(", ")),
        _ => format!("update {} files", files.len()),
    }
}
