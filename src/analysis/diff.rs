//! Unified diff parsing into change facts.

/// Marker that begins a per-file section in unified diff output.
const FILE_DIFF_MARKER: &str = "diff --git a/";

/// Change facts extracted from one unified diff.
///
/// `files` keeps diff appearance order and is not deduplicated: a diff that
/// repeats a header for the same path (renames, concatenated diffs) lists
/// that path more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSet {
    /// Changed file paths, in the order their headers appear.
    pub files: Vec<String>,
    /// Count of added lines (`+` lines that are not `+++` headers).
    pub additions: usize,
    /// Count of removed lines (`-` lines that are not `---` headers).
    pub deletions: usize,
}

/// Parses raw unified-diff text into a [`ChangeSet`].
///
/// Total over arbitrary input: empty or malformed text yields an empty
/// change set rather than an error.
pub fn parse_diff(diff: &str) -> ChangeSet {
    let mut files = Vec::new();
    let mut additions = 0;
    let mut deletions = 0;

    for line in diff.lines() {
        if line.starts_with(FILE_DIFF_MARKER) {
            files.push(extract_path_from_diff_header(line));
        } else if line.starts_with('+') && !line.starts_with("+++") {
            additions += 1;
        } else if line.starts_with('-') && !line.starts_with("---") {
            deletions += 1;
        }
    }

    ChangeSet {
        files,
        additions,
        deletions,
    }
}

/// Extracts the file path from the `b/` side of a `diff --git` header line.
fn extract_path_from_diff_header(header_line: &str) -> String {
    // Format: "diff --git a/old_path b/new_path"
    // Find the last " b/" to handle paths that may contain spaces.
    if let Some(b_pos) = header_line.rfind(" b/") {
        header_line[b_pos + 3..].to_string()
    } else {
        // Fallback: try to extract from after "diff --git a/".
        header_line
            .strip_prefix(FILE_DIFF_MARKER)
            .unwrap_or(header_line)
            .to_string()
    }
}
