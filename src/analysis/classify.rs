//! Conventional commit type detection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::diff::ChangeSet;

/// File-path substrings that indicate documentation-only changes.
const DOC_PATTERNS: [&str; 4] = ["readme", "doc", ".md", "changelog"];

/// File-path substrings that indicate test changes.
const TEST_PATTERNS: [&str; 3] = ["test", "spec", "__test__"];

/// File-path substrings that indicate build/tooling changes.
const CONFIG_PATTERNS: [&str; 4] = ["config", "package.json", "requirements.txt", "dockerfile"];

/// Diff-content keyword sets, checked in priority order.
const KEYWORD_RULES: [(&[&str], CommitType); 5] = [
    (&["fix", "bug", "error", "issue"], CommitType::Fix),
    (&["add", "new", "create", "implement"], CommitType::Feat),
    (
        &["refactor", "restructure", "reorganize"],
        CommitType::Refactor,
    ),
    (&["performance", "optimize", "speed"], CommitType::Perf),
    (&["style", "format", "lint"], CommitType::Style),
];

/// The conventional commit type vocabulary.
///
/// A closed enumeration: anything outside these eight tokens is rejected at
/// the boundary by [`CommitType::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    /// A new feature.
    Feat,
    /// A bug fix.
    Fix,
    /// Documentation only changes.
    Docs,
    /// Changes that do not affect the meaning of the code.
    Style,
    /// A code change that neither fixes a bug nor adds a feature.
    Refactor,
    /// A code change that improves performance.
    Perf,
    /// Adding missing tests or correcting existing tests.
    Test,
    /// Changes to the build process or auxiliary tools.
    Chore,
}

impl CommitType {
    /// All commit types, in catalog order.
    pub const ALL: [CommitType; 8] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Refactor,
        CommitType::Perf,
        CommitType::Test,
        CommitType::Chore,
    ];

    /// The lowercase token used in commit messages.
    pub fn as_str(self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
        }
    }

    /// One-line catalog description of this commit type.
    pub fn description(self) -> &'static str {
        match self {
            CommitType::Feat => "A new feature",
            CommitType::Fix => "A bug fix",
            CommitType::Docs => "Documentation only changes",
            CommitType::Style => "Changes that do not affect the meaning of the code",
            CommitType::Refactor => "A code change that neither fixes a bug nor adds a feature",
            CommitType::Perf => "A code change that improves performance",
            CommitType::Test => "Adding missing tests or correcting existing tests",
            CommitType::Chore => "Changes to the build process or auxiliary tools",
        }
    }

    /// Comma-joined list of all valid tokens, for error messages.
    fn valid_tokens() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a caller-supplied commit type is not in the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid commit type '{supplied}'. Valid types: {valid}")]
pub struct UnknownCommitType {
    /// The rejected token.
    pub supplied: String,
    /// The comma-joined valid vocabulary.
    pub valid: String,
}

impl FromStr for CommitType {
    type Err = UnknownCommitType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feat" => Ok(CommitType::Feat),
            "fix" => Ok(CommitType::Fix),
            "docs" => Ok(CommitType::Docs),
            "style" => Ok(CommitType::Style),
            "refactor" => Ok(CommitType::Refactor),
            "perf" => Ok(CommitType::Perf),
            "test" => Ok(CommitType::Test),
            "chore" => Ok(CommitType::Chore),
            _ => Err(UnknownCommitType {
                supplied: s.to_string(),
                valid: CommitType::valid_tokens(),
            }),
        }
    }
}

/// Classifies a change set into a conventional commit type.
///
/// Rule precedence, first match wins: empty change set → chore; file-path
/// patterns (docs, then test, then config, decided by the first file that
/// matches any of the three); diff-content keywords; default feat.
pub fn classify_changes(change_set: &ChangeSet, diff: &str) -> CommitType {
    if change_set.files.is_empty() {
        return CommitType::Chore;
    }

    for file in &change_set.files {
        let file_lower = file.to_lowercase();
        if DOC_PATTERNS.iter().any(|p| file_lower.contains(p)) {
            return CommitType::Docs;
        }
        if TEST_PATTERNS.iter().any(|p| file_lower.contains(p)) {
            return CommitType::Test;
        }
        if CONFIG_PATTERNS.iter().any(|p| file_lower.contains(p)) {
            return CommitType::Chore;
        }
    }

    let diff_lower = diff.to_lowercase();
    for (keywords, commit_type) in KEYWORD_RULES {
        if keywords.iter().any(|k| diff_lower.contains(k)) {
            return commit_type;
        }
    }

    CommitType::Feat
}
