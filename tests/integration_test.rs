use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use commit_forge::analysis::{analyze_changes, CommitType};
use commit_forge::git::GitRepository;
use git2::{Repository, Signature};
use tempfile::TempDir;

/// Test setup that creates a temporary git repository.
///
/// All operations go through explicit paths; the process working directory
/// is never changed.
struct TestRepo {
    _temp_dir: TempDir,
    repo_path: PathBuf,
    repo: Repository,
}

impl TestRepo {
    fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let repo_path = temp_dir.path().to_path_buf();

        let repo = Repository::init(&repo_path)?;

        // Configure git user for commits
        let mut config = repo.config()?;
        config.set_str("user.name", "Test User")?;
        config.set_str("user.email", "test@example.com")?;

        Ok(TestRepo {
            _temp_dir: temp_dir,
            repo_path,
            repo,
        })
    }

    /// Writes a file and stages it without committing.
    fn stage_file(&self, name: &str, content: &str) -> Result<()> {
        let file_path = self.repo_path.join(name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, content)?;

        let mut index = self.repo.index()?;
        index.add_path(Path::new(name))?;
        index.write()?;
        Ok(())
    }

    /// Stages a file and commits it, returning the commit id.
    fn commit_file(&self, name: &str, content: &str, message: &str) -> Result<git2::Oid> {
        self.stage_file(name, content)?;

        let mut index = self.repo.index()?;
        let signature = Signature::now("Test User", "test@example.com")?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(_) => None,
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        let commit_id = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;
        Ok(commit_id)
    }

    fn open(&self) -> Result<GitRepository> {
        GitRepository::open_at(&self.repo_path)
    }
}

#[test]
fn status_of_fresh_repository_is_clean() -> Result<()> {
    let test_repo = TestRepo::new()?;
    let repo = test_repo.open()?;

    let status = repo.status()?;
    assert!(status.files.is_empty());
    assert!(!status.has_staged);
    assert!(!status.has_unstaged);
    assert_eq!(status.branch, "");

    Ok(())
}

#[test]
fn staged_new_file_shows_porcelain_code() -> Result<()> {
    let test_repo = TestRepo::new()?;
    test_repo.stage_file("README.md", "# Title\n")?;

    let repo = test_repo.open()?;
    let status = repo.status()?;

    let entry = status
        .files
        .iter()
        .find(|f| f.file == "README.md")
        .expect("staged file should appear in status");
    assert_eq!(entry.status, "A ");
    assert!(status.has_staged);
    assert!(!status.has_unstaged);

    Ok(())
}

#[test]
fn modified_tracked_file_is_unstaged() -> Result<()> {
    let test_repo = TestRepo::new()?;
    test_repo.commit_file("notes.txt", "one\n", "Initial commit")?;
    fs::write(test_repo.repo_path.join("notes.txt"), "one\ntwo\n")?;

    let repo = test_repo.open()?;
    let status = repo.status()?;

    let entry = status
        .files
        .iter()
        .find(|f| f.file == "notes.txt")
        .expect("modified file should appear in status");
    assert_eq!(entry.status, " M");
    assert!(!status.has_staged);
    assert!(status.has_unstaged);
    assert!(!status.branch.is_empty());

    let diff = repo.unstaged_diff()?;
    assert!(diff.contains("diff --git a/notes.txt b/notes.txt"));

    Ok(())
}

#[test]
fn staged_diff_feeds_analysis_pipeline() -> Result<()> {
    let test_repo = TestRepo::new()?;
    test_repo.commit_file("src/lib.rs", "fn a() {}\n", "Initial commit")?;
    test_repo.stage_file("README.md", "# Title\n")?;

    let repo = test_repo.open()?;
    let diff = repo.staged_diff()?;
    assert!(diff.contains("diff --git a/README.md b/README.md"));

    let analysis = analyze_changes(&diff);
    assert_eq!(analysis.change_type, CommitType::Docs);
    assert_eq!(analysis.files, vec!["README.md"]);
    assert_eq!(analysis.additions, 1);
    insta::assert_snapshot!(analysis.suggested_message(""), @"docs: update README.md");

    Ok(())
}

#[test]
fn staged_diff_works_before_first_commit() -> Result<()> {
    // Unborn HEAD: the staged diff is taken against an empty tree.
    let test_repo = TestRepo::new()?;
    test_repo.stage_file("backend/app.py", "print('hi')\n")?;

    let repo = test_repo.open()?;
    assert!(repo.has_staged_changes()?);

    let diff = repo.staged_diff()?;
    let analysis = analyze_changes(&diff);
    assert_eq!(analysis.files, vec!["backend/app.py"]);
    assert_eq!(analysis.scope, "backend");

    Ok(())
}

#[test]
fn commit_staged_records_commit_and_clears_index() -> Result<()> {
    let test_repo = TestRepo::new()?;
    test_repo.commit_file("src/lib.rs", "fn a() {}\n", "Initial commit")?;
    test_repo.stage_file("src/extra.rs", "fn b() {}\n")?;

    let repo = test_repo.open()?;
    let hash = repo.commit_staged("feat: update src/extra.rs")?;
    assert_eq!(hash.len(), 40);

    assert!(!repo.has_staged_changes()?);

    let head = test_repo.repo.head()?.peel_to_commit()?;
    assert_eq!(head.id().to_string(), hash);
    assert_eq!(head.message().unwrap_or("").trim(), "feat: update src/extra.rs");
    assert_eq!(head.parent_count(), 1);

    Ok(())
}

#[test]
fn commit_staged_works_on_unborn_head() -> Result<()> {
    let test_repo = TestRepo::new()?;
    test_repo.stage_file("first.txt", "hello\n")?;

    let repo = test_repo.open()?;
    let hash = repo.commit_staged("chore: update first.txt")?;

    let head = test_repo.repo.head()?.peel_to_commit()?;
    assert_eq!(head.id().to_string(), hash);
    assert_eq!(head.parent_count(), 0);

    Ok(())
}

#[test]
fn open_at_rejects_non_repository() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let result = GitRepository::open_at(temp_dir.path());
    assert!(result.is_err());
}
