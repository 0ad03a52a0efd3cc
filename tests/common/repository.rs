//! Git repository and home directory setup for integration tests

#![allow(dead_code)]

use statusline::core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository. The TempDir must outlive the test body.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute path as the host would send it in `workspace.current_dir`
    pub fn path_str(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// A temporary home directory holding the env file and the cache
pub struct TestHome {
    pub temp_dir: TempDir,
}

impl TestHome {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn cache_file(&self) -> PathBuf {
        self.path().join(".statusline_cache")
    }

    /// Write `~/.claude/.env` with the given content
    pub fn write_env(&self, content: &str) -> Result<PathBuf> {
        let dir = self.path().join(".claude");
        fs::create_dir_all(&dir)?;
        let env_file = dir.join(".env");
        fs::write(&env_file, content)?;
        Ok(env_file)
    }

    /// Create (and return) a directory below the home directory
    pub fn create_dir(&self, relative: &str) -> Result<PathBuf> {
        let dir = self.path().join(relative);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;
    Ok(())
}

/// Sets up a fresh git repository on branch `main` with a test identity
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"])?;
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with one committed file, `initial.txt`
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content)?;
    Ok(())
}

pub fn remove_file(repo_path: &Path, filename: &str) -> Result<()> {
    fs::remove_file(repo_path.join(filename))?;
    Ok(())
}

pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])
}

pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])
}

pub fn git_checkout_new_branch(repo_path: &Path, branch: &str) -> Result<()> {
    git(repo_path, &["checkout", "-b", branch])
}

/// Build the JSON descriptor the host writes to stdin
pub fn descriptor(current_dir: &str, project_dir: Option<&str>) -> String {
    serde_json::json!({
        "session_id": "test-session",
        "model": { "id": "test-model", "display_name": "Test" },
        "workspace": {
            "current_dir": current_dir,
            "project_dir": project_dir,
        },
    })
    .to_string()
}
