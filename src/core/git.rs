//! Git repository queries used to build the status line.
//!
//! [`GitRepo`] wraps `git2` for repository discovery and HEAD resolution and
//! shells out to the `git` executable for porcelain status and shortstat
//! output, which are parsed by [`crate::core::git_status`].
//!
//! # Public API
//! - [`GitRepo`]: Repository handle
//! - [`is_repository`], [`current_branch`], [`change_summary`]: Degrading
//!   wrappers that never fail. Every error collapses to "no data" so the
//!   status line always renders.

use crate::core::{
    error::{Result, StatuslineError},
    git_status::{parse_shortstat, DiffStat, GitChangeSummary},
};
use git2::Repository;
use std::path::Path;
use std::process::Command;

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitRepo { repo })
    }

    /// Working tree root, `None` for bare repositories
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    pub fn get_repository(&self) -> &Repository {
        &self.repo
    }

    /// Short name of the current branch, or the short commit id when HEAD is
    /// detached. An unborn branch still reports its name.
    pub fn get_current_branch(&self) -> Result<Option<String>> {
        let head = self.repo.find_reference("HEAD")?;

        if let Some(target) = head.symbolic_target() {
            let name = target.strip_prefix("refs/heads/").unwrap_or(target);
            return Ok(Some(name.to_string()));
        }

        let Some(oid) = head.target() else {
            return Ok(None);
        };

        // Same abbreviation rules as `git rev-parse --short`
        let short = self.repo.find_object(oid, None)?.short_id()?;
        Ok(short.as_str().map(str::to_string))
    }

    pub fn porcelain_status(&self) -> Result<String> {
        self.run_git(&["status", "--porcelain=v1"])
    }

    pub fn shortstat(&self, staged: bool) -> Result<String> {
        if staged {
            self.run_git(&["diff", "--cached", "--shortstat"])
        } else {
            self.run_git(&["diff", "--shortstat"])
        }
    }

    pub fn get_change_summary(&self) -> Result<GitChangeSummary> {
        let mut summary = GitChangeSummary::from_porcelain(&self.porcelain_status()?);
        summary.staged_stat = self.diff_stat(true);
        summary.unstaged_stat = self.diff_stat(false);
        Ok(summary)
    }

    fn diff_stat(&self, staged: bool) -> Option<DiffStat> {
        match self.shortstat(staged) {
            Ok(output) => parse_shortstat(&output),
            Err(e) => {
                log::debug!("Ignoring shortstat failure: {e}");
                None
            }
        }
    }

    /// Run a read-only git command in the repository's working directory
    fn run_git(&self, args: &[&str]) -> Result<String> {
        let workdir = self.workdir().ok_or(StatuslineError::NotInGitRepo)?;

        let output = Command::new("git")
            .args(args)
            .current_dir(workdir)
            // Prompt rendering must not hold index.lock while the user runs git
            .env("GIT_OPTIONAL_LOCKS", "0")
            .output()?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            return Err(StatuslineError::git_command_failed(
                args.join(" "),
                error_msg.trim(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn open_work_tree(path: &Path) -> Option<GitRepo> {
    match GitRepo::open(path) {
        Ok(repo) if repo.workdir().is_some() => Some(repo),
        Ok(_) => {
            log::debug!("{} is inside a bare repository", path.display());
            None
        }
        Err(e) => {
            log::debug!("No repository at {}: {e}", path.display());
            None
        }
    }
}

/// Whether `path` is inside a git working tree
pub fn is_repository(path: &Path) -> bool {
    open_work_tree(path).is_some()
}

/// Current branch name, short commit id when detached, or empty
pub fn current_branch(path: &Path) -> String {
    let Some(repo) = open_work_tree(path) else {
        return String::new();
    };

    match repo.get_current_branch() {
        Ok(Some(name)) => name,
        Ok(None) => String::new(),
        Err(e) => {
            log::debug!("Could not resolve HEAD in {}: {e}", path.display());
            String::new()
        }
    }
}

/// Staged and unstaged change counts with diff stats, zeroed on any failure
pub fn change_summary(path: &Path) -> GitChangeSummary {
    let Some(repo) = open_work_tree(path) else {
        return GitChangeSummary::default();
    };

    repo.get_change_summary().unwrap_or_else(|e| {
        log::debug!("Could not read status in {}: {e}", path.display());
        GitChangeSummary::default()
    })
}
