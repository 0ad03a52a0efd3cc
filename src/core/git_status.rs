//! Classification of porcelain status lines and shortstat summaries.
//!
//! This module turns raw `git status --porcelain=v1` and `git diff --shortstat`
//! output into a small structured [`GitChangeSummary`]. Everything here is pure
//! string processing; running git lives in [`crate::core::git`].
//!
//! # Public API
//! - [`ChangeKind`]: The three change categories the status line shows
//! - [`ChangeCounts`]: Per-kind counters for one stage
//! - [`DiffStat`]: Parsed shortstat summary
//! - [`GitChangeSummary`]: Staged and unstaged counts plus their diff stats
//! - [`parse_porcelain`], [`parse_shortstat`]: The parsers
//!
//! # Classification rules
//! - **Index column**: `A` added, `D` deleted, `M`/`R`/`C` modified
//! - **Worktree column**: `M` modified, `D` deleted
//! - **Untracked** (`??`): one unstaged addition, never staged
//! - Anything else is ignored

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
}

impl ChangeKind {
    /// Classify the index (staged) column of a porcelain line.
    /// Renames and copies count as modifications.
    pub fn from_index_code(code: u8) -> Option<Self> {
        match code {
            b'A' => Some(ChangeKind::Added),
            b'D' => Some(ChangeKind::Deleted),
            b'M' | b'R' | b'C' => Some(ChangeKind::Modified),
            _ => None,
        }
    }

    /// Classify the worktree (unstaged) column of a porcelain line.
    /// `A` is not a worktree code in porcelain v1 and is ignored.
    pub fn from_worktree_code(code: u8) -> Option<Self> {
        match code {
            b'M' => Some(ChangeKind::Modified),
            b'D' => Some(ChangeKind::Deleted),
            _ => None,
        }
    }

    /// Prefix symbol used when rendering a count of this kind
    pub fn symbol(&self) -> char {
        match self {
            ChangeKind::Added => '+',
            ChangeKind::Modified => '~',
            ChangeKind::Deleted => '-',
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeCounts {
    pub added: u32,
    pub modified: u32,
    pub deleted: u32,
}

impl ChangeCounts {
    pub fn record(&mut self, kind: ChangeKind) {
        match kind {
            ChangeKind::Added => self.added += 1,
            ChangeKind::Modified => self.modified += 1,
            ChangeKind::Deleted => self.deleted += 1,
        }
    }

    pub fn get(&self, kind: ChangeKind) -> u32 {
        match kind {
            ChangeKind::Added => self.added,
            ChangeKind::Modified => self.modified,
            ChangeKind::Deleted => self.deleted,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.modified == 0 && self.deleted == 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStat {
    pub files_changed: u32,
    pub insertions: u32,
    pub deletions: u32,
}

impl DiffStat {
    pub fn is_empty(&self) -> bool {
        self.files_changed == 0 && self.insertions == 0 && self.deletions == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitChangeSummary {
    pub staged: ChangeCounts,
    pub unstaged: ChangeCounts,
    pub staged_stat: Option<DiffStat>,
    pub unstaged_stat: Option<DiffStat>,
}

impl GitChangeSummary {
    /// Build a summary from porcelain output alone, without diff stats
    pub fn from_porcelain(output: &str) -> Self {
        let (staged, unstaged) = parse_porcelain(output);
        Self {
            staged,
            unstaged,
            ..Default::default()
        }
    }

    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.unstaged.is_empty()
    }
}

/// Count porcelain v1 lines into `(staged, unstaged)` counters.
pub fn parse_porcelain(output: &str) -> (ChangeCounts, ChangeCounts) {
    let mut staged = ChangeCounts::default();
    let mut unstaged = ChangeCounts::default();

    for line in output.lines() {
        let bytes = line.as_bytes();
        if bytes.len() < 2 {
            continue;
        }
        let (index, worktree) = (bytes[0], bytes[1]);

        if index == b'?' && worktree == b'?' {
            unstaged.record(ChangeKind::Added);
            continue;
        }
        if let Some(kind) = ChangeKind::from_index_code(index) {
            staged.record(kind);
        }
        if let Some(kind) = ChangeKind::from_worktree_code(worktree) {
            unstaged.record(kind);
        }
    }

    (staged, unstaged)
}

/// Parse a `git diff --shortstat` summary line such as
/// `2 files changed, 150 insertions(+), 50 deletions(-)`.
///
/// Missing clauses count as zero. Returns `None` for empty output or when no
/// clause can be recognized.
pub fn parse_shortstat(output: &str) -> Option<DiffStat> {
    let line = output.trim();
    if line.is_empty() {
        return None;
    }

    let mut stat = DiffStat::default();
    let mut recognized = false;

    for clause in line.split(',') {
        let clause = clause.trim();
        let mut words = clause.split_whitespace();
        let Some(count) = words.next().and_then(|n| n.parse::<u32>().ok()) else {
            continue;
        };
        let Some(label) = words.next() else {
            continue;
        };

        if label.starts_with("file") {
            stat.files_changed = count;
        } else if label.starts_with("insertion") {
            stat.insertions = count;
        } else if label.starts_with("deletion") {
            stat.deletions = count;
        } else {
            continue;
        }
        recognized = true;
    }

    recognized.then_some(stat)
}
