//! Unified color system for status line segments.
//!
//! # Color Scheme
//! - **Branch**: Cyan
//! - **Path**: Magenta
//! - **Notification badge**: Red
//! - **Staged changes**: Green added, yellow modified, red deleted
//! - **Unstaged changes**: The bright variants of the staged colors
//! - **Diff stat**: Cyan file count, green insertions, red deletions

use crate::core::git_status::{ChangeCounts, ChangeKind, DiffStat};
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Staged,
    Unstaged,
}

/// Single function to apply color styling based on change kind and stage
pub fn get_change_color_style(kind: ChangeKind, stage: Stage) -> Box<dyn Fn(&str) -> ColoredString> {
    match (kind, stage) {
        (ChangeKind::Added, Stage::Staged) => Box::new(|text: &str| text.green()),
        (ChangeKind::Modified, Stage::Staged) => Box::new(|text: &str| text.yellow()),
        (ChangeKind::Deleted, Stage::Staged) => Box::new(|text: &str| text.red()),
        (ChangeKind::Added, Stage::Unstaged) => Box::new(|text: &str| text.bright_green()),
        (ChangeKind::Modified, Stage::Unstaged) => Box::new(|text: &str| text.bright_yellow()),
        (ChangeKind::Deleted, Stage::Unstaged) => Box::new(|text: &str| text.bright_red()),
    }
}

/// `+A~M-D` with zero counts left out, empty when nothing changed
pub fn get_colored_counts(counts: &ChangeCounts, stage: Stage) -> String {
    [ChangeKind::Added, ChangeKind::Modified, ChangeKind::Deleted]
        .into_iter()
        .filter(|kind| counts.get(*kind) > 0)
        .map(|kind| {
            let color_fn = get_change_color_style(kind, stage);
            color_fn(&format!("{}{}", kind.symbol(), counts.get(kind))).to_string()
        })
        .collect()
}

/// `(Nf+I-D)`; the parentheses only appear when a file count is present
pub fn get_colored_diff_stat(stat: &DiffStat) -> String {
    let mut result = String::new();

    if stat.files_changed > 0 {
        result.push('(');
        result.push_str(&format!("{}f", stat.files_changed).cyan().to_string());
    }
    if stat.insertions > 0 {
        result.push_str(&format!("+{}", stat.insertions).green().to_string());
    }
    if stat.deletions > 0 {
        result.push_str(&format!("-{}", stat.deletions).red().to_string());
    }
    if stat.files_changed > 0 {
        result.push(')');
    }

    result
}

pub fn get_colored_branch(branch: &str) -> ColoredString {
    branch.cyan()
}

pub fn get_colored_path(path: &str) -> ColoredString {
    path.magenta()
}

pub fn get_colored_badge(count: u64) -> ColoredString {
    format!("🔔{count}").red()
}
