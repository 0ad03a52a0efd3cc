//! Status line assembly.
//!
//! Segments are rendered in a fixed order and joined with single spaces:
//!
//! ```text
//! [badge] [branch] [staged] [unstaged] path
//! ```
//!
//! A segment with no data is left out entirely rather than rendered blank.
//!
//! # Public API
//! - [`StatusLineContext`]: Everything one render needs
//! - [`render_status_line`]: Colored output
//! - [`render_status_line_plain`]: Plain output for tests and logs
//! - [`shorten_path`]: Home/project relative path display
//! - [`strip_ansi_codes`]: Utility for removing color codes

use crate::core::colors::{
    get_colored_badge, get_colored_branch, get_colored_counts, get_colored_diff_stat,
    get_colored_path, Stage,
};
use crate::core::git_status::{ChangeCounts, DiffStat, GitChangeSummary};

/// Context for status line rendering
#[derive(Debug, Default)]
pub struct StatusLineContext<'a> {
    pub badge: Option<u64>,
    pub branch: Option<&'a str>,
    pub changes: Option<&'a GitChangeSummary>,
    pub path: &'a str,
}

/// Render the status line with colors
pub fn render_status_line(context: &StatusLineContext) -> String {
    let mut segments: Vec<String> = Vec::with_capacity(5);

    if let Some(count) = context.badge {
        segments.push(get_colored_badge(count).to_string());
    }

    if let Some(branch) = context.branch.filter(|b| !b.is_empty()) {
        segments.push(get_colored_branch(branch).to_string());
    }

    if let Some(changes) = context.changes {
        segments.extend(render_change_segment(
            &changes.staged,
            changes.staged_stat.as_ref(),
            Stage::Staged,
        ));
        segments.extend(render_change_segment(
            &changes.unstaged,
            changes.unstaged_stat.as_ref(),
            Stage::Unstaged,
        ));
    }

    segments.push(get_colored_path(context.path).to_string());
    segments.join(" ")
}

/// Render the status line without colors
pub fn render_status_line_plain(context: &StatusLineContext) -> String {
    strip_ansi_codes(&render_status_line(context))
}

/// Counts followed by the diff stat, or nothing when the stage is clean
fn render_change_segment(
    counts: &ChangeCounts,
    stat: Option<&DiffStat>,
    stage: Stage,
) -> Option<String> {
    if counts.is_empty() {
        return None;
    }

    let mut segment = get_colored_counts(counts, stage);
    if let Some(stat) = stat {
        segment.push_str(&get_colored_diff_stat(stat));
    }
    Some(segment)
}

/// Shorten `current` for display.
///
/// Paths under the home directory become `~/...`; paths under the project
/// directory become project relative, which takes precedence. A path equal to
/// either root is returned unchanged. `project` may be empty or `"null"`.
pub fn shorten_path(current: &str, home: &str, project: &str) -> String {
    let mut short = current.to_string();

    if !home.is_empty() && current != home {
        if let Some(rest) = strip_dir_prefix(current, home) {
            short = format!("~/{rest}");
        }
    }

    if !project.is_empty() && project != "null" && current != project {
        if let Some(rest) = strip_dir_prefix(current, project) {
            short = rest.to_string();
        }
    }

    short
}

/// `path` relative to `dir` when `path` is strictly below it
fn strip_dir_prefix<'a>(path: &'a str, dir: &str) -> Option<&'a str> {
    path.strip_prefix(dir)?.strip_prefix('/')
}

/// Strip ANSI color codes from text
pub fn strip_ansi_codes(text: &str) -> String {
    // Simple state machine to remove ANSI escape sequences
    let mut result = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}
