use crate::core::{
    config::StatuslineConfig,
    error::Result,
    git::{change_summary, current_branch, is_repository},
    github::GithubClient,
    input::StatusLineInput,
    notifications::NotificationGateway,
    templates::{render_status_line, shorten_path, StatusLineContext},
};
use std::io::{Read, Write};
use std::path::Path;

/// Read the session descriptor from `input` and write one status line to `output`.
///
/// Only a malformed descriptor is an error; everything else degrades to
/// fewer segments.
pub fn execute_statusline<R: Read, W: Write>(
    config: &StatuslineConfig,
    input: R,
    output: &mut W,
) -> Result<()> {
    let descriptor = StatusLineInput::from_reader(input)?;
    log::debug!("Rendering for session '{}'", descriptor.session_id);

    let line = build_status_line(config, &descriptor);
    output.write_all(line.as_bytes())?;
    output.flush()?;
    Ok(())
}

pub fn build_status_line(config: &StatuslineConfig, descriptor: &StatusLineInput) -> String {
    let current_dir = descriptor.workspace.current_dir.as_str();

    let (branch, changes) = if is_repository(Path::new(current_dir)) {
        let dir = Path::new(current_dir);
        (Some(current_branch(dir)), Some(change_summary(dir)))
    } else {
        log::debug!("{current_dir} is not inside a git repository");
        (None, None)
    };

    let badge = if config.show_notifications {
        notification_badge(config)
    } else {
        None
    };

    let path = shorten_path(
        current_dir,
        &config.home_dir_str(),
        descriptor.workspace.project_dir(),
    );

    let context = StatusLineContext {
        badge,
        branch: branch.as_deref(),
        changes: changes.as_ref(),
        path: &path,
    };
    render_status_line(&context)
}

fn notification_badge(config: &StatuslineConfig) -> Option<u64> {
    let Some(cache) = config.cache() else {
        log::debug!("No cache file available, skipping notifications");
        return None;
    };

    let client = match GithubClient::new(config.api_base_url.as_str()) {
        Ok(client) => client,
        Err(e) => {
            log::warn!("Could not build GitHub client: {e}");
            return None;
        }
    };

    NotificationGateway::new(cache, client, config.github_token.clone())
        .count()
        .badge()
}
