use crate::core::{
    config::{StatuslineConfig, GITHUB_TOKEN_KEY},
    error::Result,
    github::{GithubClient, Notification, NotificationSource},
    print_failure, print_info, print_section_header, print_success,
};

const HEADER: &str = "🔔 GitHub Notifications";

/// List unread participating notifications. Problems with the token or the
/// API are reported on stdout and are not errors.
pub fn execute_noti(config: &StatuslineConfig) -> Result<()> {
    print_section_header(HEADER);

    let Some(token) = config.github_token.as_deref() else {
        print_failure(&format!("{GITHUB_TOKEN_KEY} not set in .env file"));
        print_info("Please add your GitHub token to .env file:");
        print_info(&format!("{GITHUB_TOKEN_KEY}=your_personal_access_token"));
        return Ok(());
    };

    let fetched =
        GithubClient::new(config.api_base_url.as_str()).and_then(|client| client.fetch(token));

    let notifications = match fetched {
        Ok(notifications) => notifications,
        Err(e) => {
            print_failure(&format!("Error fetching notifications: {e}"));
            return Ok(());
        }
    };

    if notifications.is_empty() {
        print_success("No unread notifications");
        return Ok(());
    }

    print_info(&format!(
        "📨 Found {} unread notification(s):\n",
        notifications.len()
    ));
    for (i, notification) in notifications.iter().enumerate() {
        print_info(&format_notification(i + 1, notification));
    }

    Ok(())
}

/// One numbered entry, followed by a blank line
pub fn format_notification(index: usize, notification: &Notification) -> String {
    let mut entry = format!(
        "{index}. [{}] {}\n   Repository: {}\n   Reason: {}\n",
        notification.subject.kind,
        notification.subject.title,
        notification.repository.full_name,
        notification.reason
    );
    if let Some(url) = notification.subject.url.as_deref().filter(|u| !u.is_empty()) {
        entry.push_str(&format!("   URL: {url}\n"));
    }
    entry
}
